use colored::Colorize;
use rusty_signup::{CredentialStore, FileStorage};

pub fn execute(store: &CredentialStore<FileStorage>) -> bool {
    let usernames = store.usernames();
    let location = store.storage().dir().display().to_string();

    if usernames.is_empty() {
        println!("{} {}", "No users registered yet in".yellow(), location.dimmed());
        return true;
    }

    println!(
        "{} {}",
        format!("{} registered user(s) in", usernames.len()).green().bold(),
        location.dimmed()
    );
    for username in usernames {
        println!("  {}", username.cyan());
    }

    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_users_lists_empty_and_populated_store() {
        let tmp = TempDir::new().unwrap();
        let store = CredentialStore::new(FileStorage::new(tmp.path()));

        assert!(execute(&store));

        store.register("erin", "erin@test.com", "StrongPass1!").unwrap();
        assert!(execute(&store));
        assert_eq!(store.storage().dir(), tmp.path());
    }
}
