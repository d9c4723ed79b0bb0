//! Username validation

use super::{check_field, Field, Rule, ValidationFailure};
use once_cell::sync::Lazy;
use regex::Regex;

static ALPHANUMERIC_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[A-Za-z0-9]+$").unwrap());

pub const MIN_USERNAME_LENGTH: usize = 4;

/// Read-only view of the usernames already taken
///
/// Implemented by [`CredentialStore`](crate::store::CredentialStore); tests
/// can supply any set of names.
pub trait UsernameRegistry {
    /// Case-insensitive membership check
    fn exists(&self, username: &str) -> bool;
}

struct UsernameInput<'a> {
    value: &'a str,
    registry: &'a dyn UsernameRegistry,
}

fn username_rules<'a>() -> [Rule<UsernameInput<'a>>; 5] {
    [
        Rule::new("Please enter a username", |input: &UsernameInput<'a>| !input.value.is_empty()),
        Rule::new("The username must be at least four characters long", |input: &UsernameInput<'a>| {
            input.value.chars().count() >= MIN_USERNAME_LENGTH
        }),
        Rule::new("The username must be at least two unique characters long", |input: &UsernameInput<'a>| {
            has_two_distinct_chars(input.value)
        }),
        Rule::new("The username cannot contain any special characters or whitespace", |input: &UsernameInput<'a>| {
            ALPHANUMERIC_REGEX.is_match(input.value)
        }),
        Rule::new("That username is already taken", |input: &UsernameInput<'a>| {
            !input.registry.exists(input.value)
        }),
    ]
}

/// False when the whole value is one character repeated
fn has_two_distinct_chars(value: &str) -> bool {
    let mut chars = value.chars();
    match chars.next() {
        Some(first) => chars.any(|c| c != first),
        None => false,
    }
}

/// Validates a username for registration
///
/// Rules, in order: non-empty, at least four characters, not a single
/// repeated character, ASCII alphanumeric only, not already registered.
pub fn validate_username(value: &str, registry: &dyn UsernameRegistry) -> Result<(), ValidationFailure> {
    let input = UsernameInput { value, registry };
    check_field(Field::Username, &input, &username_rules())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::collections::HashSet;

    struct Taken(HashSet<String>);

    impl Taken {
        fn none() -> Self {
            Taken(HashSet::new())
        }

        fn of(names: &[&str]) -> Self {
            Taken(names.iter().map(|n| n.to_lowercase()).collect())
        }
    }

    impl UsernameRegistry for Taken {
        fn exists(&self, username: &str) -> bool {
            self.0.contains(&username.to_lowercase())
        }
    }

    fn reason(value: &str, registry: &dyn UsernameRegistry) -> Option<String> {
        validate_username(value, registry).err().map(|e| e.reason)
    }

    #[rstest]
    #[case("", "Please enter a username")]
    #[case("a", "The username must be at least four characters long")]
    #[case("ab1", "The username must be at least four characters long")]
    #[case("aaaa", "The username must be at least two unique characters long")]
    #[case("1111111", "The username must be at least two unique characters long")]
    #[case("ab cd", "The username cannot contain any special characters or whitespace")]
    #[case("user_name", "The username cannot contain any special characters or whitespace")]
    #[case("jos\u{e9}1", "The username cannot contain any special characters or whitespace")]
    fn test_rejected_usernames(#[case] value: &str, #[case] expected: &str) {
        assert_eq!(reason(value, &Taken::none()).as_deref(), Some(expected));
    }

    #[rstest]
    #[case("abab")]
    #[case("aaab")]
    #[case("User2024")]
    #[case("bob1")]
    fn test_accepted_usernames(#[case] value: &str) {
        assert!(validate_username(value, &Taken::none()).is_ok());
    }

    #[test]
    fn test_taken_username_is_case_insensitive() {
        let taken = Taken::of(&["alice"]);
        assert_eq!(
            reason("ALICE", &taken).as_deref(),
            Some("That username is already taken")
        );
        assert!(validate_username("alice2", &taken).is_ok());
    }

    #[test]
    fn test_failure_points_at_username_field() {
        let err = validate_username("", &Taken::none()).unwrap_err();
        assert_eq!(err.field, Field::Username);
    }

    #[test]
    fn test_length_counts_characters() {
        // Three characters, six bytes: still too short
        assert_eq!(
            reason("\u{e9}\u{e8}\u{ea}", &Taken::none()).as_deref(),
            Some("The username must be at least four characters long")
        );
    }
}
