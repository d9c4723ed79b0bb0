use super::report;
use rusty_signup::{login, CredentialStore, FileStorage, FormResponse, LoginForm};

pub fn execute(store: &CredentialStore<FileStorage>, form: &LoginForm) -> bool {
    report(&FormResponse::from(login(store, form)))
}
