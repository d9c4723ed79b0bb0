use super::report;
use rusty_signup::{register, CredentialStore, FileStorage, FormResponse, RegistrationForm};

pub fn execute(store: &CredentialStore<FileStorage>, form: &RegistrationForm) -> bool {
    report(&FormResponse::from(register(store, form)))
}
