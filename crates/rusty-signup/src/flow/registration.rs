//! Registration form submission

use super::FormResponse;
use crate::error::RegistrationError;
use crate::store::{CredentialStore, Storage};
use crate::validation::{validate_email, validate_password, validate_terms, validate_username};
use serde::{Deserialize, Serialize};

/// Values submitted by the registration form
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistrationForm {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
    #[serde(default)]
    pub password_confirm: String,
    #[serde(default)]
    pub terms_accepted: bool,
}

/// A stored registration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Registered {
    /// Canonical (lowercase) username the account is stored under
    pub username: String,
}

/// Validates the form and stores the account
///
/// Checks run username → email → password → terms; the first failure is
/// returned and nothing is written.
pub fn register<S: Storage>(
    store: &CredentialStore<S>,
    form: &RegistrationForm,
) -> Result<Registered, RegistrationError> {
    validate_username(&form.username, store)?;
    validate_email(&form.email)?;
    validate_password(&form.password, &form.password_confirm, &form.username)?;
    validate_terms(form.terms_accepted)?;

    store.register(&form.username, &form.email, &form.password)?;

    Ok(Registered {
        username: form.username.to_lowercase(),
    })
}

impl From<Result<Registered, RegistrationError>> for FormResponse {
    fn from(result: Result<Registered, RegistrationError>) -> Self {
        match result {
            Ok(_) => FormResponse::success("Registration successful"),
            Err(RegistrationError::Invalid(failure)) => FormResponse::failure(Some(failure.field), failure.reason),
            Err(err @ RegistrationError::Storage(_)) => FormResponse::failure(None, err.to_string()),
        }
    }
}
