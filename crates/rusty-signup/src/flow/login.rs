//! Login form submission

use super::FormResponse;
use crate::error::AuthError;
use crate::store::{CredentialStore, Storage};
use crate::validation::Field;
use serde::{Deserialize, Serialize};

/// Values submitted by the login form
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginForm {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
    /// "Remain signed in" checkbox
    #[serde(default)]
    pub remember: bool,
}

/// A successful login
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoggedIn {
    pub username: String,
    /// Informational only; no session is kept
    pub remember: bool,
}

/// Checks the submitted credentials
///
/// Order: username present, username known, password present, password
/// matches. Stops at the first failure.
pub fn login<S: Storage>(store: &CredentialStore<S>, form: &LoginForm) -> Result<LoggedIn, AuthError> {
    if form.username.is_empty() {
        return Err(AuthError::EmptyCredential(Field::Username));
    }
    if !store.exists(&form.username) {
        tracing::debug!(username = %form.username, "Login for unknown user");
        return Err(AuthError::UnknownUser);
    }
    if form.password.is_empty() {
        return Err(AuthError::EmptyCredential(Field::Password));
    }
    store.authenticate(&form.username, &form.password)?;

    let username = form.username.to_lowercase();
    tracing::info!(username = %username, remember = form.remember, "Login successful");

    Ok(LoggedIn {
        username,
        remember: form.remember,
    })
}

impl From<Result<LoggedIn, AuthError>> for FormResponse {
    fn from(result: Result<LoggedIn, AuthError>) -> Self {
        match result {
            Ok(LoggedIn { remember: true, .. }) => {
                FormResponse::success("Login successful, you will remain signed in")
            }
            Ok(_) => FormResponse::success("Login successful"),
            Err(err) => FormResponse::failure(Some(err.field()), err.to_string()),
        }
    }
}
