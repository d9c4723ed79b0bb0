// File: src/flow/mod.rs
// Purpose: Form submission handlers and the result shape the page renders

use crate::validation::{Field, ValidationFailure};
use serde::{Deserialize, Serialize};

pub mod login;
pub mod registration;

pub use login::{login, LoggedIn, LoginForm};
pub use registration::{register, Registered, RegistrationForm};

/// Result handed to the presentation layer
///
/// `field` is set on failures that belong to a specific input so the page
/// can focus it. `message` is empty for a bare field check that passed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormResponse {
    pub ok: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub field: Option<Field>,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub message: String,
}

impl FormResponse {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            ok: true,
            field: None,
            message: message.into(),
        }
    }

    pub fn failure(field: Option<Field>, message: impl Into<String>) -> Self {
        Self {
            ok: false,
            field,
            message: message.into(),
        }
    }
}

impl From<Result<(), ValidationFailure>> for FormResponse {
    fn from(result: Result<(), ValidationFailure>) -> Self {
        match result {
            Ok(()) => Self::success(""),
            Err(failure) => Self::failure(Some(failure.field), failure.reason),
        }
    }
}
