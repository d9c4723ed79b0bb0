// File: src/validation/mod.rs
// Purpose: Ordered rule evaluation shared by every field validator

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

pub mod email;
pub mod password;
pub mod terms;
pub mod username;

pub use email::validate_email;
pub use password::validate_password;
pub use terms::validate_terms;
pub use username::{validate_username, UsernameRegistry};

/// Form inputs a failure can point at
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Field {
    Username,
    Email,
    Password,
    PasswordConfirm,
    Terms,
}

impl Field {
    /// Name used on the wire and by the presentation layer
    pub fn as_str(&self) -> &'static str {
        match self {
            Field::Username => "username",
            Field::Email => "email",
            Field::Password => "password",
            Field::PasswordConfirm => "passwordConfirm",
            Field::Terms => "terms",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The first rule a field value violated
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
#[error("{reason}")]
pub struct ValidationFailure {
    pub field: Field,
    pub reason: String,
}

impl ValidationFailure {
    pub fn new(field: Field, reason: impl Into<String>) -> Self {
        Self {
            field,
            reason: reason.into(),
        }
    }
}

/// A single predicate paired with the message reported when it fails
///
/// `check` returns `true` when the input satisfies the rule.
pub struct Rule<I: ?Sized> {
    pub reason: &'static str,
    pub check: fn(&I) -> bool,
}

impl<I: ?Sized> Rule<I> {
    pub const fn new(reason: &'static str, check: fn(&I) -> bool) -> Self {
        Self { reason, check }
    }
}

/// Runs `rules` in order and returns the reason of the first one that fails
///
/// Later rules never run once one has failed, so a rule may assume every
/// rule before it passed.
pub fn first_failure<I: ?Sized>(input: &I, rules: &[Rule<I>]) -> Option<&'static str> {
    rules
        .iter()
        .find(|rule| !(rule.check)(input))
        .map(|rule| rule.reason)
}

/// Evaluates a rule set for `field`, turning the first failure into a [`ValidationFailure`]
pub(crate) fn check_field<I: ?Sized>(field: Field, input: &I, rules: &[Rule<I>]) -> Result<(), ValidationFailure> {
    match first_failure(input, rules) {
        Some(reason) => {
            tracing::debug!(field = %field, reason, "validation failed");
            Err(ValidationFailure::new(field, reason))
        }
        None => Ok(()),
    }
}
