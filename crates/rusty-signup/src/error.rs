use crate::validation::{Field, ValidationFailure};
use thiserror::Error;

/// Why a login attempt was refused
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthError {
    #[error("Please enter your {0}")]
    EmptyCredential(Field),

    #[error("That username does not exist")]
    UnknownUser,

    #[error("Incorrect password")]
    BadPassword,
}

impl AuthError {
    /// Input the presentation layer should focus
    pub fn field(&self) -> Field {
        match self {
            AuthError::EmptyCredential(field) => *field,
            AuthError::UnknownUser => Field::Username,
            AuthError::BadPassword => Field::Password,
        }
    }
}

/// Why a registration was not stored
#[derive(Error, Debug)]
pub enum RegistrationError {
    #[error(transparent)]
    Invalid(#[from] ValidationFailure),

    #[error("Failed to save account: {0:#}")]
    Storage(#[from] anyhow::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auth_error_messages() {
        assert_eq!(
            AuthError::EmptyCredential(Field::Username).to_string(),
            "Please enter your username"
        );
        assert_eq!(AuthError::UnknownUser.to_string(), "That username does not exist");
        assert_eq!(AuthError::BadPassword.to_string(), "Incorrect password");
    }

    #[test]
    fn test_auth_error_fields() {
        assert_eq!(AuthError::EmptyCredential(Field::Password).field(), Field::Password);
        assert_eq!(AuthError::UnknownUser.field(), Field::Username);
        assert_eq!(AuthError::BadPassword.field(), Field::Password);
    }

    #[test]
    fn test_invalid_registration_shows_reason() {
        let err = RegistrationError::from(ValidationFailure::new(Field::Terms, "nope"));
        assert_eq!(err.to_string(), "nope");
    }
}
