//! Password validation

use super::{check_field, Field, Rule, ValidationFailure};

pub const MIN_PASSWORD_LENGTH: usize = 12;

/// Word a password may not contain, in any letter case
pub const FORBIDDEN_WORD: &str = "password";

struct PasswordInput<'a> {
    password: &'a str,
    confirm: &'a str,
    username: &'a str,
}

fn strength_rules<'a>() -> [Rule<PasswordInput<'a>>; 6] {
    [
        Rule::new("The password must be at least 12 characters long", |input: &PasswordInput<'a>| {
            input.password.chars().count() >= MIN_PASSWORD_LENGTH
        }),
        Rule::new(
            "The password must contain at least one uppercase and one lowercase letter",
            |input: &PasswordInput<'a>| {
                input.password.chars().any(char::is_uppercase) && input.password.chars().any(char::is_lowercase)
            },
        ),
        Rule::new("The password must contain at least one number", |input: &PasswordInput<'a>| {
            input.password.chars().any(char::is_numeric)
        }),
        Rule::new("The password must contain at least one special character", |input: &PasswordInput<'a>| {
            input.password.chars().any(|c| !c.is_alphanumeric())
        }),
        Rule::new("The password cannot contain the word \"password\"", |input: &PasswordInput<'a>| {
            !contains_ignore_case(input.password, FORBIDDEN_WORD)
        }),
        Rule::new("The password cannot contain the username", |input: &PasswordInput<'a>| {
            input.username.is_empty() || !contains_ignore_case(input.password, input.username)
        }),
    ]
}

fn confirmation_rules<'a>() -> [Rule<PasswordInput<'a>>; 1] {
    [Rule::new("Both passwords must match", |input: &PasswordInput<'a>| {
        input.password == input.confirm
    })]
}

fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

/// Validates a new password against the strength rules, then the confirmation
///
/// Strength failures point at [`Field::Password`]; a confirmation mismatch
/// points at [`Field::PasswordConfirm`]. An empty `username` skips the
/// username-substring rule.
pub fn validate_password(password: &str, confirm: &str, username: &str) -> Result<(), ValidationFailure> {
    let input = PasswordInput {
        password,
        confirm,
        username,
    };
    check_field(Field::Password, &input, &strength_rules())?;
    check_field(Field::PasswordConfirm, &input, &confirmation_rules())
}
