//! Email validation

use super::{check_field, Field, Rule, ValidationFailure};
use once_cell::sync::Lazy;
use regex::Regex;

// local@domain.tld, no whitespace or extra '@' in any part
static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap());

/// Domain whose addresses are never accepted
pub const REJECTED_DOMAIN: &str = "example.com";

fn email_rules() -> [Rule<str>; 2] {
    [
        Rule::new("Please enter a valid email address", |email: &str| EMAIL_REGEX.is_match(email)),
        Rule::new(
            "Email addresses from the example.com domain are not accepted",
            |email: &str| !is_rejected_domain(email),
        ),
    ]
}

/// Checks whether the address ends in `@example.com`, ignoring case
pub fn is_rejected_domain(email: &str) -> bool {
    email
        .rsplit_once('@')
        .map(|(_, domain)| domain.eq_ignore_ascii_case(REJECTED_DOMAIN))
        .unwrap_or(false)
}

/// Validates the registration email address
pub fn validate_email(value: &str) -> Result<(), ValidationFailure> {
    check_field(Field::Email, value, &email_rules())
}
