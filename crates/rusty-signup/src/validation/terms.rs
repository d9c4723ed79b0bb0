//! Terms-of-service acceptance

use super::{check_field, Field, Rule, ValidationFailure};

fn terms_rules() -> [Rule<bool>; 1] {
    [Rule::new("You must accept the terms and conditions", |accepted: &bool| *accepted)]
}

pub fn validate_terms(accepted: bool) -> Result<(), ValidationFailure> {
    check_field(Field::Terms, &accepted, &terms_rules())
}
