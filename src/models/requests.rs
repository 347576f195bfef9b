use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};
use crate::core::session::ProfileEdit;
use crate::models::domain::{
    Category, CitizenProfile, Gender, IncomeBracket, Occupation, Restriction, DEFAULT_AGE,
};

/// Request to evaluate a profile against the scheme catalog
///
/// Every profile field is optional and falls back to its default. `edits` are
/// applied in order after the base profile, each one re-deriving the matches.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct EvaluateRequest {
    #[validate(range(min = 0, max = 150))]
    #[serde(default = "default_age")]
    pub age: i32,
    #[serde(default)]
    pub gender: Restriction<Gender>,
    #[serde(default)]
    pub category_interest: Restriction<Category>,
    #[serde(default)]
    pub occupation: Restriction<Occupation>,
    #[serde(default)]
    pub income_group: Restriction<IncomeBracket>,
    #[validate(custom(function = "validate_edit_ages"))]
    #[serde(default)]
    pub edits: Vec<ProfileEdit>,
}

fn default_age() -> i32 {
    DEFAULT_AGE
}

/// Age edits are held to the same 0..=150 window as the base profile
fn validate_edit_ages(edits: &[ProfileEdit]) -> Result<(), ValidationError> {
    let out_of_range = edits
        .iter()
        .any(|edit| matches!(edit, ProfileEdit::Age(age) if !(0..=150).contains(age)));

    if out_of_range {
        return Err(ValidationError::new("age_out_of_range"));
    }
    Ok(())
}

impl EvaluateRequest {
    pub fn profile(&self) -> CitizenProfile {
        CitizenProfile {
            age: self.age,
            gender: self.gender,
            category_interest: self.category_interest,
            occupation: self.occupation,
            income_group: self.income_group,
        }
    }
}
