use serde::{Deserialize, Serialize};
use crate::models::domain::{Category, Gender, IncomeBracket, Label, Occupation};

/// Scheme types the catalog currently carries
pub const SCHEME_TYPES: &[&str] = &["Central"];

/// Selectable values for each filter control
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterOptions {
    pub types: Vec<String>,
    pub categories: Vec<String>,
    pub genders: Vec<String>,
    pub occupations: Vec<String>,
    pub income_thresholds: Vec<String>,
}

/// Wildcard first, then every specific option in display order
fn with_wildcard<T: Label>() -> Vec<String> {
    std::iter::once(T::WILDCARD)
        .chain(T::VARIANTS.iter().map(|v| v.label()))
        .map(str::to_string)
        .collect()
}

impl FilterOptions {
    pub fn standard() -> Self {
        Self {
            types: SCHEME_TYPES.iter().map(|t| t.to_string()).collect(),
            // The category control renders its own "All Categories" entry
            categories: Category::VARIANTS.iter().map(|c| c.label().to_string()).collect(),
            genders: with_wildcard::<Gender>(),
            occupations: with_wildcard::<Occupation>(),
            income_thresholds: with_wildcard::<IncomeBracket>(),
        }
    }
}

impl Default for FilterOptions {
    fn default() -> Self {
        Self::standard()
    }
}
