//! Gov&Me Schemes - eligibility matching for government benefit schemes
//!
//! This library decides which schemes in a benefit catalog a citizen
//! qualifies for, given their age, gender, category interest, occupation and
//! income group. It also carries the per-visit finder session, the filter
//! panel state, and thin clients for the catalog store and tax calculator.

pub mod config;
pub mod core;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use core::{EligibilityEngine, FinderSession, LoadStatus, ProfileEdit};
pub use models::{CitizenProfile, Restriction, SchemeRecord, TagMatchPolicy};
pub use services::{CatalogClient, CatalogError, CatalogSource};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_library_exports() {
        let engine = EligibilityEngine::default();
        assert_eq!(engine.policy(), TagMatchPolicy::Substring);
        assert!(engine.evaluate(&CitizenProfile::default(), &[]).is_empty());
    }
}
