use crate::models::{CitizenProfile, SchemeRecord, TagMatchPolicy};
use crate::core::filters::is_eligible;

/// Result of evaluating a profile against a catalog
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchResult {
    pub matches: Vec<SchemeRecord>,
    pub total_schemes: usize,
}

impl MatchResult {
    pub fn count(&self) -> usize {
        self.matches.len()
    }
}

/// Eligibility engine - a stable filter over the scheme catalog
///
/// Every record is checked independently against the five dimensions
/// (age, gender, category, occupation, income). Output keeps catalog order;
/// nothing is ranked, cached or indexed between calls.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EligibilityEngine {
    policy: TagMatchPolicy,
}

impl EligibilityEngine {
    pub fn new(policy: TagMatchPolicy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> TagMatchPolicy {
        self.policy
    }

    /// Records the profile qualifies for, in catalog order
    pub fn evaluate<'a>(
        &self,
        profile: &CitizenProfile,
        catalog: &'a [SchemeRecord],
    ) -> Vec<&'a SchemeRecord> {
        catalog
            .iter()
            .filter(|record| is_eligible(profile, record, self.policy))
            .collect()
    }

    /// Positions of qualifying records in the catalog, ascending
    pub fn matching_indices(&self, profile: &CitizenProfile, catalog: &[SchemeRecord]) -> Vec<usize> {
        catalog
            .iter()
            .enumerate()
            .filter(|(_, record)| is_eligible(profile, record, self.policy))
            .map(|(index, _)| index)
            .collect()
    }

    /// Owned variant of [`evaluate`](Self::evaluate) for handing results across a boundary
    pub fn find_matches(&self, profile: &CitizenProfile, catalog: &[SchemeRecord]) -> MatchResult {
        let matches: Vec<SchemeRecord> = self
            .evaluate(profile, catalog)
            .into_iter()
            .cloned()
            .collect();

        tracing::debug!(
            "Profile (age {}) matched {} of {} schemes",
            profile.age,
            matches.len(),
            catalog.len()
        );

        MatchResult {
            matches,
            total_schemes: catalog.len(),
        }
    }
}
