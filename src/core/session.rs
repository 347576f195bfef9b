use serde::{Deserialize, Serialize};
use crate::core::{matcher::EligibilityEngine, panel::FilterPanel};
use crate::models::{
    Category, CitizenProfile, Gender, IncomeBracket, Occupation, Restriction, SchemeRecord,
};
use crate::services::catalog::CatalogSource;

/// Where the session's catalog load stands
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "state", content = "reason", rename_all = "lowercase")]
pub enum LoadStatus {
    Loading,
    Ready,
    /// The load failed; the catalog stays empty for the rest of the session
    Unavailable(String),
}

impl LoadStatus {
    pub fn is_complete(&self) -> bool {
        !matches!(self, LoadStatus::Loading)
    }
}

/// A single user action on the filter controls
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "field", content = "value", rename_all = "camelCase")]
pub enum ProfileEdit {
    Age(i32),
    Gender(Restriction<Gender>),
    Category(Restriction<Category>),
    Occupation(Restriction<Occupation>),
    Income(Restriction<IncomeBracket>),
    /// Restore every field to its default
    Reset,
}

/// Serializable view of a session after the latest change
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionSnapshot {
    pub catalog_status: LoadStatus,
    pub profile: CitizenProfile,
    pub count: usize,
    pub matches: Vec<SchemeRecord>,
}

/// State of one visit to the scheme finder
///
/// Owns the profile, the catalog loaded for this visit, and the filter panel.
/// Matches are re-derived from the whole catalog after every change.
#[derive(Debug, Clone)]
pub struct FinderSession {
    engine: EligibilityEngine,
    profile: CitizenProfile,
    catalog: Vec<SchemeRecord>,
    matched: Vec<usize>,
    status: LoadStatus,
    panel: FilterPanel,
}

impl FinderSession {
    pub fn new(engine: EligibilityEngine, panel: FilterPanel) -> Self {
        Self::with_profile(engine, panel, CitizenProfile::default())
    }

    pub fn with_profile(engine: EligibilityEngine, panel: FilterPanel, profile: CitizenProfile) -> Self {
        Self {
            engine,
            profile,
            catalog: Vec::new(),
            matched: Vec::new(),
            status: LoadStatus::Loading,
            panel,
        }
    }

    /// Load the catalog for this visit
    ///
    /// Issues exactly one read. A failure leaves the catalog empty and still
    /// completes loading. Later calls return the settled status without
    /// touching the source.
    pub async fn activate<S: CatalogSource>(&mut self, source: &S) -> &LoadStatus {
        if self.status.is_complete() {
            return &self.status;
        }

        match source.load_catalog().await {
            Ok(records) => {
                tracing::info!("Scheme catalog loaded ({} schemes)", records.len());
                self.catalog = records;
                self.status = LoadStatus::Ready;
            }
            Err(e) => {
                tracing::error!("Error fetching schemes: {}", e);
                self.catalog.clear();
                self.status = LoadStatus::Unavailable(e.to_string());
            }
        }

        self.recompute();
        &self.status
    }

    pub fn apply(&mut self, edit: ProfileEdit) {
        match edit {
            ProfileEdit::Age(age) => self.profile.age = age,
            ProfileEdit::Gender(gender) => self.profile.gender = gender,
            ProfileEdit::Category(category) => self.profile.category_interest = category,
            ProfileEdit::Occupation(occupation) => self.profile.occupation = occupation,
            ProfileEdit::Income(income) => self.profile.income_group = income,
            ProfileEdit::Reset => {
                self.reset();
                return;
            }
        }
        tracing::trace!("Applied {:?}", edit);
        self.recompute();
    }

    pub fn reset(&mut self) {
        self.profile = CitizenProfile::default();
        self.recompute();
    }

    fn recompute(&mut self) {
        self.matched = self.engine.matching_indices(&self.profile, &self.catalog);
    }

    pub fn profile(&self) -> &CitizenProfile {
        &self.profile
    }

    pub fn catalog(&self) -> &[SchemeRecord] {
        &self.catalog
    }

    pub fn status(&self) -> &LoadStatus {
        &self.status
    }

    pub fn matches(&self) -> Vec<&SchemeRecord> {
        self.matched.iter().map(|&i| &self.catalog[i]).collect()
    }

    pub fn count(&self) -> usize {
        self.matched.len()
    }

    pub fn panel(&self) -> &FilterPanel {
        &self.panel
    }

    pub fn panel_mut(&mut self) -> &mut FilterPanel {
        &mut self.panel
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            catalog_status: self.status.clone(),
            profile: self.profile,
            count: self.count(),
            matches: self.matches().into_iter().cloned().collect(),
        }
    }
}

impl Default for FinderSession {
    fn default() -> Self {
        Self::new(EligibilityEngine::default(), FilterPanel::default())
    }
}
