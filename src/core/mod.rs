// Core algorithm exports
pub mod filters;
pub mod matcher;
pub mod panel;
pub mod session;

pub use filters::{is_eligible, matches_age, matches_category, matches_gender, matches_income, matches_occupation};
pub use matcher::{EligibilityEngine, MatchResult};
pub use panel::{FilterPanel, PanelState, DEFAULT_SCROLL_THRESHOLD};
pub use session::{FinderSession, LoadStatus, ProfileEdit, SessionSnapshot};
