// Model exports
pub mod diary;
pub mod domain;
pub mod options;
pub mod requests;
pub mod responses;

pub use diary::{AnalyzeDiaryRequest, AnalyzeDiaryResponse, DiaryForm, InvestmentEntry, PropertyEntry, RegimeComparison, RegimeSummary};
pub use domain::{Category, CitizenProfile, Gender, IncomeBracket, Label, MalformedRecord, Occupation, ProfileError, Restriction, SchemeRecord, SchemeRow, TagMatchPolicy, TagSet, DEFAULT_AGE};
pub use options::FilterOptions;
pub use requests::EvaluateRequest;
pub use responses::{CatalogResponse, ErrorResponse, HealthResponse};
