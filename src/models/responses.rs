use serde::{Deserialize, Serialize};
use crate::core::session::LoadStatus;
use crate::models::domain::SchemeRecord;

/// Response for the full catalog listing
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogResponse {
    pub schemes: Vec<SchemeRecord>,
    pub count: usize,
    pub catalog_status: LoadStatus,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub status_code: u16,
}
