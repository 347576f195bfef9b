use crate::models::{MalformedRecord, SchemeRecord, SchemeRow};
use reqwest::{Client, StatusCode};
use serde_json::Value;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;
use thiserror::Error;

/// Errors that leave the catalog unavailable for an activation
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("HTTP request failed: {0}")]
    RequestError(#[from] reqwest::Error),

    #[error("API returned error: {0}")]
    ApiError(String),

    #[error("Unauthorized: invalid or missing API key")]
    Unauthorized,

    #[error("Invalid response format: {0}")]
    InvalidResponse(String),
}

/// Anything that can hand over the full scheme catalog in one read
#[allow(async_fn_in_trait)]
pub trait CatalogSource {
    async fn load_catalog(&self) -> Result<Vec<SchemeRecord>, CatalogError>;
}

/// Validate raw rows, dropping the ones that cannot become a scheme
///
/// Order of the surviving rows is kept.
pub fn decode_rows(rows: Vec<Value>) -> Vec<SchemeRecord> {
    let total = rows.len();
    let records: Vec<SchemeRecord> = rows
        .into_iter()
        .enumerate()
        .filter_map(|(index, row)| {
            let decoded = serde_json::from_value::<SchemeRow>(row)
                .map_err(|e| MalformedRecord::Shape(e.to_string()))
                .and_then(SchemeRecord::try_from);

            match decoded {
                Ok(record) => Some(record),
                Err(reason) => {
                    tracing::warn!("Quarantined catalog row {}: {}", index, reason);
                    None
                }
            }
        })
        .collect();

    if records.len() < total {
        tracing::warn!("{} of {} catalog rows quarantined", total - records.len(), total);
    }

    records
}

/// Client for the scheme table behind a PostgREST-style endpoint
///
/// Reads are `GET {base_url}/rest/v1/{table}?select=*`, authenticated with
/// the project's anon key.
pub struct CatalogClient {
    base_url: String,
    api_key: String,
    table: String,
    client: Client,
}

impl CatalogClient {
    pub fn new(
        base_url: String,
        api_key: String,
        table: String,
        timeout_secs: u64,
    ) -> Result<Self, CatalogError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()?;

        Ok(Self {
            base_url,
            api_key,
            table,
            client,
        })
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/rest/v1/{}",
            self.base_url.trim_end_matches('/'),
            self.table
        )
    }
}

impl CatalogSource for CatalogClient {
    async fn load_catalog(&self) -> Result<Vec<SchemeRecord>, CatalogError> {
        let url = self.endpoint();

        tracing::debug!("Fetching scheme catalog from: {}", url);

        let response = self
            .client
            .get(&url)
            .query(&[("select", "*")])
            .header("apikey", &self.api_key)
            .bearer_auth(&self.api_key)
            .header("Accept", "application/json")
            .send()
            .await?;

        let status = response.status();
        if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
            return Err(CatalogError::Unauthorized);
        }
        if !status.is_success() {
            return Err(CatalogError::ApiError(format!(
                "Failed to fetch schemes: {}",
                status
            )));
        }

        let json: Value = response.json().await?;

        let rows = match json {
            Value::Array(rows) => rows,
            _ => {
                return Err(CatalogError::InvalidResponse(
                    "Expected an array of scheme rows".into(),
                ))
            }
        };

        let records = decode_rows(rows);

        tracing::debug!("Fetched {} schemes from {}", records.len(), self.table);

        Ok(records)
    }
}

/// Catalog held in memory, for tests and local runs without a store
#[derive(Debug, Default)]
pub struct InMemoryCatalog {
    records: Option<Vec<SchemeRecord>>,
    failure: String,
    loads: AtomicUsize,
}

impl InMemoryCatalog {
    pub fn new(records: Vec<SchemeRecord>) -> Self {
        Self {
            records: Some(records),
            failure: String::new(),
            loads: AtomicUsize::new(0),
        }
    }

    /// A source whose every load fails with the given message
    pub fn unavailable(message: &str) -> Self {
        Self {
            records: None,
            failure: message.to_string(),
            loads: AtomicUsize::new(0),
        }
    }

    /// Number of loads served so far
    pub fn load_count(&self) -> usize {
        self.loads.load(Ordering::SeqCst)
    }
}

impl CatalogSource for InMemoryCatalog {
    async fn load_catalog(&self) -> Result<Vec<SchemeRecord>, CatalogError> {
        self.loads.fetch_add(1, Ordering::SeqCst);
        self.records
            .clone()
            .ok_or_else(|| CatalogError::ApiError(self.failure.clone()))
    }
}
