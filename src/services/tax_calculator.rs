use crate::models::{AnalyzeDiaryRequest, AnalyzeDiaryResponse};
use reqwest::Client;
use std::time::Duration;
use thiserror::Error;

/// Errors that can occur when calling the tax calculator
#[derive(Debug, Error)]
pub enum TaxServiceError {
    #[error("HTTP request failed: {0}")]
    RequestError(#[from] reqwest::Error),

    #[error("API returned error: {0}")]
    ApiError(String),
}

/// Client for the external tax calculator
///
/// Only builds and sends the diary analysis request; the regime figures in
/// the response are passed through as received.
pub struct TaxCalculatorClient {
    endpoint: String,
    client: Client,
}

impl TaxCalculatorClient {
    pub fn new(endpoint: String, timeout_secs: u64) -> Result<Self, TaxServiceError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()?;

        Ok(Self { endpoint, client })
    }

    pub async fn analyze(
        &self,
        request: &AnalyzeDiaryRequest,
    ) -> Result<AnalyzeDiaryResponse, TaxServiceError> {
        let url = format!("{}/analyze-diary", self.endpoint.trim_end_matches('/'));

        tracing::debug!("Requesting regime comparison from: {}", url);

        let response = self.client.post(&url).json(request).send().await?;

        if !response.status().is_success() {
            return Err(TaxServiceError::ApiError(format!(
                "Failed to analyze diary: {}",
                response.status()
            )));
        }

        Ok(response.json().await?)
    }
}
