//! EUVD API client
//!
//! Provides read-only access to the ENISA EU Vulnerability Database.

use std::env;
use std::time::Duration;

use reqwest::{header, Client, StatusCode};

use crate::model::{SearchFilters, SearchResponse, Vulnerability};

const EUVD_API_BASE_URL: &str = "https://euvdservices.enisa.europa.eu/api";
const ENV_EUVD_BASE_URL: &str = "EUVD_BASE_URL";

/// Upper bound on a single API call. There are no retries, so this is also
/// the total time budget per operation.
const GET_TIMEOUT: Duration = Duration::from_secs(10);

/// Longest response-body slice carried inside a `Status` error.
const ERROR_BODY_LIMIT: usize = 2048;

#[derive(Debug, thiserror::Error)]
pub enum EuvdError {
    #[error("failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    #[error("request timed out after {0:?}")]
    Timeout(Duration),

    #[error("failed to execute API request: {0}")]
    Transport(#[source] reqwest::Error),

    #[error("API returned status {status}: {body}")]
    Status { status: StatusCode, body: String },

    #[error("failed to decode API response: {0}")]
    Decode(#[source] serde_json::Error),
}

/// Client for the EUVD public API
///
/// Holds no mutable state; operations take `&self` and are independent, so a
/// caller may issue them concurrently.
pub struct EuvdClient {
    client: Client,
    base_url: String,
    timeout: Duration,
}

impl EuvdClient {
    /// Create a new EUVD client
    ///
    /// The base URL is resolved in this order:
    /// 1. `EUVD_BASE_URL` environment variable if set
    /// 2. Default production API URL
    pub fn new() -> Result<Self, EuvdError> {
        let base_url =
            env::var(ENV_EUVD_BASE_URL).unwrap_or_else(|_| EUVD_API_BASE_URL.to_string());

        Self::with_config(base_url, GET_TIMEOUT)
    }

    /// Create a client against an explicit base URL with a custom per-call
    /// timeout.
    pub fn with_config(base_url: impl Into<String>, timeout: Duration) -> Result<Self, EuvdError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(EuvdError::Client)?;

        Ok(Self {
            client,
            base_url: base_url.into(),
            timeout,
        })
    }

    /// Search vulnerability records matching the given filters
    ///
    /// Only filters that were explicitly set are sent as query parameters.
    pub async fn search(&self, filters: &SearchFilters) -> Result<SearchResponse, EuvdError> {
        let url = format!("{}/vulnerabilities", self.base_url);
        let params = filters.to_query_pairs();

        tracing::debug!(url = %url, params = ?params, "Searching EUVD");

        let body = self.get(&url, &params).await?;

        serde_json::from_str(&body).map_err(EuvdError::Decode)
    }

    /// Get a single vulnerability record by its EUVD ID
    ///
    /// The endpoint returns the record directly, not wrapped in an items
    /// array.
    pub async fn lookup(&self, id: &str) -> Result<Vulnerability, EuvdError> {
        let url = format!("{}/enisaid", self.base_url);
        let params = [("id", id.to_string())];

        tracing::debug!(id = %id, url = %url, "Looking up EUVD record");

        let body = self.get(&url, &params).await?;

        serde_json::from_str(&body).map_err(EuvdError::Decode)
    }

    /// Perform one GET, enforce a success status and return the buffered
    /// response body.
    async fn get(&self, url: &str, params: &[(&str, String)]) -> Result<String, EuvdError> {
        let response = self
            .client
            .get(url)
            .query(params)
            .header(header::ACCEPT, "application/json")
            .send()
            .await
            .map_err(|e| self.transport_error(e))?;

        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::debug!(status = status.as_u16(), body = %body, "API returned non-success status");
            return Err(EuvdError::Status {
                status,
                body: snippet(&body),
            });
        }

        let body = response
            .text()
            .await
            .map_err(|e| self.transport_error(e))?;

        tracing::debug!(status = status.as_u16(), body = %body, "Raw API response");

        Ok(body)
    }

    /// Classify a reqwest error, keeping timeout expiry distinguishable from
    /// other transport failures.
    fn transport_error(&self, err: reqwest::Error) -> EuvdError {
        if err.is_timeout() {
            EuvdError::Timeout(self.timeout)
        } else {
            EuvdError::Transport(err)
        }
    }
}

/// Cap an error body for diagnostics, respecting char boundaries.
fn snippet(body: &str) -> String {
    if body.len() <= ERROR_BODY_LIMIT {
        return body.to_string();
    }

    let mut end = ERROR_BODY_LIMIT;
    while !body.is_char_boundary(end) {
        end -= 1;
    }
    body[..end].to_string()
}
