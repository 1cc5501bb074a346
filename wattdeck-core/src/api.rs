//! Blocking HTTP client for the plans API.
//!
//! The `PlanSource` trait abstracts the remote API so the TUI worker
//! can be exercised with a stub in tests. The real client is a thin
//! reqwest wrapper; requests are expected to run on a worker thread,
//! never on the UI thread.

use std::time::Duration;

use serde::de::DeserializeOwned;
use thiserror::Error;

use crate::model::{Plan, Provider};

/// Default endpoint for local development, overridable via
/// `--api-base` / `WATTDECK_API_BASE`.
pub const DEFAULT_API_BASE: &str = "http://localhost:8000";

/// Structured error types for API operations.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("{url} returned HTTP {status}")]
    Status {
        url: String,
        status: reqwest::StatusCode,
    },

    #[error("could not decode response from {url}: {source}")]
    Decode {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("api error: {0}")]
    Other(String),
}

/// Source of plan and provider lists.
///
/// `Sync` because the worker fans the two fetches out to scoped threads
/// sharing one source.
pub trait PlanSource: Send + Sync {
    fn plans(&self) -> Result<Vec<Plan>, ApiError>;
    fn providers(&self) -> Result<Vec<Provider>, ApiError>;
}

/// Blocking client for `GET {base}/plans` and `GET {base}/providers`.
pub struct ApiClient {
    client: reqwest::blocking::Client,
    base: String,
}

impl ApiClient {
    pub fn new(base: impl Into<String>) -> Self {
        let client = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .expect("failed to build HTTP client");
        let base = base.into().trim_end_matches('/').to_string();
        Self { client, base }
    }

    pub fn base(&self) -> &str {
        &self.base
    }

    fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let url = format!("{}{path}", self.base);
        let resp = self
            .client
            .get(&url)
            .send()
            .map_err(|source| ApiError::Transport {
                url: url.clone(),
                source,
            })?;
        let status = resp.status();
        if !status.is_success() {
            return Err(ApiError::Status { url, status });
        }
        resp.json().map_err(|source| ApiError::Decode { url, source })
    }
}

impl PlanSource for ApiClient {
    fn plans(&self) -> Result<Vec<Plan>, ApiError> {
        self.get_json("/plans")
    }

    fn providers(&self) -> Result<Vec<Provider>, ApiError> {
        self.get_json("/providers")
    }
}
