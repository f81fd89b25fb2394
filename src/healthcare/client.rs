//! Client for the healthcare backend's doctor listing.
//!
//! # Responsibilities
//! - Build `{base_url}/{category}` with the category as one encoded segment
//! - Issue a single `GET`, no retries
//! - Classify the outcome: doctors, client-side rejection, or anything else

use reqwest::StatusCode;
use std::time::Duration;
use thiserror::Error;
use url::Url;

use crate::config::BackendConfig;
use crate::healthcare::doctor::Doctor;

/// Errors from a backend doctor query.
#[derive(Debug, Error)]
pub enum BackendError {
    /// Backend answered with a 4xx status.
    #[error("backend rejected the request with status {0}")]
    Rejected(StatusCode),

    /// Backend answered with a status that is neither success nor 4xx.
    #[error("backend returned status {0}")]
    Status(StatusCode),

    /// Connecting, sending, or reading the body failed (includes timeouts).
    /// The message carries the whole cause chain, down to e.g. the refused
    /// connection.
    #[error("backend request failed: {}", error_chain(.0))]
    Transport(#[source] reqwest::Error),

    /// Body was not a JSON array of doctors.
    #[error("malformed backend payload: {0}")]
    Payload(#[source] serde_json::Error),

    /// Base URL or the URL built from it does not parse.
    #[error("invalid backend url: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// Base URL cannot take extra path segments (e.g. `mailto:` URLs).
    #[error("backend url '{0}' cannot be used as a base")]
    NotABase(String),
}

/// `err` followed by each of its sources, separated by `": "`.
///
/// Sources whose text is already part of the previous message are skipped.
fn error_chain(err: &dyn std::error::Error) -> String {
    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        let text = cause.to_string();
        if !message.contains(&text) {
            message.push_str(": ");
            message.push_str(&text);
        }
        source = cause.source();
    }
    message
}

impl BackendError {
    /// Whether the backend itself refused the request as a client error.
    pub fn is_client_error(&self) -> bool {
        matches!(self, BackendError::Rejected(_))
    }
}

/// Result type for backend queries.
pub type BackendResult<T> = Result<T, BackendError>;

/// Thin wrapper over a shared `reqwest::Client` bound to one base URL.
#[derive(Debug, Clone)]
pub struct DoctorClient {
    http: reqwest::Client,
    base_url: Url,
}

impl DoctorClient {
    /// Create a client from backend configuration.
    ///
    /// Timeouts are only applied when configured; otherwise reqwest's
    /// defaults stand.
    pub fn new(config: &BackendConfig) -> BackendResult<Self> {
        let base_url = Url::parse(&config.base_url)?;
        if base_url.cannot_be_a_base() {
            return Err(BackendError::NotABase(config.base_url.clone()));
        }

        let mut builder = reqwest::Client::builder();
        if let Some(secs) = config.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        if let Some(secs) = config.connect_timeout_secs {
            builder = builder.connect_timeout(Duration::from_secs(secs));
        }
        let http = builder.build().map_err(BackendError::Transport)?;

        Ok(Self { http, base_url })
    }

    /// URL of the listing for one category.
    pub fn category_url(&self, category: &str) -> BackendResult<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| BackendError::NotABase(self.base_url.to_string()))?
            .pop_if_empty()
            .push(category);
        Ok(url)
    }

    /// Fetch all doctors in a category.
    pub async fn doctors_by_category(&self, category: &str) -> BackendResult<Vec<Doctor>> {
        let url = self.category_url(category)?;

        tracing::debug!(url = %url, "Calling healthcare backend");

        let response = self
            .http
            .get(url)
            .send()
            .await
            .map_err(BackendError::Transport)?;

        let status = response.status();
        if status.is_client_error() {
            return Err(BackendError::Rejected(status));
        }
        if !status.is_success() {
            return Err(BackendError::Status(status));
        }

        let body = response.bytes().await.map_err(BackendError::Transport)?;
        serde_json::from_slice(&body).map_err(BackendError::Payload)
    }
}
