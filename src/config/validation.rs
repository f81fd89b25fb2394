//! Configuration validation.
//!
//! Serde handles syntax; this module checks that values are usable: the bind
//! address parses, the backend base URL is an absolute http(s) URL that can
//! take extra path segments, timeouts are positive and the log level is known.
//! Every problem is reported, not just the first.

use std::net::SocketAddr;
use thiserror::Error;
use url::Url;

use crate::config::schema::AdapterConfig;

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// A single semantic problem in a configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("listener.bind_address '{0}' is not a socket address")]
    BindAddress(String),

    #[error("backend.base_url '{url}' is invalid: {reason}")]
    BaseUrl { url: String, reason: String },

    #[error("{field} must be greater than zero")]
    ZeroTimeout { field: &'static str },

    #[error("observability.log_level '{0}' is not one of trace, debug, info, warn, error")]
    LogLevel(String),
}

/// Validate a configuration, collecting every error found.
pub fn validate_config(config: &AdapterConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.listener.bind_address.parse::<SocketAddr>().is_err() {
        errors.push(ValidationError::BindAddress(
            config.listener.bind_address.clone(),
        ));
    }

    if let Err(reason) = check_base_url(&config.backend.base_url) {
        errors.push(ValidationError::BaseUrl {
            url: config.backend.base_url.clone(),
            reason,
        });
    }

    if config.backend.timeout_secs == Some(0) {
        errors.push(ValidationError::ZeroTimeout {
            field: "backend.timeout_secs",
        });
    }
    if config.backend.connect_timeout_secs == Some(0) {
        errors.push(ValidationError::ZeroTimeout {
            field: "backend.connect_timeout_secs",
        });
    }

    let level = config.observability.log_level.to_ascii_lowercase();
    if !LOG_LEVELS.contains(&level.as_str()) {
        errors.push(ValidationError::LogLevel(
            config.observability.log_level.clone(),
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn check_base_url(raw: &str) -> Result<(), String> {
    let url = Url::parse(raw).map_err(|e| e.to_string())?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(format!("unsupported scheme '{}'", url.scheme()));
    }
    if url.cannot_be_a_base() {
        return Err("cannot be used as a base".to_string());
    }
    Ok(())
}
