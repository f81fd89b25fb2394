//! Configuration loading from disk.

use std::fs;
use std::path::Path;
use thiserror::Error;

use crate::config::schema::AdapterConfig;
use crate::config::validation::{validate_config, ValidationError};

/// Error type for configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation failed: {}", join_errors(.0))]
    Validation(Vec<ValidationError>),
}

fn join_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Parse a configuration from TOML text without validating it.
pub fn parse_config(content: &str) -> Result<AdapterConfig, ConfigError> {
    Ok(toml::from_str(content)?)
}

/// Read a TOML file, or fall back to defaults when no path is given.
///
/// Validation is left to the caller so that command-line overrides can be
/// applied first; see [`finalize`].
pub fn read_config(path: Option<&Path>) -> Result<AdapterConfig, ConfigError> {
    match path {
        Some(path) => {
            let content = fs::read_to_string(path)?;
            parse_config(&content)
        }
        None => Ok(AdapterConfig::default()),
    }
}

/// Validate a configuration and hand it back if it is usable.
pub fn finalize(config: AdapterConfig) -> Result<AdapterConfig, ConfigError> {
    validate_config(&config).map_err(ConfigError::Validation)?;
    Ok(config)
}
