//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Reject duplicate servers and non-HTTP upstreams
//! - Check the log filter directive parses
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: UpstreamConfig → Result<(), Vec<ValidationError>>
//! - Weight rules are left to the backend constructor

use std::collections::HashSet;

use thiserror::Error;
use tracing_subscriber::EnvFilter;
use url::Url;

use crate::config::schema::{BackendConfig, UpstreamConfig};

/// A single semantic problem in a configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Server {0} is listed more than once")]
    DuplicateServer(Url),

    #[error("Server {0} must use http or https")]
    UnsupportedScheme(Url),

    #[error("Server {0} has no host")]
    MissingHost(Url),

    #[error("Invalid log level '{0}'")]
    InvalidLogLevel(String),
}

/// Validate a parsed configuration.
pub fn validate_config(config: &UpstreamConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    for url in config.backend.urls() {
        if !matches!(url.scheme(), "http" | "https") {
            errors.push(ValidationError::UnsupportedScheme(url.clone()));
        }
        if !url.has_host() {
            errors.push(ValidationError::MissingHost(url.clone()));
        }
    }

    if let BackendConfig::WeightedRoundRobin { servers } = &config.backend {
        let mut seen = HashSet::new();
        for server in servers {
            if !seen.insert(&server.url) {
                errors.push(ValidationError::DuplicateServer(server.url.clone()));
            }
        }
    }

    if EnvFilter::try_new(&config.observability.log_level).is_err() {
        errors.push(ValidationError::InvalidLogLevel(
            config.observability.log_level.clone(),
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
