//! Configuration loading from disk.

use std::fs;
use std::path::Path;
use std::sync::Arc;

use thiserror::Error;

use crate::config::schema::UpstreamConfig;
use crate::config::validation::{validate_config, ValidationError};
use crate::load_balancer::{Backend, BackendError};

/// Error type for configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation failed: {}", join(.0))]
    Validation(Vec<ValidationError>),

    #[error("Backend error: {0}")]
    Backend(#[from] BackendError),
}

fn join(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Parse and validate configuration from a TOML string.
pub fn parse_config(content: &str) -> Result<UpstreamConfig, ConfigError> {
    let config: UpstreamConfig = toml::from_str(content)?;
    validate_config(&config).map_err(ConfigError::Validation)?;
    Ok(config)
}

/// Load and validate configuration from a TOML file.
pub fn load_config(path: &Path) -> Result<UpstreamConfig, ConfigError> {
    let content = fs::read_to_string(path)?;
    let config = parse_config(&content)?;

    tracing::debug!(path = ?path, servers = config.backend.urls().len(), "Configuration loaded");
    Ok(config)
}

/// Load a configuration file and build its backend.
pub fn load_backend(path: &Path) -> Result<Arc<dyn Backend>, ConfigError> {
    let config = load_config(path)?;
    Ok(config.build_backend()?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::schema::{BackendConfig, LogFormat};

    #[test]
    fn test_parse_weighted() {
        let config = parse_config(
            r#"
            [observability]
            log_level = "debug"
            log_format = "json"

            [backend]
            strategy = "weighted_round_robin"

            [[backend.servers]]
            url = "http://127.0.0.1:8080"
            weight = 3

            [[backend.servers]]
            url = "http://127.0.0.1:9090"
            "#,
        )
        .unwrap();

        assert_eq!(config.observability.log_level, "debug");
        assert_eq!(config.observability.log_format, LogFormat::Json);
        match &config.backend {
            BackendConfig::WeightedRoundRobin { servers } => {
                assert_eq!(servers.len(), 2);
                assert_eq!(servers[0].weight, 3);
                assert_eq!(servers[1].weight, 1); // default
            }
            other => panic!("unexpected backend {:?}", other),
        }
    }

    #[test]
    fn test_parse_single_with_defaults() {
        let config = parse_config(
            r#"
            [backend]
            strategy = "single"
            url = "http://127.0.0.1:8080"
            "#,
        )
        .unwrap();

        assert_eq!(config.observability.log_level, "info");
        assert_eq!(config.backend.urls()[0].as_str(), "http://127.0.0.1:8080/");
    }

    #[test]
    fn test_parse_errors() {
        let err = parse_config("[backend]\nstrategy = \"random\"\n").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));

        let err = parse_config(
            r#"
            [backend]
            strategy = "single"
            url = "not a url"
            "#,
        )
        .unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_validation_error_message() {
        let err = parse_config(
            r#"
            [backend]
            strategy = "weighted_round_robin"
            servers = [
                { url = "http://a.internal" },
                { url = "http://a.internal" },
            ]
            "#,
        )
        .unwrap_err();

        assert_eq!(
            err.to_string(),
            "Validation failed: Server http://a.internal/ is listed more than once"
        );
    }

    #[test]
    fn test_missing_file() {
        let err = load_config(Path::new("/nonexistent/upstream.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }
}
