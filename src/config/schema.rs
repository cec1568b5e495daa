//! Configuration schema definitions.
//!
//! All types derive Serde traits for deserialization from config files.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use url::Url;

use crate::load_balancer::{Backend, BackendError, SingleServer, WeightedRoundRobin};

/// Root configuration for the upstream selector.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct UpstreamConfig {
    /// Observability settings.
    #[serde(default)]
    pub observability: ObservabilityConfig,

    /// Backend definition.
    pub backend: BackendConfig,
}

impl UpstreamConfig {
    /// Build the configured backend.
    pub fn build_backend(&self) -> Result<Arc<dyn Backend>, BackendError> {
        self.backend.build()
    }
}

/// Backend strategy and its servers.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(tag = "strategy", rename_all = "snake_case")]
pub enum BackendConfig {
    /// Every request goes to `url`.
    Single { url: Url },

    /// Weighted round-robin over `servers`, swept in file order.
    WeightedRoundRobin { servers: Vec<ServerConfig> },
}

impl BackendConfig {
    /// Build a fresh backend instance.
    pub fn build(&self) -> Result<Arc<dyn Backend>, BackendError> {
        match self {
            BackendConfig::Single { url } => Ok(Arc::new(SingleServer::new(url.clone()))),
            BackendConfig::WeightedRoundRobin { servers } => {
                let rr = WeightedRoundRobin::from_weights(
                    servers.iter().map(|s| (s.url.clone(), s.weight)),
                )?;
                Ok(Arc::new(rr))
            }
        }
    }

    /// All server URLs named by this backend.
    pub fn urls(&self) -> Vec<&Url> {
        match self {
            BackendConfig::Single { url } => vec![url],
            BackendConfig::WeightedRoundRobin { servers } => {
                servers.iter().map(|s| &s.url).collect()
            }
        }
    }
}

/// Upstream server entry.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ServerConfig {
    /// Upstream base URL (e.g., "http://127.0.0.1:3000").
    pub url: Url,

    /// Relative share of traffic (default: 1).
    #[serde(default = "default_weight")]
    pub weight: i64,
}

fn default_weight() -> i64 {
    1
}

/// Log output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level or filter directive (e.g., "info", "proxy_backend=debug").
    pub log_level: String,

    /// Pretty output for development, JSON for production.
    pub log_format: LogFormat,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            log_format: LogFormat::Pretty,
        }
    }
}
