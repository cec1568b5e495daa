//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML)
//!     → loader.rs (parse & deserialize)
//!     → validation.rs (semantic checks)
//!     → UpstreamConfig (validated, immutable)
//!     → build_backend() → Arc<dyn Backend>
//!
//! On server set change:
//!     load a new config → build a new backend
//!     → caller swaps its Arc<dyn Backend>
//! ```
//!
//! # Design Decisions
//! - Config is immutable once loaded; changes require a new backend
//! - Observability has defaults; the backend section is required
//! - Validation separates syntactic (serde) from semantic checks

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_backend, load_config, parse_config, ConfigError};
pub use schema::{BackendConfig, LogFormat, ObservabilityConfig, ServerConfig, UpstreamConfig};
pub use validation::{validate_config, ValidationError};
