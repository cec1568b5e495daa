//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! Backend construction:
//!     → tracing events (debug on success, warn on rejected input)
//!
//! Consumers:
//!     → logging.rs subscriber (stdout, pretty or JSON)
//! ```
//!
//! # Design Decisions
//! - Structured logging (JSON) for machine parsing
//! - Selection stays silent: no events inside the lock

pub mod logging;

pub use logging::{init_logging, LoggingError};
