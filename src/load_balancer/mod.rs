//! Load balancing subsystem.
//!
//! # Data Flow
//! ```text
//! Server set (URL → weight)
//!     → weighted_round_robin.rs (validate, precompute max weight + gcd)
//!     → Backend (immutable, shared via Arc)
//!
//! Per request:
//!     proxy handler → Backend::get_server(&request) → upstream URL
//! ```
//!
//! # Design Decisions
//! - Backends are replaced, never reconfigured in place
//! - Only the round-robin position is mutable, behind a mutex
//! - Construction errors carry the messages callers match on

pub mod backend;
pub mod single;
pub mod weighted_round_robin;

pub use backend::{Backend, BackendError};
pub use single::SingleServer;
pub use weighted_round_robin::WeightedRoundRobin;
