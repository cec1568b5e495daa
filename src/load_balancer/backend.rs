//! Backend abstraction.
//!
//! # Responsibilities
//! - Map an incoming request to the upstream server URL that should receive it
//! - Report construction failures with stable, matchable messages
//!
//! # Design Decisions
//! - Backends are immutable once built; a new server set means a new backend
//! - Selection never fails for a constructed backend
//! - The request is only borrowed, never mutated

use axum::body::Body;
use axum::http::Request;
use thiserror::Error;
use url::Url;

/// Maps requests to upstream servers.
pub trait Backend: Send + Sync + std::fmt::Debug {
    /// Return the URL of the upstream server that should receive `req`.
    ///
    /// Must be safe to call concurrently. The URL is always one of the
    /// servers the backend was constructed with.
    fn get_server(&self, req: &Request<Body>) -> &Url;
}

/// Errors raised while constructing a backend.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BackendError {
    /// No servers were supplied.
    #[error("Must specify at least one server")]
    EmptyServerSet,

    /// A server was given a weight below zero.
    #[error("Weight of server {url} is less than 0")]
    NegativeWeight { url: Url, weight: i64 },

    /// Every server has weight 0, so none could ever be selected.
    #[error("All servers have 0 weight")]
    AllZeroWeights,
}
