//! Upstream server selection for an HTTP reverse proxy.
//!
//! A [`Backend`] maps each incoming request to the URL of the upstream server
//! that should receive it. [`SingleServer`] always answers with one URL;
//! [`WeightedRoundRobin`] spreads requests over a fixed server set in
//! proportion to their weights.

pub mod config;
pub mod load_balancer;
pub mod observability;

pub use config::UpstreamConfig;
pub use load_balancer::{Backend, BackendError, SingleServer, WeightedRoundRobin};
