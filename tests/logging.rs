//! Global subscriber installation.
//!
//! Kept in its own test binary: the subscriber is process-wide, so the
//! steps below must run in order within one test.

use proxy_backend::config::ObservabilityConfig;
use proxy_backend::observability::{init_logging, LoggingError};

#[test]
fn test_init_logging_once() {
    std::env::remove_var("RUST_LOG");

    let config = ObservabilityConfig {
        log_level: "proxy_backend=debug".to_string(),
        ..Default::default()
    };
    init_logging(&config).unwrap();

    // A second install is reported, not a panic.
    let err = init_logging(&config).unwrap_err();
    assert!(matches!(err, LoggingError::Init(_)), "unexpected error {err}");

    // The filter is parsed before installation is attempted.
    let bad = ObservabilityConfig {
        log_level: "proxy_backend=loud".to_string(),
        ..Default::default()
    };
    let err = init_logging(&bad).unwrap_err();
    assert!(matches!(err, LoggingError::Filter(_)), "unexpected error {err}");
}
