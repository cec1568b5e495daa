//! Shared utilities for integration tests.

use std::path::PathBuf;
use std::sync::Once;

use axum::body::Body;
use axum::http::Request;
use proxy_backend::config::ObservabilityConfig;
use proxy_backend::observability::init_logging;
use url::Url;

static LOGGING: Once = Once::new();

/// Install the test subscriber once per test binary.
pub fn init_test_logging() {
    LOGGING.call_once(|| {
        let config = ObservabilityConfig {
            log_level: "proxy_backend=debug".to_string(),
            ..Default::default()
        };
        // Another harness may already own the global subscriber.
        let _ = init_logging(&config);
    });
}

/// A request as the proxy would receive it.
pub fn request(path: &str) -> Request<Body> {
    Request::builder()
        .uri(path)
        .header("Host", "proxy.example.com")
        .body(Body::default())
        .unwrap()
}

#[allow(dead_code)]
pub fn url(s: &str) -> Url {
    Url::parse(s).unwrap()
}

/// Write `content` to a unique file in the temp dir.
#[allow(dead_code)]
pub fn write_config(name: &str, content: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!(
        "proxy-backend-{}-{}.toml",
        std::process::id(),
        name
    ));
    std::fs::write(&path, content).unwrap();
    path
}
