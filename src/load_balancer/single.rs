//! Single-server backend.

use axum::body::Body;
use axum::http::Request;
use url::Url;

use crate::load_balancer::backend::Backend;

/// The simplest backend: every request goes to the same server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SingleServer {
    server: Url,
}

impl SingleServer {
    pub fn new(server: Url) -> Self {
        Self { server }
    }

    /// The server all requests are sent to.
    pub fn url(&self) -> &Url {
        &self.server
    }
}

impl From<Url> for SingleServer {
    fn from(server: Url) -> Self {
        Self::new(server)
    }
}

impl Backend for SingleServer {
    fn get_server(&self, _req: &Request<Body>) -> &Url {
        &self.server
    }
}
