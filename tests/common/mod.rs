#![allow(dead_code, clippy::unwrap_used)]

use std::sync::{
    Arc,
    atomic::{AtomicUsize, Ordering},
};

use http::Extensions;
use nursys::{Client, ClientBuilder, Credentials};
use reqwest::{Request, Response};
use reqwest_middleware::{Middleware, Next};

pub const USERNAME: &str = "acme";
pub const PASSWORD: &str = "1234!";

/// Builder against `base_url` with the test credentials; proxies are
/// bypassed so calls reach the local mock server.
pub fn builder(base_url: &str) -> ClientBuilder {
    Client::builder(base_url, Credentials::new(USERNAME, PASSWORD))
        .http_client(reqwest::Client::builder().no_proxy().build().unwrap())
}

pub fn client(base_url: &str) -> Client {
    builder(base_url).build().unwrap()
}

/// Transport that fails every request without touching the network.
pub struct FailingTransport;

#[async_trait::async_trait]
impl Middleware for FailingTransport {
    async fn handle(
        &self,
        _req: Request,
        _extensions: &mut Extensions,
        _next: Next<'_>,
    ) -> reqwest_middleware::Result<Response> {
        Err(reqwest_middleware::Error::Middleware(anyhow::anyhow!(
            "oh no an error"
        )))
    }
}

/// Transport that answers every request with a fixed reply.
pub struct CannedReply {
    pub status: u16,
    pub body: &'static str,
}

#[async_trait::async_trait]
impl Middleware for CannedReply {
    async fn handle(
        &self,
        _req: Request,
        _extensions: &mut Extensions,
        _next: Next<'_>,
    ) -> reqwest_middleware::Result<Response> {
        let reply = http::Response::builder()
            .status(self.status)
            .body(self.body)
            .unwrap();
        Ok(Response::from(reply))
    }
}

/// Counts requests that reach the transport, then passes them on.
#[derive(Clone, Default)]
pub struct CountingTransport(Arc<AtomicUsize>);

impl CountingTransport {
    pub fn count(&self) -> usize {
        self.0.load(Ordering::SeqCst)
    }
}

#[async_trait::async_trait]
impl Middleware for CountingTransport {
    async fn handle(
        &self,
        req: Request,
        extensions: &mut Extensions,
        next: Next<'_>,
    ) -> reqwest_middleware::Result<Response> {
        self.0.fetch_add(1, Ordering::SeqCst);
        next.run(req, extensions).await
    }
}
