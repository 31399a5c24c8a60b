//! Nursys HTTP client and the shared invocation pipeline.
//!
//! This module provides:
//! - `Credentials`: the username/password pair sent with every call
//! - `Client` / `ClientBuilder`: immutable configuration plus an injectable transport
//! - OpenTelemetry-style request spans through `reqwest-tracing`
//! - `invoke`: the one call path every endpoint wrapper goes through

use std::{fmt, sync::Arc};

use http::Extensions;
use reqwest::{
    Request, Response, StatusCode,
    header::{CONTENT_TYPE, HeaderName},
};
use reqwest_middleware::{
    ClientBuilder as MiddlewareBuilder, ClientWithMiddleware, Middleware, RequestBuilder,
    Result as MiddlewareResult,
};
use reqwest_tracing::{
    ReqwestOtelSpanBackend, TracingMiddleware, default_on_request_end, reqwest_otel_span,
};
use serde::{Serialize, de::DeserializeOwned};
use tracing::{Span, debug};

use crate::{
    error::NursysError,
    http::{context::Context, endpoint::Endpoint},
};

/// The non-standard header carrying the API username.
pub const HEADER_USERNAME: HeaderName = HeaderName::from_static("username");
/// The non-standard header carrying the API password.
pub const HEADER_PASSWORD: HeaderName = HeaderName::from_static("password");

// Request spans for reqwest-tracing. Headers and bodies carry credentials,
// so only the default method/url/status fields are recorded.
#[allow(dead_code)]
struct NursysSpan;

impl ReqwestOtelSpanBackend for NursysSpan {
    fn on_request_start(req: &Request, _extension: &mut Extensions) -> Span {
        reqwest_otel_span!(name = "nursys-request", req)
    }

    fn on_request_end(
        span: &Span,
        outcome: &MiddlewareResult<Response>,
        _extension: &mut Extensions,
    ) {
        default_on_request_end(span, outcome);
    }
}

/// Institution credentials, sent in plaintext headers on every call.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    username: String,
    password: String,
}

impl Credentials {
    #[must_use]
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }

    #[must_use]
    pub fn username(&self) -> &str {
        &self.username
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Builds a [`Client`]; the transport can be swapped or layered for tests.
pub struct ClientBuilder {
    base_url: String,
    credentials: Credentials,
    http_client: Option<reqwest::Client>,
    middleware: Vec<Arc<dyn Middleware>>,
}

impl ClientBuilder {
    /// Use `client` as the underlying transport instead of a default one.
    #[must_use]
    pub fn http_client(mut self, client: reqwest::Client) -> Self {
        self.http_client = Some(client);
        self
    }

    /// Layer `middleware` over the transport, after the tracing middleware.
    #[must_use]
    pub fn middleware<M: Middleware>(mut self, middleware: M) -> Self {
        self.middleware.push(Arc::new(middleware));
        self
    }

    /// # Errors
    /// Returns `ClientBuild` when the default transport cannot be created.
    pub fn build(self) -> Result<Client, NursysError> {
        let http_client = match self.http_client {
            Some(client) => client,
            None => reqwest::Client::builder()
                .build()
                .map_err(NursysError::ClientBuild)?,
        };

        let http = self
            .middleware
            .into_iter()
            .fold(
                MiddlewareBuilder::new(http_client).with(TracingMiddleware::<NursysSpan>::new()),
                MiddlewareBuilder::with_arc,
            )
            .build();

        Ok(Client {
            http,
            base_url: self.base_url,
            credentials: self.credentials,
        })
    }
}

/// Client for the Nursys e-Notify API.
///
/// Configuration is read-only after construction, so one instance can be
/// cloned and shared across concurrent callers.
#[derive(Clone)]
pub struct Client {
    http: ClientWithMiddleware,
    base_url: String,
    credentials: Credentials,
}

impl fmt::Debug for Client {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Client")
            .field("base_url", &self.base_url)
            .field("credentials", &self.credentials)
            .finish_non_exhaustive()
    }
}

impl Client {
    /// Creates a client against `base_url`, e.g.
    /// `Client::new("https://api.example.com/nursys", "username", "password")`.
    ///
    /// # Errors
    /// Returns `ClientBuild` when the default transport cannot be created.
    pub fn new(
        base_url: impl Into<String>,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Result<Self, NursysError> {
        Self::builder(base_url, Credentials::new(username, password)).build()
    }

    #[must_use]
    pub fn builder(base_url: impl Into<String>, credentials: Credentials) -> ClientBuilder {
        let base_url: String = base_url.into();
        ClientBuilder {
            base_url: base_url.trim_end_matches('/').to_string(),
            credentials,
            http_client: None,
            middleware: Vec::new(),
        }
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Sends `body` to `endpoint` and decodes a 200/202 reply into `Res`.
    ///
    /// # Errors
    /// * `Encoding` - `body` does not serialize to JSON
    /// * `RequestConstruction` - base URL and path do not form a valid URL
    /// * `Context` - `ctx` ended before or during the network wait
    /// * `Transport` - connection, TLS or body read failure
    /// * `Remote` - any status other than 200/202, with the raw reply body
    /// * `Decoding` - the reply is not valid JSON for `Res`
    pub async fn invoke<Req, Res>(
        &self,
        ctx: &Context,
        endpoint: &Endpoint,
        body: Option<&Req>,
    ) -> Result<Res, NursysError>
    where
        Req: Serialize + ?Sized,
        Res: DeserializeOwned,
    {
        let reply = self.exchange(ctx, endpoint, body, true).await?;
        serde_json::from_slice(&reply).map_err(NursysError::Decoding)
    }

    /// Like [`Client::invoke`], but the success body is discarded unread.
    ///
    /// # Errors
    /// Same as [`Client::invoke`], minus `Decoding`.
    pub async fn invoke_discarding<Req>(
        &self,
        ctx: &Context,
        endpoint: &Endpoint,
        body: Option<&Req>,
    ) -> Result<(), NursysError>
    where
        Req: Serialize + ?Sized,
    {
        self.exchange(ctx, endpoint, body, false).await.map(drop)
    }

    async fn exchange<Req>(
        &self,
        ctx: &Context,
        endpoint: &Endpoint,
        body: Option<&Req>,
        read_body: bool,
    ) -> Result<Vec<u8>, NursysError>
    where
        Req: Serialize + ?Sized,
    {
        let payload = body
            .map(serde_json::to_vec)
            .transpose()
            .map_err(NursysError::Encoding)?;
        let url = endpoint.url(&self.base_url)?;

        if let Some(cause) = ctx.err() {
            return Err(cause.into());
        }

        let mut request = self
            .http
            .request(endpoint.method().clone(), url)
            .header(CONTENT_TYPE, "application/json")
            .header(HEADER_USERNAME, self.credentials.username.as_str())
            .header(HEADER_PASSWORD, self.credentials.password.as_str());
        if let Some(payload) = payload {
            request = request.body(payload);
        }

        debug!(method = %endpoint.method(), path = endpoint.path(), "dispatching nursys request");

        tokio::select! {
            cause = ctx.done() => Err(cause.into()),
            outcome = complete(request, read_body) => outcome,
        }
    }
}

async fn complete(request: RequestBuilder, read_body: bool) -> Result<Vec<u8>, NursysError> {
    let response = request.send().await?;
    let status = response.status();
    debug!(status = status.as_u16(), "nursys responded");

    if status != StatusCode::OK && status != StatusCode::ACCEPTED {
        // Best effort: an unreadable body must not mask the status.
        let body = response.text().await.unwrap_or_default();
        return Err(NursysError::Remote { status, body });
    }

    if !read_body {
        return Ok(Vec::new());
    }

    let reply = response
        .bytes()
        .await
        .map_err(|e| NursysError::Transport(e.into()))?;
    Ok(reply.to_vec())
}
