//! Transport abstraction
//!
//! The reaper builds requests but never touches a socket. It hands a
//! [`Request`] to a [`Transport`] and gets a [`Response`] (or an error) back.
//! [`ReqwestTransport`] is the production implementation; tests inject their
//! own.

use crate::error::{Error, Result};
use async_trait::async_trait;
use bytes::Bytes;
use reqwest::header::HeaderMap;
use reqwest::{Client, Method};
use std::time::Duration;
use tracing::debug;
use url::Url;

/// An outgoing request, fully built
#[derive(Debug, Clone)]
pub struct Request {
    /// HTTP method
    pub method: Method,
    /// Absolute URL, query string included
    pub url: Url,
    /// Value for the `Host` header
    pub host: String,
    /// Request headers
    pub headers: HeaderMap,
    /// Encoded body, if any
    pub body: Option<String>,
}

impl Request {
    /// Create a request with no headers and no body
    pub fn new(method: Method, url: Url, host: impl Into<String>) -> Self {
        Self {
            method,
            url,
            host: host.into(),
            headers: HeaderMap::new(),
            body: None,
        }
    }

    /// Set the headers
    #[must_use]
    pub fn with_headers(mut self, headers: HeaderMap) -> Self {
        self.headers = headers;
        self
    }

    /// Set the body
    #[must_use]
    pub fn with_body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self
    }
}

/// A response as returned by the transport
#[derive(Debug, Clone, Default)]
pub struct Response {
    /// HTTP status code
    pub status: u16,
    /// Response headers
    pub headers: HeaderMap,
    /// Raw body
    pub body: Bytes,
}

impl Response {
    /// Create a response with the given status and body
    pub fn new(status: u16, body: impl Into<Bytes>) -> Self {
        Self {
            status,
            headers: HeaderMap::new(),
            body: body.into(),
        }
    }
}

/// Executes requests on behalf of the reaper
#[async_trait]
pub trait Transport: Send + Sync {
    /// Send the request and return the full response
    async fn execute(&self, request: Request) -> Result<Response>;
}

/// Transport backed by a shared `reqwest::Client`
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: Client,
}

impl ReqwestTransport {
    /// Build a transport with the given user agent and timeout
    pub fn new(user_agent: &str, timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .user_agent(user_agent)
            .timeout(timeout)
            .use_rustls_tls()
            .build()?;

        Ok(Self { client })
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn execute(&self, request: Request) -> Result<Response> {
        let Request {
            method,
            url,
            host: _,
            headers,
            body,
        } = request;

        // reqwest derives Host from the URL, which carries the same hostname.
        let mut req = self.client.request(method.clone(), url.clone()).headers(headers);
        if let Some(body) = body {
            req = req.body(body);
        }

        let response = req.send().await.map_err(Error::Http)?;
        let status = response.status().as_u16();
        let headers = response.headers().clone();
        let body = response.bytes().await.map_err(Error::Http)?;

        debug!("{} {} -> {} ({} bytes)", method, url, status, body.len());

        Ok(Response {
            status,
            headers,
            body,
        })
    }
}
