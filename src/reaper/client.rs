//! Rate-gated request issuer
//!
//! Every call waits on the shared [`RateGate`], builds its request, hands it
//! to the transport and, for `reap` and `get_sow`, passes the response to the
//! parser. Errors from either collaborator are returned as-is.

use super::request::{encode_params, form_headers, post_url, reap_url, with_suffix};
use crate::config::ReaperConfig;
use crate::error::Result;
use crate::http::{RateGate, Request, ReqwestTransport, Response, Transport};
use crate::parse::{JsonParser, ResponseParser};
use crate::types::{Harvest, Params, Submission};
use reqwest::Method;
use std::sync::Arc;
use tokio::time::Instant;
use tracing::{debug, warn};

/// High level client for listing reads and form posts
pub struct Reaper {
    transport: Arc<dyn Transport>,
    parser: Arc<dyn ResponseParser>,
    hostname: String,
    reap_suffix: String,
    scheme: &'static str,
    gate: RateGate,
}

impl Reaper {
    /// Create a reaper with explicit collaborators
    pub fn new(
        config: &ReaperConfig,
        transport: Arc<dyn Transport>,
        parser: Arc<dyn ResponseParser>,
    ) -> Self {
        Self {
            transport,
            parser,
            hostname: config.hostname.clone(),
            reap_suffix: config.reap_suffix.clone(),
            scheme: config.scheme(),
            gate: RateGate::new(config.rate),
        }
    }

    /// Create a reaper with the reqwest transport and the JSON parser
    pub fn from_config(config: &ReaperConfig) -> Result<Self> {
        config.validate()?;
        let transport = ReqwestTransport::new(&config.user_agent, config.timeout)?;
        Ok(Self::new(
            config,
            Arc::new(transport),
            Arc::new(JsonParser::new()),
        ))
    }

    /// GET `path` (plus the configured suffix) and parse the listing
    pub async fn reap(&self, path: &str, params: &Params) -> Result<Harvest> {
        self.gate.acquire().await;

        let url = reap_url(
            self.scheme,
            &self.hostname,
            &with_suffix(path, &self.reap_suffix),
            params,
        )?;
        let response = self
            .dispatch(Request::new(Method::GET, url, &self.hostname))
            .await?;

        self.parser.parse(&response)
    }

    /// POST a form to `path`, discarding the response
    pub async fn sow(&self, path: &str, params: &Params) -> Result<()> {
        self.gate.acquire().await;

        self.dispatch(self.form_request(path, params)?).await?;
        Ok(())
    }

    /// POST a form to `path` with `api_type=json` and parse the created item
    pub async fn get_sow(&self, path: &str, params: &Params) -> Result<Submission> {
        self.gate.acquire().await;

        let mut params = params.clone();
        params.insert("api_type".to_string(), "json".to_string());

        let response = self.dispatch(self.form_request(path, &params)?).await?;
        self.parser.parse_submitted(&response)
    }

    /// When the most recent request passed the rate gate
    pub async fn last_dispatch(&self) -> Option<Instant> {
        self.gate.last_dispatch().await
    }

    /// The configured hostname
    pub fn hostname(&self) -> &str {
        &self.hostname
    }

    fn form_request(&self, path: &str, params: &Params) -> Result<Request> {
        let body = encode_params(params);
        let url = post_url(self.scheme, &self.hostname, path)?;

        Ok(Request::new(Method::POST, url, &self.hostname)
            .with_headers(form_headers(&body))
            .with_body(body))
    }

    async fn dispatch(&self, request: Request) -> Result<Response> {
        debug!("{} {}", request.method, request.url);
        let method = request.method.clone();

        self.transport.execute(request).await.inspect_err(|e| {
            warn!("{} to {} failed: {}", method, self.hostname, e);
        })
    }
}

impl std::fmt::Debug for Reaper {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Reaper")
            .field("hostname", &self.hostname)
            .field("reap_suffix", &self.reap_suffix)
            .field("scheme", &self.scheme)
            .field("gate", &self.gate)
            .finish_non_exhaustive()
    }
}
