//! Reqwest-backed upstream client adapter.
//!
//! This adapter owns transport details only: method and payload encoding,
//! timeout and HTTP status mapping. Deciding whether a body counts as present
//! is left to the gateway.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Method, StatusCode, header};

use crate::domain::ports::{
    UpstreamClient, UpstreamClientError, UpstreamMethod, UpstreamRequest, UpstreamResponse,
};

const DEFAULT_USER_AGENT: &str = concat!("resource-proxy/", env!("CARGO_PKG_VERSION"));

/// Outbound identity sent with every upstream request.
pub struct UpstreamHttpIdentity {
    /// HTTP user-agent sent upstream.
    pub user_agent: String,
}

impl Default for UpstreamHttpIdentity {
    fn default() -> Self {
        Self {
            user_agent: DEFAULT_USER_AGENT.to_owned(),
        }
    }
}

/// Upstream client performing one reqwest call per port invocation.
pub struct ReqwestUpstreamClient {
    client: Client,
}

impl ReqwestUpstreamClient {
    /// Build an adapter using a reqwest client with an explicit request timeout.
    ///
    /// # Errors
    ///
    /// Returns an error when the reqwest client cannot be constructed.
    pub fn new(timeout: Duration) -> Result<Self, reqwest::Error> {
        Self::with_identity(timeout, UpstreamHttpIdentity::default())
    }

    /// Build an adapter with an explicit outbound identity.
    ///
    /// # Errors
    ///
    /// Returns an error when the reqwest client cannot be constructed.
    pub fn with_identity(
        timeout: Duration,
        identity: UpstreamHttpIdentity,
    ) -> Result<Self, reqwest::Error> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(identity.user_agent)
            .build()?;
        Ok(Self { client })
    }
}

#[async_trait]
impl UpstreamClient for ReqwestUpstreamClient {
    async fn send(&self, request: UpstreamRequest) -> Result<UpstreamResponse, UpstreamClientError> {
        let UpstreamRequest { method, url, body } = request;
        let mut builder = self
            .client
            .request(to_reqwest_method(method), url)
            .header(header::ACCEPT, "application/json");
        if let Some(payload) = body {
            builder = builder.json(&payload);
        }

        let response = builder.send().await.map_err(map_transport_error)?;
        let status = response.status();
        let bytes = response.bytes().await.map_err(map_transport_error)?;
        if !status.is_success() {
            return Err(map_status_error(status, bytes.as_ref()));
        }

        Ok(UpstreamResponse {
            status: status.as_u16(),
            body: (!bytes.is_empty()).then(|| bytes.to_vec()),
        })
    }
}

fn to_reqwest_method(method: UpstreamMethod) -> Method {
    match method {
        UpstreamMethod::Get => Method::GET,
        UpstreamMethod::Post => Method::POST,
        UpstreamMethod::Put => Method::PUT,
        UpstreamMethod::Delete => Method::DELETE,
    }
}

fn map_transport_error(error: reqwest::Error) -> UpstreamClientError {
    if error.is_timeout() {
        UpstreamClientError::timeout(error.to_string())
    } else {
        UpstreamClientError::transport(error.to_string())
    }
}

fn map_status_error(status: StatusCode, body: &[u8]) -> UpstreamClientError {
    let preview = body_preview(body);
    let message = if preview.is_empty() {
        status
            .canonical_reason()
            .unwrap_or("no response body")
            .to_owned()
    } else {
        preview
    };

    match status {
        StatusCode::REQUEST_TIMEOUT | StatusCode::GATEWAY_TIMEOUT => {
            UpstreamClientError::timeout(format!("status {}: {message}", status.as_u16()))
        }
        _ => UpstreamClientError::status(status.as_u16(), message),
    }
}

fn body_preview(body: &[u8]) -> String {
    const PREVIEW_CHAR_LIMIT: usize = 160;

    let compact = String::from_utf8_lossy(body)
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ");
    let preview = compact.chars().take(PREVIEW_CHAR_LIMIT).collect::<String>();
    if compact.chars().count() > PREVIEW_CHAR_LIMIT {
        format!("{preview}...")
    } else {
        preview
    }
}
