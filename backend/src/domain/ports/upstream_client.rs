//! Driven port for exchanging requests with the upstream REST API.
//!
//! The gateway owns URL construction and the empty-body rule; adapters only
//! move bytes and classify transport failures.

use async_trait::async_trait;
use serde_json::Value;
use url::Url;

use super::define_port_error;

/// HTTP verb used for an upstream call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UpstreamMethod {
    Get,
    Post,
    Put,
    Delete,
}

impl std::fmt::Display for UpstreamMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Delete => "DELETE",
        })
    }
}

/// One outbound call.
#[derive(Debug, Clone, PartialEq)]
pub struct UpstreamRequest {
    pub method: UpstreamMethod,
    /// Fully resolved target, including any query string.
    pub url: Url,
    /// JSON payload for POST and PUT.
    pub body: Option<Value>,
}

impl UpstreamRequest {
    /// Request without a payload.
    #[must_use]
    pub fn new(method: UpstreamMethod, url: Url) -> Self {
        Self {
            method,
            url,
            body: None,
        }
    }

    /// Attach a JSON payload.
    #[must_use]
    pub fn with_body(mut self, body: Value) -> Self {
        self.body = Some(body);
        self
    }
}

/// Successful (2xx) upstream answer.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct UpstreamResponse {
    pub status: u16,
    /// Raw payload; `None` when the upstream sent no content.
    pub body: Option<Vec<u8>>,
}

impl UpstreamResponse {
    /// 200 response carrying `body`.
    #[must_use]
    pub fn ok(body: impl Into<Vec<u8>>) -> Self {
        Self {
            status: 200,
            body: Some(body.into()),
        }
    }

    /// 200 response without content.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            status: 200,
            body: None,
        }
    }

    /// Payload bytes when the upstream actually sent something.
    ///
    /// A missing body, whitespace, or the JSON literal `null` all count as
    /// absent.
    ///
    /// # Examples
    /// ```
    /// use resource_proxy::domain::ports::UpstreamResponse;
    ///
    /// assert!(UpstreamResponse::ok("null").payload().is_none());
    /// assert!(UpstreamResponse::ok("[]").payload().is_some());
    /// ```
    #[must_use]
    pub fn payload(&self) -> Option<&[u8]> {
        let body = self.body.as_deref()?;
        let trimmed = body.trim_ascii();
        if trimmed.is_empty() || trimmed == b"null" {
            None
        } else {
            Some(body)
        }
    }
}

define_port_error! {
    /// Failures of the upstream exchange itself.
    pub enum UpstreamClientError {
        /// The connection failed or broke before a response arrived.
        Transport { message: String } =>
            "upstream transport failed: {message}",
        /// The call exceeded the configured timeout.
        Timeout { message: String } =>
            "upstream timeout: {message}",
        /// The upstream answered with a non-success status.
        Status { status: u16, message: String } =>
            "upstream responded with {status}: {message}",
    }
}

/// Port for sending one request to the upstream API.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UpstreamClient: Send + Sync {
    /// Perform the exchange, returning the response for 2xx statuses.
    async fn send(&self, request: UpstreamRequest) -> Result<UpstreamResponse, UpstreamClientError>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::missing(None, false)]
    #[case::empty(Some(""), false)]
    #[case::blank(Some("  \n"), false)]
    #[case::json_null(Some("null"), false)]
    #[case::empty_array(Some("[]"), true)]
    #[case::object(Some(r#"{"id":1}"#), true)]
    fn payload_presence(#[case] body: Option<&str>, #[case] present: bool) {
        let response = UpstreamResponse {
            status: 200,
            body: body.map(|text| text.as_bytes().to_vec()),
        };
        assert_eq!(response.payload().is_some(), present);
    }

    #[test]
    fn status_error_mentions_code() {
        let err = UpstreamClientError::status(404_u16, "not found");
        assert_eq!(err.to_string(), "upstream responded with 404: not found");
    }
}
