//! Domain-level error type.
//!
//! Errors are transport agnostic. The HTTP adapter renders them as the
//! `{ "error": <kind>, "message": <text> }` envelope; every kind shares one
//! client-error status there.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::trace_id::TraceId;

/// Failure category, serialised as the kind name clients see.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[non_exhaustive]
pub enum ErrorKind {
    /// Upstream answered at the transport level but returned no body.
    #[serde(rename = "UpstreamEmptyBodyError")]
    UpstreamEmptyBody,
    /// The upstream exchange itself failed (connection, status, decoding).
    #[serde(rename = "UpstreamTransportError")]
    UpstreamTransport,
    /// Writing a record document to disk failed.
    #[serde(rename = "PersistenceError")]
    Persistence,
    /// The inbound request could not be read (path, query or body).
    #[serde(rename = "InvalidRequestError")]
    InvalidRequest,
    /// Anything not classified above.
    #[serde(rename = "RuntimeError")]
    Internal,
}

impl ErrorKind {
    /// Kind name as rendered on the wire.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::UpstreamEmptyBody => "UpstreamEmptyBodyError",
            Self::UpstreamTransport => "UpstreamTransportError",
            Self::Persistence => "PersistenceError",
            Self::InvalidRequest => "InvalidRequestError",
            Self::Internal => "RuntimeError",
        }
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Domain error payload.
///
/// The trace identifier in scope at construction time is captured so the
/// HTTP adapter can echo it as a response header; it is not part of the body.
///
/// # Examples
/// ```
/// use resource_proxy::domain::{Error, ErrorKind};
///
/// let err = Error::upstream_empty_body("Request body is empty.");
/// assert_eq!(err.kind(), ErrorKind::UpstreamEmptyBody);
/// assert_eq!(
///     serde_json::to_string(&err).unwrap(),
///     r#"{"error":"UpstreamEmptyBodyError","message":"Request body is empty."}"#
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Error {
    #[serde(rename = "error")]
    #[schema(example = "UpstreamEmptyBodyError")]
    kind: ErrorKind,
    #[schema(example = "Error sending Album API request. Request body is empty.")]
    message: String,
    #[serde(skip)]
    trace_id: Option<String>,
}

impl Error {
    /// Create a new error, capturing the ambient trace identifier.
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            trace_id: TraceId::current().map(|id| id.to_string()),
        }
    }

    /// Attach an explicit trace identifier.
    #[must_use]
    pub fn with_trace_id(mut self, id: impl Into<String>) -> Self {
        self.trace_id = Some(id.into());
        self
    }

    /// Failure category.
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// Human-readable message returned to clients.
    #[must_use]
    pub fn message(&self) -> &str {
        self.message.as_str()
    }

    /// Trace identifier captured when the error was raised.
    #[must_use]
    pub fn trace_id(&self) -> Option<&str> {
        self.trace_id.as_deref()
    }

    /// Convenience constructor for [`ErrorKind::UpstreamEmptyBody`].
    pub fn upstream_empty_body(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::UpstreamEmptyBody, message)
    }

    /// Convenience constructor for [`ErrorKind::UpstreamTransport`].
    pub fn upstream_transport(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::UpstreamTransport, message)
    }

    /// Convenience constructor for [`ErrorKind::Persistence`].
    pub fn persistence(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Persistence, message)
    }

    /// Convenience constructor for [`ErrorKind::InvalidRequest`].
    pub fn invalid_request(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::InvalidRequest, message)
    }

    /// Convenience constructor for [`ErrorKind::Internal`].
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Internal, message)
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for Error {}
