//! Resource proxy library: domain, HTTP adapters and server wiring.
//!
//! Album and user routes are forwarded to an upstream REST API; fetched
//! records can additionally be written to local JSON and XML documents.

pub mod doc;
pub mod domain;
pub mod inbound;
pub mod middleware;
pub mod outbound;
pub mod server;

/// Public OpenAPI surface used by Swagger UI.
pub use doc::ApiDoc;
pub use domain::TraceId;
pub use middleware::Trace;
