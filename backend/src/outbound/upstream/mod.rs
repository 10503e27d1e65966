//! Upstream REST API adapters.
//!
//! Provides the reqwest implementation of the `UpstreamClient` port.

mod http_client;

pub use http_client::{ReqwestUpstreamClient, UpstreamHttpIdentity};
