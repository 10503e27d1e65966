//! HTTP inbound adapter exposing the proxy routes and health probes.

pub mod error;
pub mod health;
pub mod resources;

pub use error::ApiResult;
pub use resources::resource_scope;
