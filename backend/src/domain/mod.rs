//! Domain records, ports and use-cases.
//!
//! Purpose: keep the proxy logic free of HTTP server and filesystem details.
//! Inbound adapters call [`ResourceService`]; outbound adapters implement the
//! traits in [`ports`].
//!
//! Public surface:
//! - Album, User (with Address, Company): proxied records.
//! - Resource: per-type addressing and naming configuration.
//! - ResourceGateway: upstream calls with the empty-body rule.
//! - PersistenceWriter: JSON/XML documents for fetched records.
//! - ResourceService: gateway plus writer, including fetch-and-persist.
//! - Error / ErrorKind: transport-agnostic failures.

pub mod album;
pub mod error;
pub mod persistence_writer;
pub mod ports;
pub mod resource;
pub mod resource_gateway;
pub mod resource_service;
pub mod trace_id;
pub mod user;

pub use self::album::Album;
pub use self::error::{Error, ErrorKind};
pub use self::persistence_writer::{DocumentFormat, PersistenceWriter};
pub use self::resource::{Resource, id_label};
pub use self::resource_gateway::ResourceGateway;
pub use self::resource_service::ResourceService;
pub use self::trace_id::{TRACE_ID_HEADER, TraceId};
pub use self::user::{Address, Company, User};
