//! Driven ports at the hexagonal boundary.

mod macros;
pub(crate) use macros::define_port_error;

mod document_store;
mod upstream_client;

#[cfg(test)]
pub use document_store::MockDocumentStore;
pub use document_store::{DocumentStore, DocumentStoreError};
#[cfg(test)]
pub use upstream_client::MockUpstreamClient;
pub use upstream_client::{
    UpstreamClient, UpstreamClientError, UpstreamMethod, UpstreamRequest, UpstreamResponse,
};
