//! Local document storage adapters.

mod cap_std_store;

pub use cap_std_store::CapStdDocumentStore;
