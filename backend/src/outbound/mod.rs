//! Outbound adapters implementing domain ports for external infrastructure.
//!
//! - **upstream**: reqwest-backed client for the upstream REST API
//! - **documents**: cap-std-backed document store below the output directory
//!
//! Adapters translate between domain types and infrastructure
//! representations. They contain no proxy logic.

pub mod documents;
pub mod upstream;
