//! Per-resource configuration shared by the gateway, writer and router.

use serde::Serialize;
use serde::de::DeserializeOwned;

/// A record type proxied to the upstream API.
///
/// Implementors describe how the record is addressed upstream and how it is
/// named in persisted documents. Field order and JSON/XML element names come
/// from the type's serde derive.
///
/// # Examples
/// ```
/// use resource_proxy::domain::{Album, Resource};
///
/// assert_eq!(Album::COLLECTION, "albums");
/// assert_eq!(Album::FILTER_FIELD, "title");
/// ```
pub trait Resource: Serialize + DeserializeOwned + Clone + Send + Sync + 'static {
    /// Upstream path segment and local output directory, e.g. `albums`.
    const COLLECTION: &'static str;
    /// Display name used in messages and logs, e.g. `Album`.
    const KIND: &'static str;
    /// Root element name for XML documents, e.g. `album`.
    const XML_ROOT: &'static str;
    /// Query parameter accepted by `/find`, e.g. `title`.
    const FILTER_FIELD: &'static str;

    /// Record identity, `None` when the caller or upstream left it null.
    fn id(&self) -> Option<i32>;
}

/// Render an optional id the way document names carry it: the number, or
/// `null` when absent.
///
/// # Examples
/// ```
/// use resource_proxy::domain::id_label;
///
/// assert_eq!(id_label(Some(11)), "11");
/// assert_eq!(id_label(None), "null");
/// ```
pub fn id_label(id: Option<i32>) -> String {
    id.map_or_else(|| "null".to_owned(), |id| id.to_string())
}
