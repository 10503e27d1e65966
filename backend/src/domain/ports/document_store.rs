//! Driven port for writing record documents below the output directory.

use std::path::{Path, PathBuf};

use super::define_port_error;

define_port_error! {
    /// Errors raised while touching the document store.
    pub enum DocumentStoreError {
        /// The filesystem operation failed.
        Io { path: PathBuf, message: String } =>
            "document store I/O failed ({path:?}): {message}",
    }
}

/// Port for storing text documents at paths relative to a fixed root.
///
/// Writes overwrite existing files and never create parent directories;
/// [`DocumentStore::ensure_directory`] prepares those explicitly.
#[cfg_attr(test, mockall::automock)]
pub trait DocumentStore: Send + Sync {
    /// Create `relative` and any missing parents.
    fn ensure_directory(&self, relative: &Path) -> Result<(), DocumentStoreError>;

    /// Replace the contents of `relative` with `contents`.
    fn write_document(&self, relative: &Path, contents: &str) -> Result<(), DocumentStoreError>;
}
