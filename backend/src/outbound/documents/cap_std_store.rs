//! Capability-scoped document store rooted at the configured output directory.
//!
//! Every path handed to the store is resolved relative to the root `Dir`, so
//! records can never be written outside it.

use std::io;
use std::path::{Path, PathBuf};

use cap_std::{ambient_authority, fs::Dir};

use crate::domain::ports::{DocumentStore, DocumentStoreError};

/// [`DocumentStore`] backed by a `cap_std` directory handle.
pub struct CapStdDocumentStore {
    root: Dir,
    root_path: PathBuf,
}

impl CapStdDocumentStore {
    /// Open `root`, creating it first when missing.
    ///
    /// # Errors
    ///
    /// Returns [`DocumentStoreError::Io`] when the directory cannot be created
    /// or opened.
    pub fn open(root: impl Into<PathBuf>) -> Result<Self, DocumentStoreError> {
        let root_path = root.into();
        Dir::create_ambient_dir_all(&root_path, ambient_authority())
            .map_err(|error| io_error(&root_path, &error))?;
        let root = Dir::open_ambient_dir(&root_path, ambient_authority())
            .map_err(|error| io_error(&root_path, &error))?;
        Ok(Self { root, root_path })
    }

    /// Absolute location of the store root as configured.
    #[must_use]
    pub fn root_path(&self) -> &Path {
        &self.root_path
    }
}

impl DocumentStore for CapStdDocumentStore {
    fn ensure_directory(&self, relative: &Path) -> Result<(), DocumentStoreError> {
        self.root
            .create_dir_all(relative)
            .map_err(|error| io_error(&self.root_path.join(relative), &error))
    }

    fn write_document(&self, relative: &Path, contents: &str) -> Result<(), DocumentStoreError> {
        self.root
            .write(relative, contents.as_bytes())
            .map_err(|error| io_error(&self.root_path.join(relative), &error))
    }
}

fn io_error(path: &Path, error: &io::Error) -> DocumentStoreError {
    DocumentStoreError::io(path.to_path_buf(), error.to_string())
}
