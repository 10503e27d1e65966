//! Serialises fetched records to JSON and XML documents.
//!
//! Documents land at `<collection>/json/<id>.json` and
//! `<collection>/xml/<id>.xml` relative to the document store root and are
//! overwritten on repeat saves. A record without an id is saved as
//! `null.<ext>`. Null fields are written as JSON `null` and omitted from XML. Concurrent saves of one id race; the last
//! write wins.

use std::marker::PhantomData;
use std::path::PathBuf;
use std::sync::Arc;

use serde::Serialize;
use tracing::info;

use super::Error;
use super::ports::{DocumentStore, DocumentStoreError};
use super::resource::{Resource, id_label};

const XML_DECLARATION: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#;
const XML_INDENT: usize = 4;

/// Document format written by the persistence writer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    Json,
    Xml,
}

impl DocumentFormat {
    const fn extension(self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Xml => "xml",
        }
    }

    const fn label(self) -> &'static str {
        match self {
            Self::Json => "JSON",
            Self::Xml => "XML",
        }
    }
}

/// Writes `R` records through a [`DocumentStore`].
pub struct PersistenceWriter<R> {
    store: Arc<dyn DocumentStore>,
    resource: PhantomData<fn() -> R>,
}

impl<R> Clone for PersistenceWriter<R> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
            resource: PhantomData,
        }
    }
}

impl<R: Resource> PersistenceWriter<R> {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self {
            store,
            resource: PhantomData,
        }
    }

    /// Relative path of the document holding record `id` in `format`.
    ///
    /// # Examples
    /// ```rust,ignore
    /// let path = PersistenceWriter::<Album>::document_path(DocumentFormat::Xml, Some(11));
    /// assert_eq!(path, PathBuf::from("albums/xml/11.xml"));
    /// ```
    #[must_use]
    pub fn document_path(format: DocumentFormat, id: Option<i32>) -> PathBuf {
        PathBuf::from(R::COLLECTION)
            .join(format.extension())
            .join(format!("{}.{}", id_label(id), format.extension()))
    }

    /// Create the `json` and `xml` directories for `R`.
    pub fn prepare(&self) -> Result<(), DocumentStoreError> {
        for format in [DocumentFormat::Json, DocumentFormat::Xml] {
            self.store
                .ensure_directory(&PathBuf::from(R::COLLECTION).join(format.extension()))?;
        }
        Ok(())
    }

    /// Write `record` as compact JSON.
    pub fn save_as_json(&self, record: &R) -> Result<(), Error> {
        let contents = serde_json::to_string(record)
            .map_err(|err| save_error::<R>(DocumentFormat::Json, err))?;
        self.write(DocumentFormat::Json, record.id(), &contents)
    }

    /// Write `record` as an indented XML document rooted at `R::XML_ROOT`.
    pub fn save_as_xml(&self, record: &R) -> Result<(), Error> {
        let contents = encode_xml(record, R::XML_ROOT)
            .map_err(|err| save_error::<R>(DocumentFormat::Xml, err))?;
        self.write(DocumentFormat::Xml, record.id(), &contents)
    }

    fn write(&self, format: DocumentFormat, id: Option<i32>, contents: &str) -> Result<(), Error> {
        let path = Self::document_path(format, id);
        let id = id_label(id);
        self.store
            .write_document(&path, contents)
            .map_err(|err| save_error::<R>(format, err))?;
        info!(
            resource = R::KIND,
            id = %id,
            path = %path.display(),
            "saved {} {id} to {} file",
            R::KIND,
            format.label()
        );
        Ok(())
    }
}

fn save_error<R: Resource>(format: DocumentFormat, cause: impl std::fmt::Display) -> Error {
    Error::persistence(format!(
        "Error saving {} {} file: {cause}",
        R::KIND,
        format.label()
    ))
}

/// Render `value` as an XML document with one element per field.
pub(crate) fn encode_xml<T: Serialize>(value: &T, root: &str) -> Result<String, String> {
    let mut document = String::from(XML_DECLARATION);
    document.push('\n');
    let mut serializer = quick_xml::se::Serializer::with_root(&mut document, Some(root))
        .map_err(|err| err.to_string())?;
    serializer.indent(' ', XML_INDENT);
    value.serialize(serializer).map_err(|err| err.to_string())?;
    document.push('\n');
    Ok(document)
}
