//! Per-resource use-cases combining the gateway and the persistence writer.

use tracing::Span;

use super::Error;
use super::persistence_writer::PersistenceWriter;
use super::resource::Resource;
use super::resource_gateway::ResourceGateway;
use super::trace_id::TraceId;

/// Everything the HTTP adapter needs to serve one resource type.
pub struct ResourceService<R> {
    gateway: ResourceGateway<R>,
    writer: PersistenceWriter<R>,
}

impl<R> Clone for ResourceService<R> {
    fn clone(&self) -> Self {
        Self {
            gateway: self.gateway.clone(),
            writer: self.writer.clone(),
        }
    }
}

impl<R: Resource> ResourceService<R> {
    pub fn new(gateway: ResourceGateway<R>, writer: PersistenceWriter<R>) -> Self {
        Self { gateway, writer }
    }

    /// Upstream gateway for plain proxy operations.
    #[must_use]
    pub fn gateway(&self) -> &ResourceGateway<R> {
        &self.gateway
    }

    /// Writer for local documents.
    #[must_use]
    pub fn writer(&self) -> &PersistenceWriter<R> {
        &self.writer
    }

    /// Fetch record `id` and save it as JSON, then as XML.
    ///
    /// The steps run strictly in order; the first failure is returned and no
    /// record is handed back. A failed JSON write means the XML write is not
    /// attempted. File writes run on the blocking pool.
    pub async fn fetch_and_persist(&self, id: i32) -> Result<R, Error> {
        let record = self.gateway.get_by_id(id).await?;
        let writer = self.writer.clone();
        let span = Span::current();
        let trace_id = TraceId::current();

        tokio::task::spawn_blocking(move || {
            let _entered = span.enter();
            let outcome = writer
                .save_as_json(&record)
                .and_then(|()| writer.save_as_xml(&record))
                .map(|()| record);
            match trace_id {
                Some(id) => outcome.map_err(|err| err.with_trace_id(id.to_string())),
                None => outcome,
            }
        })
        .await
        .map_err(|err| Error::internal(format!("document write task failed: {err}")))?
    }
}
