//! Generic gateway translating resource operations into upstream calls.
//!
//! One instance exists per resource type. Besides building URLs the gateway
//! only separates "the exchange failed" (transport error) from "the exchange
//! succeeded but carried no body" (empty-body error).

use std::marker::PhantomData;
use std::sync::Arc;

use serde::de::DeserializeOwned;
use tracing::debug;
use url::Url;

use super::Error;
use super::ports::{
    UpstreamClient, UpstreamClientError, UpstreamMethod, UpstreamRequest, UpstreamResponse,
};
use super::resource::Resource;

/// Upstream gateway for resource type `R`.
pub struct ResourceGateway<R> {
    client: Arc<dyn UpstreamClient>,
    base_url: Url,
    resource: PhantomData<fn() -> R>,
}

impl<R> Clone for ResourceGateway<R> {
    fn clone(&self) -> Self {
        Self {
            client: Arc::clone(&self.client),
            base_url: self.base_url.clone(),
            resource: PhantomData,
        }
    }
}

impl<R: Resource> ResourceGateway<R> {
    /// Build a gateway issuing requests below `base_url`.
    ///
    /// # Examples
    /// ```rust,ignore
    /// let gateway = ResourceGateway::<Album>::new(client, base_url);
    /// let album = gateway.get_by_id(11).await?;
    /// ```
    pub fn new(client: Arc<dyn UpstreamClient>, base_url: Url) -> Self {
        Self {
            client,
            base_url,
            resource: PhantomData,
        }
    }

    /// Fetch the whole collection, preserving upstream order.
    pub async fn list_all(&self) -> Result<Vec<R>, Error> {
        let url = self.url_for(&[])?;
        let response = self.send(UpstreamRequest::new(UpstreamMethod::Get, url)).await?;
        decode_payload(&response, read_empty_message::<R>)
    }

    /// Fetch one record. The id is forwarded verbatim.
    pub async fn get_by_id(&self, id: i32) -> Result<R, Error> {
        let url = self.url_for(&[&id.to_string()])?;
        let response = self.send(UpstreamRequest::new(UpstreamMethod::Get, url)).await?;
        decode_payload(&response, read_empty_message::<R>)
    }

    /// Fetch records whose `field` equals `value`.
    pub async fn find_by_field(&self, field: &str, value: &str) -> Result<Vec<R>, Error> {
        let mut url = self.url_for(&[])?;
        url.query_pairs_mut().append_pair(field, value);
        let response = self.send(UpstreamRequest::new(UpstreamMethod::Get, url)).await?;
        decode_payload(&response, read_empty_message::<R>)
    }

    /// Create a record upstream.
    ///
    /// Returns the caller's `record` unchanged once the upstream answers with
    /// a body; the echoed payload is not decoded, so server-assigned fields
    /// are never reflected.
    pub async fn create(&self, record: R) -> Result<R, Error> {
        let url = self.url_for(&[])?;
        let request = UpstreamRequest::new(UpstreamMethod::Post, url).with_body(encode(&record)?);
        let response = self.send(request).await?;
        if response.payload().is_none() {
            return Err(Error::upstream_empty_body(create_empty_message::<R>()));
        }
        Ok(record)
    }

    /// Replace the record stored under `record.id()`. The response is ignored.
    ///
    /// A record without an id is sent to the collection path with an empty
    /// trailing segment.
    pub async fn update(&self, record: &R) -> Result<(), Error> {
        let segment = record.id().map(|id| id.to_string()).unwrap_or_default();
        let url = self.url_for(&[&segment])?;
        let request = UpstreamRequest::new(UpstreamMethod::Put, url).with_body(encode(record)?);
        self.send(request).await.map(drop)
    }

    /// Delete the record stored under `id`. The response is ignored.
    pub async fn delete_by_id(&self, id: i32) -> Result<(), Error> {
        let url = self.url_for(&[&id.to_string()])?;
        self.send(UpstreamRequest::new(UpstreamMethod::Delete, url))
            .await
            .map(drop)
    }

    fn url_for(&self, segments: &[&str]) -> Result<Url, Error> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|()| {
                Error::internal(format!(
                    "upstream base URL {} cannot carry path segments",
                    self.base_url
                ))
            })?
            .pop_if_empty()
            .push(R::COLLECTION)
            .extend(segments);
        Ok(url)
    }

    async fn send(&self, request: UpstreamRequest) -> Result<UpstreamResponse, Error> {
        debug!(
            resource = R::KIND,
            method = %request.method,
            url = %request.url,
            "sending upstream request"
        );
        self.client.send(request).await.map_err(map_client_error)
    }
}

fn read_empty_message<R: Resource>() -> String {
    format!("Error sending {} API request. Request body is empty.", R::KIND)
}

fn create_empty_message<R: Resource>() -> String {
    format!(
        "Error sending create {} API request. Request body is empty.",
        R::KIND
    )
}

fn encode<R: Resource>(record: &R) -> Result<serde_json::Value, Error> {
    serde_json::to_value(record)
        .map_err(|err| Error::internal(format!("could not encode {}: {err}", R::KIND)))
}

fn decode_payload<T: DeserializeOwned>(
    response: &UpstreamResponse,
    empty_message: impl FnOnce() -> String,
) -> Result<T, Error> {
    let payload = response
        .payload()
        .ok_or_else(|| Error::upstream_empty_body(empty_message()))?;
    serde_json::from_slice(payload)
        .map_err(|err| Error::upstream_transport(format!("could not decode upstream body: {err}")))
}

fn map_client_error(error: UpstreamClientError) -> Error {
    Error::upstream_transport(error.to_string())
}
