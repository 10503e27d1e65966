//! In-memory upstream double recording every request it receives.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use resource_proxy::domain::ports::{
    UpstreamClient, UpstreamClientError, UpstreamMethod, UpstreamRequest, UpstreamResponse,
};

type Route = (UpstreamMethod, String);

/// Canned responses keyed by method and full URL.
#[derive(Clone, Default)]
pub struct RecordingUpstream {
    responses: Arc<Mutex<HashMap<Route, Result<UpstreamResponse, UpstreamClientError>>>>,
    requests: Arc<Mutex<Vec<UpstreamRequest>>>,
}

impl RecordingUpstream {
    pub fn respond(
        &self,
        method: UpstreamMethod,
        url: &str,
        response: Result<UpstreamResponse, UpstreamClientError>,
    ) -> &Self {
        self.responses
            .lock()
            .expect("responses lock")
            .insert((method, url.to_owned()), response);
        self
    }

    pub fn requests(&self) -> Vec<UpstreamRequest> {
        self.requests.lock().expect("requests lock").clone()
    }
}

#[async_trait]
impl UpstreamClient for RecordingUpstream {
    async fn send(&self, request: UpstreamRequest) -> Result<UpstreamResponse, UpstreamClientError> {
        let key = (request.method, request.url.to_string());
        self.requests
            .lock()
            .expect("requests lock")
            .push(request);
        self.responses
            .lock()
            .expect("responses lock")
            .get(&key)
            .cloned()
            .unwrap_or_else(|| Err(UpstreamClientError::status(404_u16, "no canned response")))
    }
}
