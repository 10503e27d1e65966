//! HTTP server configuration object and helpers.

use std::net::SocketAddr;
use std::sync::Arc;

use actix_web::web;
use url::Url;

use super::AppDependencies;
use crate::domain::ports::{DocumentStore, DocumentStoreError, UpstreamClient};
use crate::domain::{Album, PersistenceWriter, ResourceGateway, ResourceService, User};
use crate::inbound::http::health::HealthState;

/// Everything `create_server` needs: where to listen and the per-resource
/// services the routes delegate to.
pub struct ServerConfig {
    bind_addr: SocketAddr,
    albums: web::Data<ResourceService<Album>>,
    users: web::Data<ResourceService<User>>,
}

impl ServerConfig {
    /// Construct a configuration from ready-made services.
    #[must_use]
    pub fn new(
        bind_addr: SocketAddr,
        albums: ResourceService<Album>,
        users: ResourceService<User>,
    ) -> Self {
        Self {
            bind_addr,
            albums: web::Data::new(albums),
            users: web::Data::new(users),
        }
    }

    /// Wire album and user services to shared port implementations.
    ///
    /// # Examples
    /// ```rust,ignore
    /// let config = ServerConfig::from_ports(bind_addr, base_url, client, store);
    /// config.prepare_output_layout()?;
    /// ```
    #[must_use]
    pub fn from_ports(
        bind_addr: SocketAddr,
        upstream_base_url: Url,
        client: Arc<dyn UpstreamClient>,
        store: Arc<dyn DocumentStore>,
    ) -> Self {
        Self::new(
            bind_addr,
            service(&upstream_base_url, &client, &store),
            service(&upstream_base_url, &client, &store),
        )
    }

    /// Return the socket address the server will bind to.
    #[must_use]
    pub fn bind_addr(&self) -> SocketAddr {
        self.bind_addr
    }

    /// Handles shared with every worker's `App`.
    #[must_use]
    pub fn app_dependencies(&self, health_state: web::Data<HealthState>) -> AppDependencies {
        AppDependencies {
            health_state,
            albums: self.albums.clone(),
            users: self.users.clone(),
        }
    }

    /// Create `albums/{json,xml}` and `users/{json,xml}` below the output
    /// directory.
    ///
    /// # Errors
    ///
    /// Propagates the first directory that cannot be created.
    pub fn prepare_output_layout(&self) -> Result<(), DocumentStoreError> {
        self.albums.writer().prepare()?;
        self.users.writer().prepare()
    }
}

fn service<R: crate::domain::Resource>(
    base_url: &Url,
    client: &Arc<dyn UpstreamClient>,
    store: &Arc<dyn DocumentStore>,
) -> ResourceService<R> {
    ResourceService::new(
        ResourceGateway::new(Arc::clone(client), base_url.clone()),
        PersistenceWriter::new(Arc::clone(store)),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ports::{MockDocumentStore, MockUpstreamClient};
    use std::path::{Path, PathBuf};

    #[test]
    fn prepares_standard_layout() {
        let mut store = MockDocumentStore::new();
        for dir in ["albums/json", "albums/xml", "users/json", "users/xml"] {
            store
                .expect_ensure_directory()
                .withf(move |path| path == Path::new(dir))
                .times(1)
                .returning(|_| Ok(()));
        }
        let config = ServerConfig::from_ports(
            "127.0.0.1:0".parse().expect("socket address"),
            Url::parse("https://jsonplaceholder.typicode.com").expect("valid URL"),
            Arc::new(MockUpstreamClient::new()),
            Arc::new(store),
        );
        config.prepare_output_layout().expect("layout prepared");
    }

    #[test]
    fn layout_failure_stops_preparation() {
        let mut store = MockDocumentStore::new();
        store
            .expect_ensure_directory()
            .times(1)
            .returning(|path| Err(DocumentStoreError::io(PathBuf::from(path), "read-only")));
        let config = ServerConfig::from_ports(
            "127.0.0.1:0".parse().expect("socket address"),
            Url::parse("https://jsonplaceholder.typicode.com").expect("valid URL"),
            Arc::new(MockUpstreamClient::new()),
            Arc::new(store),
        );
        assert!(config.prepare_output_layout().is_err());
    }
}
