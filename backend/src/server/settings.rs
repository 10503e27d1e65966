//! Process settings loaded via OrthoConfig.
//!
//! Values come from CLI flags, `RESOURCE_PROXY_*` environment variables and
//! an optional config file. Every field is optional; accessors apply the
//! defaults and reject values the server cannot run with.

use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use std::time::Duration;

use ortho_config::OrthoConfig;
use serde::Deserialize;
use thiserror::Error;
use url::Url;

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";
const DEFAULT_UPSTREAM_BASE_URL: &str = "https://jsonplaceholder.typicode.com";
const DEFAULT_OUTPUT_DIR: &str = ".";
const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

/// Settings that cannot be turned into a runnable server.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SettingsError {
    #[error("invalid bind address {value:?}: {message}")]
    BindAddr { value: String, message: String },
    #[error("invalid upstream base URL {value:?}: {message}")]
    UpstreamBaseUrl { value: String, message: String },
    #[error("upstream base URL {value:?} cannot carry path segments")]
    UpstreamBaseUrlNotHierarchical { value: String },
    #[error("request timeout must be at least one second")]
    ZeroTimeout,
}

/// Resource proxy settings.
#[derive(Debug, Clone, Default, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "RESOURCE_PROXY")]
pub struct ProxySettings {
    /// Socket address the HTTP server binds to.
    pub bind_addr: Option<String>,
    /// Base URL of the upstream REST API.
    pub upstream_base_url: Option<String>,
    /// Directory below which record documents are written.
    pub output_dir: Option<PathBuf>,
    /// Upper bound for one upstream exchange, in seconds.
    pub request_timeout_secs: Option<u64>,
}

impl ProxySettings {
    /// Parsed bind address, defaulting to `0.0.0.0:8080`.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError::BindAddr`] when the value is not a socket
    /// address.
    pub fn bind_addr(&self) -> Result<SocketAddr, SettingsError> {
        let value = self.bind_addr.as_deref().unwrap_or(DEFAULT_BIND_ADDR);
        value.parse().map_err(|err: std::net::AddrParseError| SettingsError::BindAddr {
            value: value.to_owned(),
            message: err.to_string(),
        })
    }

    /// Parsed upstream base URL, defaulting to the public placeholder API.
    ///
    /// # Errors
    ///
    /// Returns an error when the value does not parse or cannot be extended
    /// with path segments (e.g. `mailto:` URLs).
    pub fn upstream_base_url(&self) -> Result<Url, SettingsError> {
        let value = self
            .upstream_base_url
            .as_deref()
            .unwrap_or(DEFAULT_UPSTREAM_BASE_URL);
        let url = Url::parse(value).map_err(|err| SettingsError::UpstreamBaseUrl {
            value: value.to_owned(),
            message: err.to_string(),
        })?;
        if url.cannot_be_a_base() {
            return Err(SettingsError::UpstreamBaseUrlNotHierarchical {
                value: value.to_owned(),
            });
        }
        Ok(url)
    }

    /// Output directory, defaulting to the working directory.
    #[must_use]
    pub fn output_dir(&self) -> &Path {
        self.output_dir
            .as_deref()
            .unwrap_or_else(|| Path::new(DEFAULT_OUTPUT_DIR))
    }

    /// Upstream request timeout, defaulting to thirty seconds.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError::ZeroTimeout`] for a zero value.
    pub fn request_timeout(&self) -> Result<Duration, SettingsError> {
        match self.request_timeout_secs.unwrap_or(DEFAULT_REQUEST_TIMEOUT_SECS) {
            0 => Err(SettingsError::ZeroTimeout),
            secs => Ok(Duration::from_secs(secs)),
        }
    }
}
