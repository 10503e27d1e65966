//! Resource proxy entry-point: loads settings, wires adapters and serves the
//! album and user routes.

use std::sync::Arc;

use actix_web::web;
use color_eyre::eyre::{Result, WrapErr, eyre};
use ortho_config::OrthoConfig;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use resource_proxy::inbound::http::health::HealthState;
use resource_proxy::outbound::documents::CapStdDocumentStore;
use resource_proxy::outbound::upstream::ReqwestUpstreamClient;
use resource_proxy::server::{
    ProxySettings, ServerConfig, create_server, drain_on, shutdown_signal,
};

/// Application bootstrap.
#[actix_web::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let settings = ProxySettings::load_from_iter(std::env::args_os())
        .map_err(|err| eyre!("failed to load settings: {err}"))?;
    let bind_addr = settings.bind_addr()?;
    let upstream_base_url = settings.upstream_base_url()?;
    let timeout = settings.request_timeout()?;

    let client = ReqwestUpstreamClient::new(timeout).wrap_err("failed to build HTTP client")?;
    let store = CapStdDocumentStore::open(settings.output_dir())?;

    let config = ServerConfig::from_ports(
        bind_addr,
        upstream_base_url.clone(),
        Arc::new(client),
        Arc::new(store),
    );
    config.prepare_output_layout()?;

    let health_state = web::Data::new(HealthState::new());
    let server = create_server(health_state.clone(), config)
        .wrap_err_with(|| format!("failed to bind {bind_addr}"))?;
    actix_web::rt::spawn(drain_on(shutdown_signal(), health_state, server.handle()));
    info!(
        %bind_addr,
        upstream = %upstream_base_url,
        output_dir = %settings.output_dir().display(),
        "resource proxy listening"
    );
    server.await.wrap_err("server terminated with an error")
}
