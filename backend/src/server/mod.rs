//! Server construction and middleware wiring.

mod config;
mod settings;
mod shutdown;

pub use config::ServerConfig;
pub use settings::{ProxySettings, SettingsError};
pub use shutdown::{drain_on, shutdown_signal};

use actix_web::dev::{Server, ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, HttpServer, web};
#[cfg(debug_assertions)]
use utoipa::OpenApi;
#[cfg(debug_assertions)]
use utoipa_swagger_ui::SwaggerUi;

use crate::Trace;
#[cfg(debug_assertions)]
use crate::doc::ApiDoc;
use crate::domain::{Album, ResourceService, User};
use crate::inbound::http::health::{HealthState, live, ready};
use crate::inbound::http::resource_scope;

/// Shared handles cloned into every worker's `App`.
#[derive(Clone)]
pub struct AppDependencies {
    pub health_state: web::Data<HealthState>,
    pub albums: web::Data<ResourceService<Album>>,
    pub users: web::Data<ResourceService<User>>,
}

/// Build the application: trace middleware, health probes, both resource
/// scopes and, in debug builds, Swagger UI at `/docs`.
pub fn build_app(
    deps: AppDependencies,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let AppDependencies {
        health_state,
        albums,
        users,
    } = deps;

    let app = App::new()
        .app_data(health_state)
        .app_data(albums)
        .app_data(users)
        .wrap(Trace)
        .service(ready)
        .service(live)
        .service(resource_scope::<Album>())
        .service(resource_scope::<User>());

    #[cfg(debug_assertions)]
    let app = app.service(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()));
    #[cfg(not(debug_assertions))]
    let app = app;

    app
}

/// Construct an Actix HTTP server using the provided health state and
/// configuration, marking the service ready once the socket is bound.
///
/// Actix's own signal handling is disabled; pair the server with
/// [`drain_on`] so liveness fails before the drain starts.
///
/// # Errors
///
/// Propagates [`std::io::Error`] when binding the socket fails.
pub fn create_server(
    health_state: web::Data<HealthState>,
    config: ServerConfig,
) -> std::io::Result<Server> {
    let deps = config.app_dependencies(health_state.clone());
    let server = HttpServer::new(move || build_app(deps.clone()))
        .disable_signals()
        .bind(config.bind_addr())?
        .run();

    health_state.mark_ready();
    Ok(server)
}
