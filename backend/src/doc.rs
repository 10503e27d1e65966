//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] registers the health probe paths and the record and error
//! schemas returned by the resource routes. The generated document backs
//! Swagger UI in debug builds.

use utoipa::OpenApi;

use crate::domain::{Address, Album, Company, Error, ErrorKind, User};

/// OpenAPI document for the proxy.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Resource proxy API",
        description = "Album and user routes forwarded to an upstream REST API, plus health probes."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(Album, User, Address, Company, Error, ErrorKind)),
    tags(
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;
