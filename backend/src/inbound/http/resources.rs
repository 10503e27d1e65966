//! Resource proxy routes, generic over the record type.
//!
//! ```text
//! GET    /albums               list all
//! GET    /albums/find?title=.. filter by the resource's field
//! GET    /albums/{id}          fetch one
//! GET    /albums/{id}/save     fetch and write JSON + XML documents
//! POST   /albums/create        create (answers with the request body)
//! PUT    /albums/update        replace
//! DELETE /albums/{id}/delete   delete
//! ```
//!
//! `/users` exposes the same table with `name` as the filter field.

use std::collections::HashMap;

use actix_web::{HttpResponse, Scope, web};

use crate::domain::{Error, Resource, ResourceService};
use crate::inbound::http::ApiResult;
use crate::inbound::http::error::{json_config, path_config, query_config};

/// Build the scope serving every route for `R` under `/<collection>`.
///
/// Expects `web::Data<ResourceService<R>>` in the application data.
///
/// # Examples
/// ```
/// use actix_web::App;
/// use resource_proxy::domain::Album;
/// use resource_proxy::inbound::http::resource_scope;
///
/// let _app = App::new().service(resource_scope::<Album>());
/// ```
pub fn resource_scope<R: Resource>() -> Scope {
    web::scope(&format!("/{}", R::COLLECTION))
        .app_data(json_config())
        .app_data(path_config())
        .app_data(query_config())
        .route("", web::get().to(list_all::<R>))
        .route("/find", web::get().to(find_by_field::<R>))
        .route("/create", web::post().to(create::<R>))
        .route("/update", web::put().to(update::<R>))
        .route("/{id}", web::get().to(get_by_id::<R>))
        .route("/{id}/save", web::get().to(fetch_and_persist::<R>))
        .route("/{id}/delete", web::delete().to(delete_by_id::<R>))
}

async fn list_all<R: Resource>(
    service: web::Data<ResourceService<R>>,
) -> ApiResult<web::Json<Vec<R>>> {
    service.gateway().list_all().await.map(web::Json)
}

async fn find_by_field<R: Resource>(
    service: web::Data<ResourceService<R>>,
    query: web::Query<HashMap<String, String>>,
) -> ApiResult<web::Json<Vec<R>>> {
    let value = query.get(R::FILTER_FIELD).ok_or_else(|| {
        Error::invalid_request(format!(
            "Required request parameter '{}' is not present",
            R::FILTER_FIELD
        ))
    })?;
    service
        .gateway()
        .find_by_field(R::FILTER_FIELD, value)
        .await
        .map(web::Json)
}

async fn get_by_id<R: Resource>(
    service: web::Data<ResourceService<R>>,
    id: web::Path<i32>,
) -> ApiResult<web::Json<R>> {
    service.gateway().get_by_id(id.into_inner()).await.map(web::Json)
}

async fn fetch_and_persist<R: Resource>(
    service: web::Data<ResourceService<R>>,
    id: web::Path<i32>,
) -> ApiResult<web::Json<R>> {
    service.fetch_and_persist(id.into_inner()).await.map(web::Json)
}

async fn create<R: Resource>(
    service: web::Data<ResourceService<R>>,
    payload: web::Json<R>,
) -> ApiResult<web::Json<R>> {
    service
        .gateway()
        .create(payload.into_inner())
        .await
        .map(web::Json)
}

async fn update<R: Resource>(
    service: web::Data<ResourceService<R>>,
    payload: web::Json<R>,
) -> ApiResult<HttpResponse> {
    service.gateway().update(&payload).await?;
    Ok(HttpResponse::Ok().finish())
}

async fn delete_by_id<R: Resource>(
    service: web::Data<ResourceService<R>>,
    id: web::Path<i32>,
) -> ApiResult<HttpResponse> {
    service.gateway().delete_by_id(id.into_inner()).await?;
    Ok(HttpResponse::Ok().finish())
}

#[cfg(test)]
mod tests;
