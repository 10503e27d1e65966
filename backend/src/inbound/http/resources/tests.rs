//! Handler tests for the generic resource routes.

use super::*;
use crate::domain::ports::{
    DocumentStoreError, MockDocumentStore, MockUpstreamClient, UpstreamMethod, UpstreamResponse,
};
use crate::domain::{Album, PersistenceWriter, ResourceGateway, User};
use actix_web::dev::ServiceResponse;
use actix_web::http::StatusCode;
use actix_web::test::{self as actix_test, TestRequest};
use actix_web::{App, web};
use rstest::rstest;
use serde_json::{Value, json};
use std::path::Path;
use std::sync::Arc;
use url::Url;

const BASE: &str = "https://jsonplaceholder.typicode.com";

fn service<R: Resource>(client: MockUpstreamClient, store: MockDocumentStore) -> ResourceService<R> {
    let base = Url::parse(BASE).expect("valid base URL");
    ResourceService::new(
        ResourceGateway::new(Arc::new(client), base),
        PersistenceWriter::new(Arc::new(store)),
    )
}

async fn call<R: Resource>(
    client: MockUpstreamClient,
    store: MockDocumentStore,
    request: TestRequest,
) -> ServiceResponse {
    let app = actix_test::init_service(
        App::new()
            .app_data(web::Data::new(service::<R>(client, store)))
            .service(resource_scope::<R>()),
    )
    .await;
    actix_test::call_service(&app, request.to_request()).await
}

fn answering(
    method: UpstreamMethod,
    url: &'static str,
    response: UpstreamResponse,
) -> MockUpstreamClient {
    let mut client = MockUpstreamClient::new();
    client
        .expect_send()
        .withf(move |request| request.method == method && request.url.as_str() == url)
        .times(1)
        .return_once(move |_| Ok(response));
    client
}

fn silent_client() -> MockUpstreamClient {
    let mut client = MockUpstreamClient::new();
    client.expect_send().never();
    client
}

async fn error_body(response: ServiceResponse) -> Value {
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    actix_test::read_body_json(response).await
}

#[actix_web::test]
async fn get_by_id_returns_upstream_record() {
    let client = answering(
        UpstreamMethod::Get,
        "https://jsonplaceholder.typicode.com/albums/11",
        UpstreamResponse::ok(r#"{"userId":1,"id":11,"title":"mock title"}"#),
    );
    let res = call::<Album>(client, MockDocumentStore::new(), TestRequest::get().uri("/albums/11")).await;
    assert_eq!(res.status(), StatusCode::OK);
    let body = actix_test::read_body(res).await;
    assert_eq!(body.as_ref(), br#"{"userId":1,"id":11,"title":"mock title"}"#);
}

#[actix_web::test]
async fn list_all_preserves_order() {
    let client = answering(
        UpstreamMethod::Get,
        "https://jsonplaceholder.typicode.com/albums",
        UpstreamResponse::ok(
            r#"[{"userId":1,"id":2,"title":"b"},{"userId":1,"id":1,"title":"a"}]"#,
        ),
    );
    let res = call::<Album>(client, MockDocumentStore::new(), TestRequest::get().uri("/albums")).await;
    assert_eq!(res.status(), StatusCode::OK);
    let albums: Vec<Album> = actix_test::read_body_json(res).await;
    assert_eq!(albums, vec![Album::new(1, 2, "b"), Album::new(1, 1, "a")]);
}

#[actix_web::test]
async fn find_is_not_shadowed_by_id_route() {
    let client = answering(
        UpstreamMethod::Get,
        "https://jsonplaceholder.typicode.com/users?name=Leanne+Graham",
        UpstreamResponse::ok("[]"),
    );
    let res = call::<User>(
        client,
        MockDocumentStore::new(),
        TestRequest::get().uri("/users/find?name=Leanne%20Graham"),
    )
    .await;
    assert_eq!(res.status(), StatusCode::OK);
    let users: Vec<User> = actix_test::read_body_json(res).await;
    assert!(users.is_empty());
}

#[actix_web::test]
async fn find_without_filter_is_invalid_request() {
    let res = call::<Album>(
        silent_client(),
        MockDocumentStore::new(),
        TestRequest::get().uri("/albums/find?name=x"),
    )
    .await;
    let body = error_body(res).await;
    assert_eq!(
        body,
        json!({
            "error": "InvalidRequestError",
            "message": "Required request parameter 'title' is not present"
        })
    );
}

#[rstest]
#[case::get("/albums/abc")]
#[case::save("/albums/abc/save")]
#[case::beyond_i32("/albums/3000000000")]
#[case::save_beyond_i32("/albums/3000000000/save")]
#[actix_web::test]
async fn non_integer_id_is_invalid_request(#[case] uri: &str) {
    let res = call::<Album>(silent_client(), MockDocumentStore::new(), TestRequest::get().uri(uri)).await;
    let body = error_body(res).await;
    assert_eq!(body["error"], "InvalidRequestError");
}

#[actix_web::test]
async fn empty_upstream_body_is_reported() {
    let client = answering(
        UpstreamMethod::Get,
        "https://jsonplaceholder.typicode.com/users/42",
        UpstreamResponse::empty(),
    );
    let res = call::<User>(client, MockDocumentStore::new(), TestRequest::get().uri("/users/42")).await;
    let body = error_body(res).await;
    assert_eq!(
        body,
        json!({
            "error": "UpstreamEmptyBodyError",
            "message": "Error sending User API request. Request body is empty."
        })
    );
}

#[actix_web::test]
async fn create_answers_with_request_body() {
    let client = answering(
        UpstreamMethod::Post,
        "https://jsonplaceholder.typicode.com/albums",
        UpstreamResponse::ok(r#"{"id":101}"#),
    );
    let res = call::<Album>(
        client,
        MockDocumentStore::new(),
        TestRequest::post()
            .uri("/albums/create")
            .set_json(json!({ "userId": 3, "id": 7, "title": "mine" })),
    )
    .await;
    assert_eq!(res.status(), StatusCode::OK);
    let album: Album = actix_test::read_body_json(res).await;
    assert_eq!(album, Album::new(3, 7, "mine"));
}

#[rstest]
#[case::explicit_nulls(json!({ "userId": null, "id": 7, "title": null }))]
#[case::absent_fields(json!({ "id": 7 }))]
#[actix_web::test]
async fn create_echoes_null_fields(#[case] payload: Value) {
    let mut client = MockUpstreamClient::new();
    client
        .expect_send()
        .withf(|request| {
            request.method == UpstreamMethod::Post
                && request.body == Some(json!({ "userId": null, "id": 7, "title": null }))
        })
        .times(1)
        .return_once(|_| Ok(UpstreamResponse::ok(r#"{"id":101}"#)));
    let res = call::<Album>(
        client,
        MockDocumentStore::new(),
        TestRequest::post().uri("/albums/create").set_json(payload),
    )
    .await;
    assert_eq!(res.status(), StatusCode::OK);
    let body: Value = actix_test::read_body_json(res).await;
    assert_eq!(body, json!({ "userId": null, "id": 7, "title": null }));
}

#[actix_web::test]
async fn create_user_keeps_null_nested_records() {
    let client = answering(
        UpstreamMethod::Post,
        "https://jsonplaceholder.typicode.com/users",
        UpstreamResponse::ok(r#"{"id":11}"#),
    );
    let res = call::<User>(
        client,
        MockDocumentStore::new(),
        TestRequest::post()
            .uri("/users/create")
            .set_json(json!({ "name": "Ervin Howell", "address": null })),
    )
    .await;
    assert_eq!(res.status(), StatusCode::OK);
    let body: Value = actix_test::read_body_json(res).await;
    assert_eq!(body["name"], "Ervin Howell");
    assert_eq!(body["id"], Value::Null);
    assert_eq!(body["address"], Value::Null);
    assert_eq!(body["company"], Value::Null);
}

#[actix_web::test]
async fn upstream_null_field_is_passed_through() {
    let client = answering(
        UpstreamMethod::Get,
        "https://jsonplaceholder.typicode.com/albums/12",
        UpstreamResponse::ok(r#"{"userId":2,"id":12,"title":null}"#),
    );
    let res = call::<Album>(client, MockDocumentStore::new(), TestRequest::get().uri("/albums/12")).await;
    assert_eq!(res.status(), StatusCode::OK);
    let body: Value = actix_test::read_body_json(res).await;
    assert_eq!(body, json!({ "userId": 2, "id": 12, "title": null }));
}

#[actix_web::test]
async fn create_with_empty_echo_fails() {
    let client = answering(
        UpstreamMethod::Post,
        "https://jsonplaceholder.typicode.com/users",
        UpstreamResponse::empty(),
    );
    let res = call::<User>(
        client,
        MockDocumentStore::new(),
        TestRequest::post().uri("/users/create").set_json(json!({ "id": 5 })),
    )
    .await;
    let body = error_body(res).await;
    assert_eq!(
        body["message"],
        "Error sending create User API request. Request body is empty."
    );
}

#[actix_web::test]
async fn unreadable_body_is_invalid_request() {
    let res = call::<Album>(
        silent_client(),
        MockDocumentStore::new(),
        TestRequest::post()
            .uri("/albums/create")
            .insert_header(("content-type", "application/json"))
            .set_payload("{"),
    )
    .await;
    let body = error_body(res).await;
    assert_eq!(body["error"], "InvalidRequestError");
}

#[actix_web::test]
async fn update_puts_full_record_and_answers_empty() {
    let mut client = MockUpstreamClient::new();
    client
        .expect_send()
        .withf(|request| {
            request.method == UpstreamMethod::Put
                && request.url.as_str() == "https://jsonplaceholder.typicode.com/albums/1"
                && request.body == Some(json!({ "userId": 1, "id": 1, "title": "renamed" }))
        })
        .times(1)
        .return_once(|_| Ok(UpstreamResponse::empty()));
    let res = call::<Album>(
        client,
        MockDocumentStore::new(),
        TestRequest::put()
            .uri("/albums/update")
            .set_json(json!({ "userId": 1, "id": 1, "title": "renamed" })),
    )
    .await;
    assert_eq!(res.status(), StatusCode::OK);
    assert!(actix_test::read_body(res).await.is_empty());
}

#[actix_web::test]
async fn delete_issues_one_delete() {
    let client = answering(
        UpstreamMethod::Delete,
        "https://jsonplaceholder.typicode.com/users/1",
        UpstreamResponse::ok("{}"),
    );
    let res = call::<User>(
        client,
        MockDocumentStore::new(),
        TestRequest::delete().uri("/users/1/delete"),
    )
    .await;
    assert_eq!(res.status(), StatusCode::OK);
    assert!(actix_test::read_body(res).await.is_empty());
}

#[actix_web::test]
async fn transport_failure_is_reported() {
    let mut client = MockUpstreamClient::new();
    client.expect_send().times(1).return_once(|_| {
        Err(crate::domain::ports::UpstreamClientError::transport(
            "connection refused",
        ))
    });
    let res = call::<Album>(client, MockDocumentStore::new(), TestRequest::get().uri("/albums")).await;
    let body = error_body(res).await;
    assert_eq!(body["error"], "UpstreamTransportError");
    assert_eq!(
        body["message"],
        "upstream transport failed: connection refused"
    );
}

#[actix_web::test]
async fn save_writes_both_documents() {
    let client = answering(
        UpstreamMethod::Get,
        "https://jsonplaceholder.typicode.com/albums/11",
        UpstreamResponse::ok(r#"{"userId":1,"id":11,"title":"mock title"}"#),
    );
    let mut store = MockDocumentStore::new();
    store
        .expect_write_document()
        .withf(|path, contents| {
            path == Path::new("albums/json/11.json")
                && contents == r#"{"userId":1,"id":11,"title":"mock title"}"#
        })
        .times(1)
        .returning(|_, _| Ok(()));
    store
        .expect_write_document()
        .withf(|path, _| path == Path::new("albums/xml/11.xml"))
        .times(1)
        .returning(|_, _| Ok(()));

    let res = call::<Album>(client, store, TestRequest::get().uri("/albums/11/save")).await;
    assert_eq!(res.status(), StatusCode::OK);
    let album: Album = actix_test::read_body_json(res).await;
    assert_eq!(album, Album::new(1, 11, "mock title"));
}

#[actix_web::test]
async fn save_failure_is_persistence_error() {
    let client = answering(
        UpstreamMethod::Get,
        "https://jsonplaceholder.typicode.com/albums/11",
        UpstreamResponse::ok(r#"{"userId":1,"id":11,"title":"mock title"}"#),
    );
    let mut store = MockDocumentStore::new();
    store
        .expect_write_document()
        .times(1)
        .returning(|path, _| Err(DocumentStoreError::io(path.to_path_buf(), "denied")));

    let res = call::<Album>(client, store, TestRequest::get().uri("/albums/11/save")).await;
    let body = error_body(res).await;
    assert_eq!(body["error"], "PersistenceError");
    assert!(
        body["message"]
            .as_str()
            .is_some_and(|message| message.starts_with("Error saving Album JSON file"))
    );
}
