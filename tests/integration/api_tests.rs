//! API tests driving the full router in-process on the memory store

use axum::{
    body::Body,
    http::{Method, Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use tower::ServiceExt;

use biblio_server::{
    api::create_router, config::StoreBackend, repository::Repository, AppConfig, AppState,
};

const BASE: &str = "/api/v1";
const START: &str = "2024-01-01T00:00:00.000000";
const END: &str = "2024-12-31T23:59:59.999999";

fn app() -> Router {
    let mut config = AppConfig::default();
    config.database.backend = StoreBackend::Memory;
    create_router(AppState::new(config, Repository::in_memory()))
}

async fn send(app: &Router, method: Method, path: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder()
        .method(method)
        .uri(format!("{}{}", BASE, path));
    let request = match body {
        Some(body) => builder
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, value)
}

async fn create_book(app: &Router, name: &str, author: &str) -> Value {
    let (status, body) = send(
        app,
        Method::POST,
        "/book/create",
        Some(json!({ "name": name, "author": author })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    body
}

async fn create_reader(app: &Router, first_name: &str, last_name: &str) -> Value {
    let (status, body) = send(
        app,
        Method::POST,
        "/reader/create",
        Some(json!({ "firstName": first_name, "lastName": last_name })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    body
}

async fn create_event(
    app: &Router,
    reader: i64,
    book: i64,
    event_type: &str,
    at: &str,
) -> (StatusCode, Value) {
    send(
        app,
        Method::POST,
        "/event/create",
        Some(json!({
            "idReader": reader,
            "idBook": book,
            "eventType": event_type,
            "eventDatetime": at,
        })),
    )
    .await
}

fn window(path: &str, start: &str, end: &str) -> String {
    format!("{}?start={}&end={}", path, start, end)
}

#[tokio::test]
async fn test_health_check() {
    let (status, body) = send(&app(), Method::GET, "/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["store"], "memory");
}

#[tokio::test]
async fn test_book_crud() {
    let app = app();
    let created = create_book(&app, "Dune", "Herbert").await;
    assert_eq!(created["id"], 1);
    assert_eq!(created["name"], "Dune");

    let (status, updated) = send(
        &app,
        Method::PUT,
        "/book/update",
        Some(json!({ "id": 1, "name": "Dune Messiah", "author": "Frank Herbert" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated, json!({ "id": 1, "name": "Dune Messiah", "author": "Frank Herbert" }));

    let (status, books) = send(&app, Method::GET, "/book/", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(books, json!([updated]));
}

#[tokio::test]
async fn test_create_ignores_client_id() {
    let app = app();
    let (status, body) = send(
        &app,
        Method::POST,
        "/book/create",
        Some(json!({ "id": 77, "name": "Emma", "author": "Austen" })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["id"], 1);
}

#[tokio::test]
async fn test_update_unknown_ids_are_bad_requests() {
    let app = app();
    let (status, body) = send(
        &app,
        Method::PUT,
        "/book/update",
        Some(json!({ "id": 999999, "name": "x", "author": "y" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "NoSuchData");

    let (status, _) = send(
        &app,
        Method::PUT,
        "/reader/update",
        Some(json!({ "id": 999999, "firstName": "x", "lastName": "y" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_reader_crud() {
    let app = app();
    create_reader(&app, "Ada", "Lovelace").await;
    let (status, updated) = send(
        &app,
        Method::PUT,
        "/reader/update",
        Some(json!({ "id": 1, "firstName": "Augusta", "lastName": "King" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["firstName"], "Augusta");

    let (_, readers) = send(&app, Method::GET, "/reader/", None).await;
    assert_eq!(readers, json!([{ "id": 1, "firstName": "Augusta", "lastName": "King" }]));
}

#[tokio::test]
async fn test_event_types_listing() {
    let (status, body) = send(&app(), Method::GET, "/event/", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([{ "name": "TAKE_BOOK" }, { "name": "RETURN_BOOK" }]));
}

#[tokio::test]
async fn test_event_round_trips_timestamp() {
    let app = app();
    create_reader(&app, "Ada", "Lovelace").await;
    create_book(&app, "Dune", "Herbert").await;

    let (status, body) = create_event(&app, 1, 1, "TAKE_BOOK", "2024-03-01T10:15:30.000123").await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(
        body,
        json!({
            "id": 1,
            "idReader": 1,
            "idBook": 1,
            "eventType": "TAKE_BOOK",
            "eventDatetime": "2024-03-01T10:15:30.000123",
        })
    );
}

#[tokio::test]
async fn test_event_rejections() {
    let app = app();
    create_reader(&app, "Ada", "Lovelace").await;
    create_book(&app, "Dune", "Herbert").await;

    let (status, _) = create_event(&app, 2, 1, "TAKE_BOOK", START).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = create_event(&app, 1, 2, "TAKE_BOOK", START).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, body) = create_event(&app, 1, 1, "LOSE_BOOK", START).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "UnsupportedValue");

    let (status, body) = create_event(&app, 1, 1, "TAKE_BOOK", "2024-03-01 10:15").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "BadValue");
}

#[tokio::test]
async fn test_rankings_scenario() {
    let app = app();
    create_reader(&app, "Alice", "A").await;
    create_reader(&app, "Bob", "B").await;
    create_book(&app, "X", "Xavier").await;
    create_book(&app, "Y", "Yves").await;

    let events = [
        (1, 1, "TAKE_BOOK", "2024-02-01T10:00:00.000000"),
        (1, 1, "RETURN_BOOK", "2024-02-02T10:00:00.000000"),
        (2, 1, "TAKE_BOOK", "2024-02-03T10:00:00.000000"),
        (2, 1, "RETURN_BOOK", "2024-02-04T10:00:00.000000"),
        (2, 2, "TAKE_BOOK", "2024-02-05T10:00:00.000000"),
        (2, 2, "RETURN_BOOK", "2024-02-06T10:00:00.000000"),
    ];
    for (reader, book, event_type, at) in events {
        let (status, _) = create_event(&app, reader, book, event_type, at).await;
        assert_eq!(status, StatusCode::CREATED);
    }

    let (status, book) = send(&app, Method::GET, &window("/book/popular", START, END), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(book["name"], "X");

    let (status, reader) = send(&app, Method::GET, &window("/reader/most", START, END), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(reader["firstName"], "Bob");
}

#[tokio::test]
async fn test_window_bounds_are_exclusive() {
    let app = app();
    create_reader(&app, "Alice", "A").await;
    create_book(&app, "Early", "Zola").await;
    create_book(&app, "Inside", "Austen").await;

    let start = "2024-05-01T00:00:00.000000";
    let end = "2024-05-31T00:00:00.000000";
    create_event(&app, 1, 1, "TAKE_BOOK", start).await;
    create_event(&app, 1, 1, "RETURN_BOOK", end).await;

    let (status, _) = send(&app, Method::GET, &window("/book/popular", start, end), None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    create_event(&app, 1, 2, "TAKE_BOOK", "2024-05-15T12:00:00.000000").await;
    let (status, book) = send(&app, Method::GET, &window("/book/popular", start, end), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(book["name"], "Inside");
}

#[tokio::test]
async fn test_popular_tie_prefers_smaller_author() {
    let app = app();
    create_reader(&app, "Alice", "A").await;
    create_book(&app, "Germinal", "Zola").await;
    create_book(&app, "Emma", "Austen").await;
    create_event(&app, 1, 1, "TAKE_BOOK", "2024-06-01T10:00:00.000000").await;
    create_event(&app, 1, 2, "TAKE_BOOK", "2024-06-02T10:00:00.000000").await;

    let (status, book) = send(&app, Method::GET, &window("/book/popular", START, END), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(book["author"], "Austen");
}

#[tokio::test]
async fn test_ranking_empty_store() {
    let app = app();
    let (status, _) = send(&app, Method::GET, &window("/book/popular", START, END), None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = send(&app, Method::GET, &window("/reader/most", START, END), None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_most_active_without_returns_is_first_reader() {
    let app = app();
    create_reader(&app, "Alice", "A").await;
    create_reader(&app, "Bob", "B").await;
    create_book(&app, "X", "Xavier").await;
    create_event(&app, 2, 1, "TAKE_BOOK", "2024-06-01T10:00:00.000000").await;

    let (status, reader) = send(&app, Method::GET, &window("/reader/most", START, END), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(reader["firstName"], "Alice");
}

#[tokio::test]
async fn test_ranking_window_parameters() {
    let app = app();
    let (status, body) = send(&app, Method::GET, "/book/popular?start=2024-01-01T00:00", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["message"].as_str().unwrap().contains("end"));

    let (status, _) = send(&app, Method::GET, "/reader/most?end=2024-01-01T00:00", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = send(&app, Method::GET, "/reader/most?start=soon&end=later", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    create_reader(&app, "Alice", "A").await;
    let (status, _) = send(
        &app,
        Method::GET,
        "/reader/most?start=2024-01-01T00:00&end=2024-02-01T00:00:00",
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn test_wrong_typed_body_field_is_bad_request() {
    let app = app();
    create_reader(&app, "Ada", "Lovelace").await;
    create_book(&app, "Dune", "Herbert").await;

    let (status, body) = send(
        &app,
        Method::POST,
        "/event/create",
        Some(json!({
            "idReader": "one",
            "idBook": 1,
            "eventType": "TAKE_BOOK",
            "eventDatetime": START,
        })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "BadValue");
}

#[tokio::test]
async fn test_update_without_id_is_bad_request() {
    let app = app();
    create_book(&app, "Dune", "Herbert").await;

    let (status, body) = send(
        &app,
        Method::PUT,
        "/book/update",
        Some(json!({ "name": "Dune Messiah", "author": "Herbert" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "BadValue");

    let (status, _) = send(
        &app,
        Method::PUT,
        "/reader/update",
        Some(json!({ "firstName": "Ada", "lastName": "Lovelace" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_body_without_json_content_type_is_bad_request() {
    let request = Request::builder()
        .method(Method::POST)
        .uri(format!("{}/book/create", BASE))
        .body(Body::from(json!({ "name": "Dune", "author": "Herbert" }).to_string()))
        .unwrap();

    let response = app().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body["code"], 18);
}

#[tokio::test]
async fn test_malformed_json_is_bad_request() {
    let request = Request::builder()
        .method(Method::POST)
        .uri(format!("{}/reader/create", BASE))
        .header("content-type", "application/json")
        .body(Body::from("{\"firstName\": "))
        .unwrap();

    let response = app().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}
