//! Shared test setup helpers

#![allow(dead_code)]

use std::sync::Arc;

use axum::{
    body::Body,
    http::{header, Request, Response},
    Router,
};
use http_body_util::BodyExt;
use librarium::{
    config::{AppConfig, DatabaseConfig, LoggingConfig, ServerConfig},
    create_router,
    repository::Repository,
    services::Services,
    AppState, MIGRATOR,
};
use sqlx::{
    sqlite::{SqliteConnectOptions, SqlitePoolOptions},
    Pool, Sqlite,
};
use tower::ServiceExt;

/// In-memory SQLite pool with the schema applied. A single connection keeps
/// every query on the same in-memory database.
pub async fn setup_test_db() -> Pool<Sqlite> {
    let options = SqliteConnectOptions::new()
        .filename(":memory:")
        .foreign_keys(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect_with(options)
        .await
        .expect("Failed to open in-memory database");

    MIGRATOR
        .run(&pool)
        .await
        .expect("Failed to run migrations");

    pool
}

/// Application router over the given pool
pub fn test_app(pool: Pool<Sqlite>) -> Router {
    let repository = Repository::new(pool);
    let services = Services::new(repository);

    let config = AppConfig {
        server: ServerConfig::default(),
        database: DatabaseConfig::default(),
        logging: LoggingConfig::default(),
    };

    create_router(AppState {
        config: Arc::new(config),
        services: Arc::new(services),
    })
}

/// Insert a book directly, returning its id
pub async fn insert_book(
    pool: &Pool<Sqlite>,
    title: &str,
    author: &str,
    category: &str,
    year: i64,
    isbn: &str,
) -> i64 {
    sqlx::query_scalar::<_, i64>(
        r#"
        INSERT INTO books (title, author, category, year, isbn, is_borrowed)
        VALUES (?, ?, ?, ?, ?, 0)
        RETURNING id
        "#,
    )
    .bind(title)
    .bind(author)
    .bind(category)
    .bind(year)
    .bind(isbn)
    .fetch_one(pool)
    .await
    .expect("Failed to insert book")
}

pub fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .uri(uri)
        .body(Body::empty())
        .expect("Failed to build request")
}

pub fn post(uri: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .body(Body::empty())
        .expect("Failed to build request")
}

pub fn post_form(uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(body.to_string()))
        .expect("Failed to build request")
}

/// Drive a single request through the router
pub async fn send(app: &Router, request: Request<Body>) -> Response<Body> {
    app.clone()
        .oneshot(request)
        .await
        .expect("Failed to send request")
}

/// Collect a response body into a string
pub async fn body_text(response: Response<Body>) -> String {
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("Failed to read body")
        .to_bytes();

    String::from_utf8(bytes.to_vec()).expect("Body is not valid UTF-8")
}

/// The Location header of a redirect response
pub fn location(response: &Response<Body>) -> &str {
    response
        .headers()
        .get(header::LOCATION)
        .expect("Missing Location header")
        .to_str()
        .expect("Invalid Location header")
}

/// The Set-Cookie header, empty string if absent
pub fn set_cookie(response: &Response<Body>) -> String {
    response
        .headers()
        .get(header::SET_COOKIE)
        .map(|value| value.to_str().expect("Invalid Set-Cookie header").to_string())
        .unwrap_or_default()
}

pub async fn book_count(pool: &Pool<Sqlite>) -> i64 {
    sqlx::query_scalar("SELECT COUNT(*) FROM books")
        .fetch_one(pool)
        .await
        .expect("Failed to count books")
}

pub async fn record_count(pool: &Pool<Sqlite>, book_id: i64) -> i64 {
    sqlx::query_scalar("SELECT COUNT(*) FROM borrow_records WHERE book_id = ?")
        .bind(book_id)
        .fetch_one(pool)
        .await
        .expect("Failed to count borrow records")
}

pub async fn is_borrowed(pool: &Pool<Sqlite>, book_id: i64) -> bool {
    sqlx::query_scalar("SELECT is_borrowed FROM books WHERE id = ?")
        .bind(book_id)
        .fetch_one(pool)
        .await
        .expect("Failed to read is_borrowed")
}

/// Core invariant: the flag agrees with the existence of an open record,
/// and there is never more than one open record per book.
pub async fn assert_flag_agrees(pool: &Pool<Sqlite>, book_id: i64) {
    let flagged = is_borrowed(pool, book_id).await;
    let open: i64 = sqlx::query_scalar(
        "SELECT COUNT(*) FROM borrow_records WHERE book_id = ? AND return_date IS NULL",
    )
    .bind(book_id)
    .fetch_one(pool)
    .await
    .expect("Failed to count open records");

    assert!(open <= 1, "book {} has {} open borrow records", book_id, open);
    assert_eq!(
        flagged,
        open == 1,
        "book {}: is_borrowed = {} but open records = {}",
        book_id,
        flagged,
        open
    );
}
