//! Librarium - Library Book Tracking
//!
//! A small Rust web application for keeping track of a library's books:
//! register books, search the catalog, borrow and return items, and review
//! the borrowing history. All pages are rendered server-side.

use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};
use tower_cookies::CookieManagerLayer;
use tower_http::{services::ServeDir, trace::TraceLayer};

pub mod config;
pub mod error;
pub mod models;
pub mod repository;
pub mod services;
pub mod web;

pub use config::AppConfig;
pub use error::{AppError, AppResult};

/// Embedded database migrations, applied at startup and by tests.
pub static MIGRATOR: sqlx::migrate::Migrator = sqlx::migrate!();

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub services: Arc<services::Services>,
}

/// Create the application router with all routes
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Catalog
        .route("/", get(web::catalog::index))
        .route(
            "/add_book",
            get(web::catalog::add_book_form).post(web::catalog::add_book),
        )
        .route("/delete_book/:book_id", post(web::catalog::delete_book))
        // Borrowing
        .route("/borrow/:book_id", get(web::loans::borrow))
        .route("/return/:book_id", get(web::loans::return_book))
        .route("/history", get(web::history::history))
        // Search and categories
        .route("/search", get(web::search::search))
        .route("/categories", get(web::search::categories))
        .route("/category/:category", get(web::search::books_by_category))
        // Health check
        .route("/health", get(web::health::health_check))
        // Static assets
        .nest_service("/static", ServeDir::new("static"))
        .layer(TraceLayer::new_for_http())
        .layer(CookieManagerLayer::new())
        .with_state(state)
}
