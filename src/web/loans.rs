//! Borrow and return handlers

use axum::{
    extract::{Path, State},
    response::Redirect,
};
use tower_cookies::Cookies;

use crate::{
    error::AppResult,
    models::loan::{BorrowOutcome, ReturnOutcome},
    AppState,
};

use super::Flash;

/// Borrow a book, then redirect to the catalog
pub async fn borrow(
    State(state): State<AppState>,
    cookies: Cookies,
    Path(book_id): Path<i64>,
) -> AppResult<Redirect> {
    match state.services.loans.borrow(book_id).await? {
        BorrowOutcome::Borrowed => Flash::success(&cookies, "Book borrowed successfully!"),
        BorrowOutcome::AlreadyBorrowed => Flash::danger(&cookies, "Book is already borrowed."),
    }

    Ok(Redirect::to("/"))
}

/// Return a book, then redirect to the catalog
pub async fn return_book(
    State(state): State<AppState>,
    cookies: Cookies,
    Path(book_id): Path<i64>,
) -> AppResult<Redirect> {
    match state.services.loans.return_book(book_id).await? {
        ReturnOutcome::Returned => Flash::success(&cookies, "Book returned successfully!"),
        ReturnOutcome::NotBorrowed => Flash::danger(&cookies, "Book is not currently borrowed."),
    }

    Ok(Redirect::to("/"))
}
