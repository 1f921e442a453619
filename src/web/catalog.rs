//! Catalog pages: listing, add-book form, delete

use axum::{
    extract::{Path, State},
    response::Redirect,
    Form,
};
use maud::{html, Markup};
use tower_cookies::Cookies;

use crate::{
    error::{AppError, AppResult},
    models::book::AddBookForm,
    AppState,
};

use super::{pages, Flash};

/// Catalog listing page
pub async fn index(State(state): State<AppState>, cookies: Cookies) -> AppResult<Markup> {
    let books = state.services.catalog.list_books().await?;
    let flash = Flash::take(&cookies);

    Ok(pages::layout(
        "Catalog",
        flash,
        html! {
            @if books.is_empty() {
                p {
                    "No books in the catalog yet. "
                    a href="/add_book" { "Add the first one." }
                }
            } @else {
                (pages::book_table(&books, true))
            }
        },
    ))
}

/// Add-book form page
pub async fn add_book_form(cookies: Cookies) -> Markup {
    let flash = Flash::take(&cookies);

    pages::layout(
        "Add Book",
        flash,
        html! {
            form method="post" action="/add_book" {
                label { "Title" input type="text" name="title"; }
                label { "Author" input type="text" name="author"; }
                label { "Category" input type="text" name="category"; }
                label { "Year" input type="text" name="year"; }
                label { "ISBN" input type="text" name="isbn"; }
                button type="submit" { "Add Book" }
            }
        },
    )
}

/// Create a book from the submitted form, then redirect to the catalog.
/// Validation problems and duplicate isbns send the user back to the form
/// with a notice.
pub async fn add_book(
    State(state): State<AppState>,
    cookies: Cookies,
    Form(form): Form<AddBookForm>,
) -> AppResult<Redirect> {
    let book = match form.into_new_book() {
        Ok(book) => book,
        Err(message) => {
            Flash::danger(&cookies, message);
            return Ok(Redirect::to("/add_book"));
        }
    };

    match state.services.catalog.add_book(book).await {
        Ok(_) => {
            Flash::success(&cookies, "Book added successfully!");
            Ok(Redirect::to("/"))
        }
        Err(AppError::Conflict(message)) => {
            Flash::danger(&cookies, message);
            Ok(Redirect::to("/add_book"))
        }
        Err(e) => Err(e),
    }
}

/// Delete a book and its borrow records, then redirect to the catalog.
/// An unknown book is a 404; any other failure rolls back and is reported
/// as a notice.
pub async fn delete_book(
    State(state): State<AppState>,
    cookies: Cookies,
    Path(book_id): Path<i64>,
) -> AppResult<Redirect> {
    match state.services.catalog.delete_book(book_id).await {
        Ok(book) => {
            Flash::success(
                &cookies,
                format!("Book \"{}\" has been deleted successfully!", book.title),
            );
        }
        Err(e @ AppError::NotFound(_)) => return Err(e),
        Err(e) => {
            tracing::error!("Failed to delete book {}: {}", book_id, e);
            Flash::danger(&cookies, "Error deleting the book.");
        }
    }

    Ok(Redirect::to("/"))
}
