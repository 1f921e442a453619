//! Shared page layout and fragments

use axum::http::StatusCode;
use maud::{html, Markup, DOCTYPE};

use crate::models::book::Book;

use super::Flash;

/// Base layout: navigation, optional flash notice, page content
pub fn layout(title: &str, flash: Option<Flash>, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title { (title) " - Librarium" }
                link rel="stylesheet" href="/static/style.css";
            }
            body {
                nav {
                    a href="/" { "Catalog" }
                    a href="/add_book" { "Add Book" }
                    a href="/search" { "Search" }
                    a href="/categories" { "Categories" }
                    a href="/history" { "History" }
                }
                @if let Some(flash) = flash {
                    div class={ "flash " (flash.level.css_class()) } { (flash.message) }
                }
                main {
                    h1 { (title) }
                    (content)
                }
            }
        }
    }
}

/// Catalog table used by the index, search and category pages. Action links
/// (borrow/return/delete) are only rendered on the main catalog page.
pub fn book_table(books: &[Book], with_actions: bool) -> Markup {
    html! {
        table {
            thead {
                tr {
                    th { "Title" }
                    th { "Author" }
                    th { "Category" }
                    th { "Year" }
                    th { "ISBN" }
                    th { "Status" }
                    @if with_actions { th { "Actions" } }
                }
            }
            tbody {
                @for book in books {
                    tr {
                        td { (book.title) }
                        td { (book.author) }
                        td {
                            a href={ "/category/" (urlencoding::encode(&book.category)) } {
                                (book.category)
                            }
                        }
                        td { (book.year) }
                        td { (book.isbn) }
                        td {
                            @if book.is_borrowed {
                                span class="status-borrowed" { "Borrowed" }
                            } @else {
                                span class="status-available" { "Available" }
                            }
                        }
                        @if with_actions {
                            td {
                                @if book.is_borrowed {
                                    a href={ "/return/" (book.id) } { "Return" }
                                } @else {
                                    a href={ "/borrow/" (book.id) } { "Borrow" }
                                }
                                form method="post" action={ "/delete_book/" (book.id) } class="inline" {
                                    button type="submit" { "Delete" }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

/// Standalone error page rendered by `AppError`
pub fn error_page(status: StatusCode, message: &str) -> Markup {
    let reason = status.canonical_reason().unwrap_or("Error");

    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                title { (status.as_u16()) " " (reason) " - Librarium" }
                link rel="stylesheet" href="/static/style.css";
            }
            body {
                main {
                    h1 { (status.as_u16()) " " (reason) }
                    p { (message) }
                    p { a href="/" { "Back to catalog" } }
                }
            }
        }
    }
}
