//! Search and category pages

use axum::extract::{Path, Query, State};
use maud::{html, Markup};
use serde::Deserialize;
use tower_cookies::Cookies;

use crate::{error::AppResult, AppState};

use super::{pages, Flash};

#[derive(Debug, Deserialize)]
pub struct SearchParams {
    #[serde(default)]
    pub q: String,
}

/// Search form and results page. An empty query renders the bare form with
/// no results.
pub async fn search(
    State(state): State<AppState>,
    cookies: Cookies,
    Query(params): Query<SearchParams>,
) -> AppResult<Markup> {
    let results = state.services.catalog.search(&params.q).await?;
    let flash = Flash::take(&cookies);

    Ok(pages::layout(
        "Search",
        flash,
        html! {
            form method="get" action="/search" {
                input type="text" name="q" value=(params.q) placeholder="Title, author or ISBN";
                button type="submit" { "Search" }
            }
            @if !params.q.is_empty() {
                h2 { "Results for \"" (params.q) "\"" }
                @if results.is_empty() {
                    p { "No books found." }
                } @else {
                    (pages::book_table(&results, false))
                }
            }
        },
    ))
}

/// Distinct category list page
pub async fn categories(State(state): State<AppState>, cookies: Cookies) -> AppResult<Markup> {
    let categories = state.services.catalog.categories().await?;
    let flash = Flash::take(&cookies);

    Ok(pages::layout(
        "Categories",
        flash,
        html! {
            @if categories.is_empty() {
                p { "No categories yet." }
            } @else {
                ul {
                    @for category in &categories {
                        li {
                            a href={ "/category/" (urlencoding::encode(category)) } { (category) }
                        }
                    }
                }
            }
        },
    ))
}

/// Books filed under one category (exact, case-sensitive match)
pub async fn books_by_category(
    State(state): State<AppState>,
    cookies: Cookies,
    Path(category): Path<String>,
) -> AppResult<Markup> {
    let books = state.services.catalog.books_by_category(&category).await?;
    let flash = Flash::take(&cookies);

    Ok(pages::layout(
        &format!("Category: {}", category),
        flash,
        html! {
            @if books.is_empty() {
                p { "No books in this category." }
            } @else {
                (pages::book_table(&books, false))
            }
        },
    ))
}
