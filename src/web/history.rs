//! Borrowing history page

use axum::extract::State;
use maud::{html, Markup};
use tower_cookies::Cookies;

use crate::{error::AppResult, AppState};

use super::{pages, Flash};

const DATE_FORMAT: &str = "%Y-%m-%d %H:%M";

/// Full borrowing history, most recent first
pub async fn history(State(state): State<AppState>, cookies: Cookies) -> AppResult<Markup> {
    let entries = state.services.loans.history().await?;
    let flash = Flash::take(&cookies);

    Ok(pages::layout(
        "Borrowing History",
        flash,
        html! {
            @if entries.is_empty() {
                p { "No borrowing activity yet." }
            } @else {
                table {
                    thead {
                        tr {
                            th { "Book" }
                            th { "ISBN" }
                            th { "Borrowed" }
                            th { "Returned" }
                        }
                    }
                    tbody {
                        @for entry in &entries {
                            tr {
                                td { (entry.title) }
                                td { (entry.isbn) }
                                td { (entry.borrow_date.format(DATE_FORMAT)) }
                                td {
                                    @if let Some(returned) = entry.return_date {
                                        (returned.format(DATE_FORMAT))
                                    } @else {
                                        span class="status-borrowed" { "Out on loan" }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        },
    ))
}
