//! Borrow record model and related types

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Borrow record from database. A record with `return_date` unset is an open
/// borrow: the book is currently out on loan.
#[derive(Debug, Clone, FromRow)]
pub struct BorrowRecord {
    pub id: i64,
    pub book_id: i64,
    pub borrow_date: DateTime<Utc>,
    pub return_date: Option<DateTime<Utc>>,
}

/// Borrow record joined with its book, for the history page
#[derive(Debug, Clone, FromRow)]
pub struct HistoryEntry {
    pub id: i64,
    pub book_id: i64,
    pub title: String,
    pub isbn: String,
    pub borrow_date: DateTime<Utc>,
    pub return_date: Option<DateTime<Utc>>,
}

/// Result of a borrow attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BorrowOutcome {
    Borrowed,
    AlreadyBorrowed,
}

/// Result of a return attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReturnOutcome {
    Returned,
    NotBorrowed,
}
