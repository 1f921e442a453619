//! Loan management service

use crate::{
    error::AppResult,
    models::loan::{BorrowOutcome, HistoryEntry, ReturnOutcome},
    repository::Repository,
};

#[derive(Clone)]
pub struct LoansService {
    repository: Repository,
}

impl LoansService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// Borrow a book
    pub async fn borrow(&self, book_id: i64) -> AppResult<BorrowOutcome> {
        self.repository.loans.borrow(book_id).await
    }

    /// Return a borrowed book
    pub async fn return_book(&self, book_id: i64) -> AppResult<ReturnOutcome> {
        self.repository.loans.return_book(book_id).await
    }

    /// Full borrowing history, most recent first
    pub async fn history(&self) -> AppResult<Vec<HistoryEntry>> {
        self.repository.loans.history().await
    }
}
