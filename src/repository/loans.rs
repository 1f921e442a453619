//! Loans repository: borrow/return transactions and history queries

use chrono::Utc;
use sqlx::{Pool, Sqlite};

use crate::{
    error::{AppError, AppResult},
    models::loan::{BorrowOutcome, HistoryEntry, ReturnOutcome},
};

#[derive(Clone)]
pub struct LoansRepository {
    pool: Pool<Sqlite>,
}

impl LoansRepository {
    pub fn new(pool: Pool<Sqlite>) -> Self {
        Self { pool }
    }

    /// Borrow a book: flip the flag and insert an open borrow record in a
    /// single transaction so the two writes are never observable apart.
    pub async fn borrow(&self, book_id: i64) -> AppResult<BorrowOutcome> {
        let now = Utc::now();
        let mut tx = self.pool.begin().await?;

        let is_borrowed =
            sqlx::query_scalar::<_, bool>("SELECT is_borrowed FROM books WHERE id = ?")
                .bind(book_id)
                .fetch_optional(&mut *tx)
                .await?
                .ok_or_else(|| AppError::NotFound(format!("Book with id {} not found", book_id)))?;

        if is_borrowed {
            return Ok(BorrowOutcome::AlreadyBorrowed);
        }

        sqlx::query("UPDATE books SET is_borrowed = 1 WHERE id = ?")
            .bind(book_id)
            .execute(&mut *tx)
            .await?;

        sqlx::query(
            "INSERT INTO borrow_records (book_id, borrow_date, return_date) VALUES (?, ?, NULL)",
        )
        .bind(book_id)
        .bind(now)
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;
        Ok(BorrowOutcome::Borrowed)
    }

    /// Return a book: clear the flag and stamp the open borrow record in a
    /// single transaction. A flagged book without an open record is logged
    /// and tolerated.
    pub async fn return_book(&self, book_id: i64) -> AppResult<ReturnOutcome> {
        let now = Utc::now();
        let mut tx = self.pool.begin().await?;

        let is_borrowed =
            sqlx::query_scalar::<_, bool>("SELECT is_borrowed FROM books WHERE id = ?")
                .bind(book_id)
                .fetch_optional(&mut *tx)
                .await?
                .ok_or_else(|| AppError::NotFound(format!("Book with id {} not found", book_id)))?;

        if !is_borrowed {
            return Ok(ReturnOutcome::NotBorrowed);
        }

        sqlx::query("UPDATE books SET is_borrowed = 0 WHERE id = ?")
            .bind(book_id)
            .execute(&mut *tx)
            .await?;

        let updated = sqlx::query(
            "UPDATE borrow_records SET return_date = ? WHERE book_id = ? AND return_date IS NULL",
        )
        .bind(now)
        .bind(book_id)
        .execute(&mut *tx)
        .await?
        .rows_affected();

        if updated == 0 {
            tracing::warn!(
                book_id,
                "book was flagged as borrowed but had no open borrow record"
            );
        }

        tx.commit().await?;
        Ok(ReturnOutcome::Returned)
    }

    /// All borrow records with their book, most recent first
    pub async fn history(&self) -> AppResult<Vec<HistoryEntry>> {
        let entries = sqlx::query_as::<_, HistoryEntry>(
            r#"
            SELECT r.id, r.book_id, b.title, b.isbn, r.borrow_date, r.return_date
            FROM borrow_records r
            JOIN books b ON b.id = r.book_id
            ORDER BY r.borrow_date DESC, r.id DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(entries)
    }

    /// Count open borrow records for a book
    pub async fn count_open(&self, book_id: i64) -> AppResult<i64> {
        let count = sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*) FROM borrow_records WHERE book_id = ? AND return_date IS NULL",
        )
        .bind(book_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(count)
    }
}
