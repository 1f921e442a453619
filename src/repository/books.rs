//! Books repository for database operations

use sqlx::{Pool, Sqlite};

use crate::{
    error::{AppError, AppResult},
    models::book::{Book, NewBook},
};

#[derive(Clone)]
pub struct BooksRepository {
    pool: Pool<Sqlite>,
}

impl BooksRepository {
    pub fn new(pool: Pool<Sqlite>) -> Self {
        Self { pool }
    }

    /// List the whole catalog in storage order
    pub async fn list(&self) -> AppResult<Vec<Book>> {
        let books = sqlx::query_as::<_, Book>("SELECT * FROM books ORDER BY id")
            .fetch_all(&self.pool)
            .await?;

        Ok(books)
    }

    /// Get book by ID
    pub async fn get_by_id(&self, id: i64) -> AppResult<Book> {
        sqlx::query_as::<_, Book>("SELECT * FROM books WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Book with id {} not found", id)))
    }

    /// Insert a new book. A duplicate isbn maps to `AppError::Conflict` so
    /// callers can surface it as a form notice.
    pub async fn insert(&self, book: &NewBook) -> AppResult<i64> {
        let id = sqlx::query_scalar::<_, i64>(
            r#"
            INSERT INTO books (title, author, category, year, isbn, is_borrowed)
            VALUES (?, ?, ?, ?, ?, 0)
            RETURNING id
            "#,
        )
        .bind(&book.title)
        .bind(&book.author)
        .bind(&book.category)
        .bind(book.year)
        .bind(&book.isbn)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(db) if db.is_unique_violation() => {
                AppError::Conflict(format!("A book with ISBN {} already exists", book.isbn))
            }
            e => AppError::Database(e),
        })?;

        Ok(id)
    }

    /// Case-insensitive substring search over title, author and isbn.
    /// An empty query matches nothing.
    pub async fn search(&self, query: &str) -> AppResult<Vec<Book>> {
        if query.is_empty() {
            return Ok(Vec::new());
        }

        let pattern = format!("%{}%", query);
        let books = sqlx::query_as::<_, Book>(
            r#"
            SELECT * FROM books
            WHERE title LIKE ? OR author LIKE ? OR isbn LIKE ?
            ORDER BY id
            "#,
        )
        .bind(&pattern)
        .bind(&pattern)
        .bind(&pattern)
        .fetch_all(&self.pool)
        .await?;

        Ok(books)
    }

    /// Distinct category values across the catalog
    pub async fn categories(&self) -> AppResult<Vec<String>> {
        let categories =
            sqlx::query_scalar::<_, String>("SELECT DISTINCT category FROM books ORDER BY category")
                .fetch_all(&self.pool)
                .await?;

        Ok(categories)
    }

    /// Books whose category equals the given value exactly (case-sensitive)
    pub async fn by_category(&self, category: &str) -> AppResult<Vec<Book>> {
        let books = sqlx::query_as::<_, Book>("SELECT * FROM books WHERE category = ? ORDER BY id")
            .bind(category)
            .fetch_all(&self.pool)
            .await?;

        Ok(books)
    }

    /// Delete a book and its borrow records in one transaction. The schema
    /// also declares ON DELETE CASCADE; the explicit delete keeps the cascade
    /// visible at the application level.
    pub async fn delete(&self, id: i64) -> AppResult<()> {
        let mut tx = self.pool.begin().await?;

        sqlx::query("DELETE FROM borrow_records WHERE book_id = ?")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        sqlx::query("DELETE FROM books WHERE id = ?")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(())
    }
}
