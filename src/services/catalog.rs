//! Catalog management service

use crate::{
    error::AppResult,
    models::book::{Book, NewBook},
    repository::Repository,
};

#[derive(Clone)]
pub struct CatalogService {
    repository: Repository,
}

impl CatalogService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// List the whole catalog
    pub async fn list_books(&self) -> AppResult<Vec<Book>> {
        self.repository.books.list().await
    }

    /// Register a new book
    pub async fn add_book(&self, book: NewBook) -> AppResult<i64> {
        self.repository.books.insert(&book).await
    }

    /// Delete a book and all of its borrow records, returning the deleted
    /// book so its title can be reported back.
    pub async fn delete_book(&self, book_id: i64) -> AppResult<Book> {
        let book = self.repository.books.get_by_id(book_id).await?;
        self.repository.books.delete(book_id).await?;
        Ok(book)
    }

    /// Free-text search over title, author and isbn
    pub async fn search(&self, query: &str) -> AppResult<Vec<Book>> {
        self.repository.books.search(query).await
    }

    /// Distinct categories in the catalog
    pub async fn categories(&self) -> AppResult<Vec<String>> {
        self.repository.books.categories().await
    }

    /// Books filed under the given category
    pub async fn books_by_category(&self, category: &str) -> AppResult<Vec<Book>> {
        self.repository.books.by_category(category).await
    }
}
