//! Book (catalog entry) model and related types

use serde::Deserialize;
use sqlx::FromRow;
use validator::Validate;

/// Book model from database
#[derive(Debug, Clone, FromRow)]
pub struct Book {
    pub id: i64,
    pub title: String,
    pub author: String,
    pub category: String,
    pub year: i64,
    pub isbn: String,
    pub is_borrowed: bool,
}

/// Raw add-book form submission. All fields arrive as text; `year` is parsed
/// separately so a bad value comes back as a form notice instead of a
/// database error.
#[derive(Debug, Deserialize, Validate)]
pub struct AddBookForm {
    #[validate(length(min = 1, message = "Title is required"))]
    pub title: String,
    #[validate(length(min = 1, message = "Author is required"))]
    pub author: String,
    #[validate(length(min = 1, message = "Category is required"))]
    pub category: String,
    #[validate(length(min = 1, message = "Year is required"))]
    pub year: String,
    #[validate(length(min = 1, message = "ISBN is required"))]
    pub isbn: String,
}

/// A validated new book ready for insertion
#[derive(Debug, Clone)]
pub struct NewBook {
    pub title: String,
    pub author: String,
    pub category: String,
    pub year: i64,
    pub isbn: String,
}

impl AddBookForm {
    /// Check field presence and parse the year, reporting the first problem
    /// as a user-facing message.
    pub fn into_new_book(self) -> Result<NewBook, String> {
        if let Err(errors) = self.validate() {
            let message = errors
                .field_errors()
                .values()
                .flat_map(|field| field.iter())
                .filter_map(|error| error.message.as_ref())
                .map(|message| message.to_string())
                .next()
                .unwrap_or_else(|| "Invalid form input".to_string());
            return Err(message);
        }

        let year: i64 = self
            .year
            .trim()
            .parse()
            .map_err(|_| "Year must be a number".to_string())?;

        Ok(NewBook {
            title: self.title,
            author: self.author,
            category: self.category,
            year,
            isbn: self.isbn,
        })
    }
}
