//! Book model

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::{Validate, ValidationErrors};

/// Book record, also the body of a create request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow, Validate, ToSchema)]
#[schema(example = json!({
    "isbn": "0691161518",
    "amazon_url": "http://a.co/eobPtX2",
    "author": "Matthew Lane",
    "language": "english",
    "pages": 264,
    "publisher": "Princeton University Press",
    "title": "Power-Up: Unlocking the Hidden Mathematics in Video Games",
    "year": 2017
}))]
pub struct Book {
    /// Primary key, immutable once created
    #[validate(length(min = 1, message = "isbn is required"))]
    pub isbn: String,
    #[validate(url(message = "amazon_url must be a valid URL"))]
    pub amazon_url: String,
    #[validate(length(min = 1, message = "author is required"))]
    pub author: String,
    /// Short language code, e.g. "en"
    #[validate(length(min = 2, max = 10, message = "language must be a short code"))]
    pub language: String,
    #[validate(range(min = 1, message = "pages must be positive"))]
    pub pages: i32,
    #[validate(length(min = 1, message = "publisher is required"))]
    pub publisher: String,
    #[validate(length(min = 1, message = "title is required"))]
    pub title: String,
    pub year: i32,
}

/// Update book request: every non-key field is replaced
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct UpdateBook {
    /// Optional; when given it must match the ISBN in the path
    pub isbn: Option<String>,
    #[validate(url(message = "amazon_url must be a valid URL"))]
    pub amazon_url: String,
    #[validate(length(min = 1, message = "author is required"))]
    pub author: String,
    #[validate(length(min = 2, max = 10, message = "language must be a short code"))]
    pub language: String,
    #[validate(range(min = 1, message = "pages must be positive"))]
    pub pages: i32,
    #[validate(length(min = 1, message = "publisher is required"))]
    pub publisher: String,
    #[validate(length(min = 1, message = "title is required"))]
    pub title: String,
    pub year: i32,
}

impl UpdateBook {
    /// Build the full record stored under `isbn`
    pub fn into_book(self, isbn: &str) -> Book {
        Book {
            isbn: isbn.to_string(),
            amazon_url: self.amazon_url,
            author: self.author,
            language: self.language,
            pages: self.pages,
            publisher: self.publisher,
            title: self.title,
            year: self.year,
        }
    }
}

/// Single book response: `{ "book": {...} }`
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct BookResponse {
    pub book: Book,
}

/// Book list response: `{ "books": [...] }`
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct BookListResponse {
    pub books: Vec<Book>,
}

/// Flatten validator errors into sorted `"field: message"` lines
pub fn validation_messages(errors: &ValidationErrors) -> Vec<String> {
    let mut messages: Vec<String> = errors
        .field_errors()
        .into_iter()
        .flat_map(|(field, errs)| {
            errs.iter().map(move |e| match &e.message {
                Some(message) => format!("{}: {}", field, message),
                None => format!("{}: {}", field, e.code),
            })
        })
        .collect();
    messages.sort();
    messages
}
