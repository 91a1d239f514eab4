//! Book service

use std::sync::Arc;

use crate::{
    error::{AppError, AppResult},
    models::book::{Book, UpdateBook},
    repository::BookStore,
};

#[derive(Clone)]
pub struct BooksService {
    store: Arc<dyn BookStore>,
}

impl BooksService {
    pub fn new(store: Arc<dyn BookStore>) -> Self {
        Self { store }
    }

    pub async fn list(&self) -> AppResult<Vec<Book>> {
        let books = self.store.find_all().await?;
        tracing::debug!("Listed {} books", books.len());
        Ok(books)
    }

    pub async fn get(&self, isbn: &str) -> AppResult<Book> {
        tracing::debug!("Fetching book isbn={}", isbn);
        self.store.find_one(isbn).await
    }

    pub async fn create(&self, book: &Book) -> AppResult<Book> {
        let created = self.store.create(book).await?;
        tracing::info!("Created book isbn={}", created.isbn);
        Ok(created)
    }

    /// Replace a book's fields. The ISBN in the body, if any, must match `isbn`.
    pub async fn update(&self, isbn: &str, data: UpdateBook) -> AppResult<Book> {
        if let Some(ref body_isbn) = data.isbn {
            if body_isbn != isbn {
                return Err(AppError::BadRequest(format!(
                    "isbn cannot be changed (path '{}', body '{}')",
                    isbn, body_isbn
                )));
            }
        }

        let book = data.into_book(isbn);
        let updated = self.store.update(isbn, &book).await?;
        tracing::info!("Updated book isbn={}", isbn);
        Ok(updated)
    }

    pub async fn delete(&self, isbn: &str) -> AppResult<()> {
        self.store.remove(isbn).await?;
        tracing::info!("Deleted book isbn={}", isbn);
        Ok(())
    }

    /// Check that storage is reachable
    pub async fn ping(&self) -> AppResult<()> {
        self.store.ping().await
    }
}
