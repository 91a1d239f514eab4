//! Repository layer for database operations

pub mod books;

use sqlx::{Pool, Postgres};

pub use books::{BookStore, BooksRepository};

/// Main repository struct holding the database connection pool
#[derive(Clone)]
pub struct Repository {
    pub pool: Pool<Postgres>,
    pub books: BooksRepository,
}

impl Repository {
    /// Create a new repository with the given database pool
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self {
            books: BooksRepository::new(pool.clone()),
            pool,
        }
    }

    /// Close every pooled connection; used on shutdown
    pub async fn close(&self) {
        self.pool.close().await;
    }
}
