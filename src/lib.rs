//! Bookstore server
//!
//! A small REST JSON API for creating, reading, updating, deleting and
//! listing book records keyed by ISBN, backed by a PostgreSQL `books` table.

use std::sync::Arc;

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod repository;
pub mod services;

pub use config::AppConfig;
pub use error::{AppError, AppResult};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub services: Arc<services::Services>,
}
