//! Biblioteca library API
//!
//! REST JSON API exposing uniform CRUD routes over the categories, authors,
//! books, students and loans of a small library, backed by PostgreSQL.

use std::sync::Arc;

use sqlx::{Pool, Postgres};

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod repository;
pub mod services;

pub use api::create_router;
pub use config::AppConfig;
pub use error::{AppError, AppResult};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub services: Arc<services::Services>,
}

impl AppState {
    /// Wire the repository and services around an existing pool
    pub fn new(pool: Pool<Postgres>) -> Self {
        let repository = repository::Repository::new(pool);
        Self {
            services: Arc::new(services::Services::new(repository)),
        }
    }
}
