//! Application state - shared across all handlers.

use std::sync::Arc;

use blogly_core::ports::{PostRepository, TagRepository, UserRepository};
use blogly_infra::{SqlPostRepository, SqlTagRepository, SqlUserRepository};
use sea_orm::DbConn;

/// Shared application state. Each handler reaches the database only through these ports.
#[derive(Clone)]
pub struct AppState {
    pub users: Arc<dyn UserRepository>,
    pub posts: Arc<dyn PostRepository>,
    pub tags: Arc<dyn TagRepository>,
}

impl AppState {
    /// Build the repositories over one connection pool.
    pub fn new(db: DbConn) -> Self {
        tracing::info!("Application state initialized");

        Self {
            users: Arc::new(SqlUserRepository::new(db.clone())),
            posts: Arc::new(SqlPostRepository::new(db.clone())),
            tags: Arc::new(SqlTagRepository::new(db)),
        }
    }
}
