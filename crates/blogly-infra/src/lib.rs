//! # Blogly Infrastructure
//!
//! Concrete implementations of the ports defined in `blogly-core`.
//! This crate contains the SeaORM entities and repositories.
//!
//! ## Feature Flags
//!
//! - `postgres` (default) - PostgreSQL driver
//! - `sqlite` - SQLite driver, used by the test suites

pub mod database;

pub use database::{
    DatabaseConfig, SqlPostRepository, SqlTagRepository, SqlUserRepository, connect,
};
