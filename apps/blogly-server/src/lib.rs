//! # Blogly Server
//!
//! Routes, handlers, and HTML views for the Blogly web application.
//! The binary in `main.rs` wires these to a database and an `HttpServer`.

pub mod config;
pub mod handlers;
pub mod middleware;
pub mod state;
pub mod telemetry;
pub mod views;

pub use config::AppConfig;
pub use state::AppState;
