//! # Blogly Shared
//!
//! Form payloads submitted by the HTML pages and decoded by the server.

pub mod dto;

pub use dto::{FormError, PostForm, TagForm, UserForm};
