//! HTTP handlers
//!
//! Axum request handlers for the API endpoints.

pub mod names;

pub use names::{add_name, list_names};
