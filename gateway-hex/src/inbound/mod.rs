//! HTTP Inbound Adapter
//!
//! Axum-based HTTP server that drives the application layer.

mod error;
mod handlers;
mod json;
mod server;

pub use error::ApiError;
pub use handlers::AppState;
pub use json::JsonBody;
pub use server::{DEFAULT_SHUTDOWN_GRACE, HttpServer};
