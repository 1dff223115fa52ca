//! # HTTP Server
//!
//! Axum-based REST surface for the lending service. Route modules build the
//! per-entity routers; `HttpServer` combines them under `/api/v1`, applies
//! CORS and request tracing, and owns the listener.

mod book_routes;
mod config;
mod errors;
mod reader_routes;
mod server;

pub use book_routes::book_routes;
pub use config::HttpConfig;
pub use errors::{ApiError, ApiResult, ErrorResponse};
pub use reader_routes::reader_routes;
pub use server::HttpServer;

use crate::service::LibraryService;

/// State shared by all route handlers
pub struct AppState {
    pub service: LibraryService,
}
