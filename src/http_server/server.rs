//! # HTTP Server
//!
//! Combines the book and reader routers into the full application router
//! and runs it on a tokio listener.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::{routing::get, Json, Router};
use serde_json::{json, Value};
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::service::LibraryService;
use crate::store::{BookStore, MemoryStore, ReaderStore};

use super::book_routes::book_routes;
use super::config::HttpConfig;
use super::reader_routes::reader_routes;
use super::AppState;

/// HTTP server for the lending service
pub struct HttpServer {
    config: HttpConfig,
    router: Router,
}

impl HttpServer {
    /// Create a server with default configuration and a fresh in-memory store
    pub fn new() -> Self {
        Self::with_config(HttpConfig::default())
    }

    /// Create a server with custom configuration and a fresh in-memory store
    pub fn with_config(config: HttpConfig) -> Self {
        let store = Arc::new(MemoryStore::new());
        Self::with_stores(config, store.clone(), store)
    }

    /// Create a server over caller-supplied stores
    pub fn with_stores(
        config: HttpConfig,
        books: Arc<dyn BookStore>,
        readers: Arc<dyn ReaderStore>,
    ) -> Self {
        let state = Arc::new(AppState {
            service: LibraryService::new(books, readers),
        });
        let router = Self::build_router(&config, state);
        Self { config, router }
    }

    /// Build the combined router with all endpoints
    fn build_router(config: &HttpConfig, state: Arc<AppState>) -> Router {
        let cors = if config.cors_origins.is_empty() {
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any)
        } else {
            use tower_http::cors::AllowOrigin;
            let origins: Vec<_> = config
                .cors_origins
                .iter()
                .filter_map(|s| s.parse().ok())
                .collect();

            CorsLayer::new()
                .allow_origin(AllowOrigin::list(origins))
                .allow_methods(Any)
                .allow_headers(Any)
        };

        Router::new()
            .route("/health", get(health_handler))
            .nest(
                "/api/v1",
                book_routes(state.clone()).merge(reader_routes(state)),
            )
            .layer(TraceLayer::new_for_http())
            .layer(cors)
    }

    /// Get the socket address
    pub fn socket_addr(&self) -> String {
        self.config.socket_addr()
    }

    /// Get the router (for testing)
    pub fn router(self) -> Router {
        self.router
    }

    /// Start the HTTP server (async)
    pub async fn start(self) -> Result<(), std::io::Error> {
        let addr: SocketAddr = self
            .config
            .socket_addr()
            .parse()
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidInput, e))?;

        info!(%addr, "library service listening");

        let listener = TcpListener::bind(addr).await?;
        axum::serve(listener, self.router).await?;

        Ok(())
    }
}

impl Default for HttpServer {
    fn default() -> Self {
        Self::new()
    }
}

async fn health_handler() -> Json<Value> {
    Json(json!({"status": "ok"}))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_server_creation() {
        let server = HttpServer::new();
        assert_eq!(server.socket_addr(), "127.0.0.1:8080");
    }

    #[test]
    fn test_server_with_custom_port() {
        let config = HttpConfig::with_port(9090);
        let server = HttpServer::with_config(config);
        assert_eq!(server.socket_addr(), "127.0.0.1:9090");
    }

    #[test]
    fn test_router_builds() {
        let server = HttpServer::new();
        let _router = server.router();
        // If we get here, route registration has no conflicts
    }
}
