//! Reader HTTP Routes
//!
//! Endpoints for registering readers and listing what they hold.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    routing::get,
    Json, Router,
};
use serde::Deserialize;

use crate::domain::{Book, Reader, ReaderId, ReaderWithBooks};

use super::errors::{ApiError, ApiResult};
use super::AppState;

// ==================
// Request Types
// ==================

/// Body of `POST /readers`. The id must be left to the store.
#[derive(Debug, Deserialize)]
pub struct SaveReaderRequest {
    #[serde(default)]
    pub id: Option<ReaderId>,
    pub name: String,
}

// ==================
// Reader Routes
// ==================

/// Create reader routes
pub fn reader_routes(state: Arc<AppState>) -> Router {
    Router::new()
        .route(
            "/readers",
            get(list_readers_handler).post(save_reader_handler),
        )
        .route("/readers/books", get(readers_with_books_handler))
        .route("/readers/{reader_id}/books", get(borrowed_books_handler))
        .with_state(state)
}

// ==================
// Handlers
// ==================

async fn list_readers_handler(State(state): State<Arc<AppState>>) -> ApiResult<Json<Vec<Reader>>> {
    Ok(Json(state.service.list_readers()?))
}

async fn save_reader_handler(
    State(state): State<Arc<AppState>>,
    Json(body): Json<SaveReaderRequest>,
) -> ApiResult<Json<Reader>> {
    if body.id.is_some() {
        return Err(ApiError::IdInBody);
    }
    Ok(Json(state.service.add_reader(&body.name)?))
}

async fn borrowed_books_handler(
    State(state): State<Arc<AppState>>,
    Path(reader_id): Path<String>,
) -> ApiResult<Json<Vec<Book>>> {
    Ok(Json(state.service.borrowed_books(&reader_id)?))
}

async fn readers_with_books_handler(
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<Vec<ReaderWithBooks>>> {
    Ok(Json(state.service.readers_with_books()?))
}
