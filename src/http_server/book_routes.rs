//! Book HTTP Routes
//!
//! Endpoints for registering books, looking up the borrow relation, and the
//! borrow/return transitions.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{delete, get, post},
    Json, Router,
};
use serde::Deserialize;

use crate::domain::{Book, BookId, BookWithReader, Reader};

use super::errors::{ApiError, ApiResult};
use super::AppState;

// ==================
// Request Types
// ==================

/// Body of `POST /books`. The id must be left to the store.
#[derive(Debug, Deserialize)]
pub struct SaveBookRequest {
    #[serde(default)]
    pub id: Option<BookId>,
    pub name: String,
    pub author: String,
}

// ==================
// Book Routes
// ==================

/// Create book routes
pub fn book_routes(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/books", get(list_books_handler).post(save_book_handler))
        .route("/books/readers", get(books_with_readers_handler))
        .route("/books/{book_id}/reader", get(current_reader_handler))
        .route(
            "/books/{book_id}/readers/{reader_id}",
            post(borrow_book_handler),
        )
        .route("/books/{book_id}", delete(return_book_handler))
        .with_state(state)
}

// ==================
// Handlers
// ==================

async fn list_books_handler(State(state): State<Arc<AppState>>) -> ApiResult<Json<Vec<Book>>> {
    Ok(Json(state.service.list_books()?))
}

async fn save_book_handler(
    State(state): State<Arc<AppState>>,
    Json(body): Json<SaveBookRequest>,
) -> ApiResult<Json<Book>> {
    if body.id.is_some() {
        return Err(ApiError::IdInBody);
    }
    Ok(Json(state.service.save_book(&body.name, &body.author)?))
}

/// Reader currently holding the book; `null` when it is in the library.
async fn current_reader_handler(
    State(state): State<Arc<AppState>>,
    Path(book_id): Path<String>,
) -> ApiResult<Json<Option<Reader>>> {
    Ok(Json(state.service.current_reader_of_book(&book_id)?))
}

async fn books_with_readers_handler(
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<Vec<BookWithReader>>> {
    Ok(Json(state.service.books_with_readers()?))
}

async fn borrow_book_handler(
    State(state): State<Arc<AppState>>,
    Path((book_id, reader_id)): Path<(String, String)>,
) -> ApiResult<StatusCode> {
    state.service.borrow_book_by_ids(&book_id, &reader_id)?;
    Ok(StatusCode::OK)
}

async fn return_book_handler(
    State(state): State<Arc<AppState>>,
    Path(book_id): Path<String>,
) -> ApiResult<StatusCode> {
    state.service.return_book(&book_id)?;
    Ok(StatusCode::OK)
}
