pub mod books;
pub mod circulation;
pub mod data;
pub mod health;
pub mod search;
pub mod stats;

use axum::{
    Json, Router,
    http::StatusCode,
    routing::{get, post, put},
};
use sea_orm::DatabaseConnection;
use serde_json::{Value, json};

use crate::domain::CatalogError;

pub fn api_router(db: DatabaseConnection) -> Router {
    Router::new()
        // Health check
        .route("/health", get(health::health_check))
        // Books
        .route("/books", get(books::list_books).post(books::create_book))
        .route("/books/search", get(search::search_books))
        .route(
            "/books/:isbn",
            get(books::get_book)
                .put(books::update_book)
                .delete(books::delete_book),
        )
        // Circulation
        .route("/books/:isbn/checkout", put(circulation::checkout_book))
        .route("/books/:isbn/return", put(circulation::return_book))
        // Statistics
        .route("/stats", get(stats::catalog_stats))
        // Data Import/Export
        .route("/export", get(data::export_data))
        .route("/import", post(data::import_data))
        .with_state(db)
}

/// Map a domain failure onto the HTTP surface
pub(crate) fn error_response(err: CatalogError) -> (StatusCode, Json<Value>) {
    let status = match &err {
        CatalogError::Validation { .. } => StatusCode::BAD_REQUEST,
        CatalogError::NotFound => StatusCode::NOT_FOUND,
        CatalogError::DuplicateIsbn(_)
        | CatalogError::AlreadyCheckedOut
        | CatalogError::NotCheckedOut
        | CatalogError::RecordInUse => StatusCode::CONFLICT,
        CatalogError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
    };

    (status, Json(json!({ "error": err.to_string() })))
}
