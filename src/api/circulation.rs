//! Checkout / return handlers
//!
//! Each book is either available or checked out; these are the only two
//! transitions, and an invalid transition fails without changing state.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use sea_orm::DatabaseConnection;
use serde_json::json;

use super::error_response;
use crate::services::catalog_service;

#[utoipa::path(
    put,
    path = "/api/books/{isbn}/checkout",
    params(("isbn" = String, Path, description = "Book identifier")),
    responses(
        (status = 200, description = "Book checked out"),
        (status = 404, description = "No book with this ISBN"),
        (status = 409, description = "Already checked out")
    )
)]
pub async fn checkout_book(
    State(db): State<DatabaseConnection>,
    Path(isbn): Path<String>,
) -> impl IntoResponse {
    match catalog_service::checkout_book(&db, &isbn).await {
        Ok(book) => (
            StatusCode::OK,
            Json(json!({
                "message": format!("'{}' has been checked out", book.title),
                "book": book
            })),
        )
            .into_response(),
        Err(e) => error_response(e).into_response(),
    }
}

#[utoipa::path(
    put,
    path = "/api/books/{isbn}/return",
    params(("isbn" = String, Path, description = "Book identifier")),
    responses(
        (status = 200, description = "Book returned"),
        (status = 404, description = "No book with this ISBN"),
        (status = 409, description = "Not checked out")
    )
)]
pub async fn return_book(
    State(db): State<DatabaseConnection>,
    Path(isbn): Path<String>,
) -> impl IntoResponse {
    match catalog_service::return_book(&db, &isbn).await {
        Ok(book) => (
            StatusCode::OK,
            Json(json!({
                "message": format!("'{}' has been returned", book.title),
                "book": book
            })),
        )
            .into_response(),
        Err(e) => error_response(e).into_response(),
    }
}
