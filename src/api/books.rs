use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use sea_orm::DatabaseConnection;
use serde_json::json;

use super::error_response;
use crate::models::Book;
use crate::services::catalog_service;

#[utoipa::path(
    get,
    path = "/api/books",
    responses(
        (status = 200, description = "Full catalog, ordered by title")
    )
)]
pub async fn list_books(State(db): State<DatabaseConnection>) -> impl IntoResponse {
    match catalog_service::list_books(&db).await {
        Ok(books) => Json(json!({
            "books": books,
            "total": books.len()
        }))
        .into_response(),
        Err(e) => error_response(e).into_response(),
    }
}

#[utoipa::path(
    post,
    path = "/api/books",
    request_body = Book,
    responses(
        (status = 201, description = "Book created", body = Book),
        (status = 400, description = "A field failed validation"),
        (status = 409, description = "Duplicate ISBN")
    )
)]
pub async fn create_book(
    State(db): State<DatabaseConnection>,
    Json(book): Json<Book>,
) -> impl IntoResponse {
    match catalog_service::create_book(&db, book).await {
        Ok(book) => (
            StatusCode::CREATED,
            Json(json!({
                "message": "Book created successfully",
                "book": book
            })),
        )
            .into_response(),
        Err(e) => error_response(e).into_response(),
    }
}

#[utoipa::path(
    get,
    path = "/api/books/{isbn}",
    params(("isbn" = String, Path, description = "Book identifier")),
    responses(
        (status = 200, description = "The matching book", body = Book),
        (status = 404, description = "No book with this ISBN")
    )
)]
pub async fn get_book(
    State(db): State<DatabaseConnection>,
    Path(isbn): Path<String>,
) -> impl IntoResponse {
    match catalog_service::get_book(&db, &isbn).await {
        Ok(book) => (StatusCode::OK, Json(json!({ "book": book }))).into_response(),
        Err(e) => error_response(e).into_response(),
    }
}

#[utoipa::path(
    put,
    path = "/api/books/{isbn}",
    params(("isbn" = String, Path, description = "Book identifier")),
    request_body = Book,
    responses(
        (status = 200, description = "Book updated", body = Book),
        (status = 404, description = "No book with this ISBN")
    )
)]
pub async fn update_book(
    State(db): State<DatabaseConnection>,
    Path(isbn): Path<String>,
    Json(book): Json<Book>,
) -> impl IntoResponse {
    match catalog_service::update_book(&db, &isbn, book).await {
        Ok(book) => (
            StatusCode::OK,
            Json(json!({
                "book": book,
                "updated": 1
            })),
        )
            .into_response(),
        Err(e) => error_response(e).into_response(),
    }
}

#[utoipa::path(
    delete,
    path = "/api/books/{isbn}",
    params(("isbn" = String, Path, description = "Book identifier")),
    responses(
        (status = 200, description = "Book deleted"),
        (status = 404, description = "No book with this ISBN"),
        (status = 409, description = "Book is checked out")
    )
)]
pub async fn delete_book(
    State(db): State<DatabaseConnection>,
    Path(isbn): Path<String>,
) -> impl IntoResponse {
    match catalog_service::delete_book(&db, &isbn).await {
        Ok(()) => (
            StatusCode::OK,
            Json(json!({"message": "Book deleted successfully"})),
        )
            .into_response(),
        Err(e) => error_response(e).into_response(),
    }
}
