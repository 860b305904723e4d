//! Bulk interchange: JSON snapshot export and array import.
//!
//! The interchange format is a flat array of the six record fields; only
//! round-trip fidelity matters, not the exact bytes.

use axum::{
    Json,
    extract::State,
    http::{HeaderMap, StatusCode, header},
    response::IntoResponse,
};
use sea_orm::DatabaseConnection;
use serde::Serialize;
use serde_json::json;

use super::error_response;
use crate::domain::CatalogError;
use crate::models::Book;
use crate::services::catalog_service;

#[derive(Serialize)]
pub struct BackupData {
    pub version: String,
    pub timestamp: String,
    pub books: Vec<Book>,
}

#[utoipa::path(
    get,
    path = "/api/export",
    responses(
        (status = 200, description = "Full catalog snapshot as a JSON attachment")
    )
)]
pub async fn export_data(State(db): State<DatabaseConnection>) -> impl IntoResponse {
    let books = match catalog_service::list_books(&db).await {
        Ok(books) => books,
        Err(e) => return error_response(e).into_response(),
    };

    let backup = BackupData {
        version: "1.0".to_string(),
        timestamp: chrono::Utc::now().to_rfc3339(),
        books,
    };

    let filename = format!(
        "bibliocat_export_{}.json",
        chrono::Utc::now().format("%Y-%m-%d")
    );

    let mut headers = HeaderMap::new();
    headers.insert(header::CONTENT_TYPE, "application/json".parse().unwrap());
    headers.insert(
        header::CONTENT_DISPOSITION,
        format!("attachment; filename=\"{}\"", filename)
            .parse()
            .unwrap(),
    );

    (StatusCode::OK, headers, Json(backup)).into_response()
}

#[utoipa::path(
    post,
    path = "/api/import",
    request_body = Vec<Book>,
    responses(
        (status = 200, description = "Import counts; duplicates are skipped silently")
    )
)]
pub async fn import_data(
    State(db): State<DatabaseConnection>,
    Json(books): Json<Vec<Book>>,
) -> impl IntoResponse {
    let mut imported = 0;
    let mut skipped = 0;
    let mut errors = Vec::new();

    for book in books {
        let title = book.title.clone();
        match catalog_service::create_book(&db, book).await {
            Ok(_) => imported += 1,
            Err(CatalogError::DuplicateIsbn(_)) => skipped += 1,
            Err(e @ CatalogError::Validation { .. }) => errors.push(format!("{}: {}", title, e)),
            Err(e) => return error_response(e).into_response(),
        }
    }

    (
        StatusCode::OK,
        Json(json!({
            "imported": imported,
            "skipped": skipped,
            "errors": if errors.is_empty() { None } else { Some(errors) }
        })),
    )
        .into_response()
}
