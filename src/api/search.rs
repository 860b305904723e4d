use axum::{
    Json,
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use sea_orm::DatabaseConnection;
use serde::{Deserialize, Serialize};

use super::error_response;
use crate::models::Book;
use crate::services::catalog_service;

#[derive(Debug, Deserialize, Clone)]
pub struct SearchQuery {
    pub q: Option<String>,
}

#[derive(Serialize)]
pub struct SearchResponse {
    pub books: Vec<Book>,
    pub total: usize,
}

#[utoipa::path(
    get,
    path = "/api/books/search",
    params(("q" = Option<String>, Query, description = "Substring matched against title, author, genre and ISBN")),
    responses(
        (status = 200, description = "Matching books, ordered by title")
    )
)]
pub async fn search_books(
    State(db): State<DatabaseConnection>,
    Query(params): Query<SearchQuery>,
) -> impl IntoResponse {
    let q = params.q.unwrap_or_default();

    match catalog_service::search_books(&db, &q).await {
        Ok(books) => {
            let total = books.len();
            (StatusCode::OK, Json(SearchResponse { books, total })).into_response()
        }
        Err(e) => error_response(e).into_response(),
    }
}
