use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use sea_orm::DatabaseConnection;

use super::error_response;
use crate::services::catalog_service;

#[utoipa::path(
    get,
    path = "/api/stats",
    responses(
        (status = 200, description = "Catalog totals and availability rate", body = catalog_service::CatalogStats)
    )
)]
pub async fn catalog_stats(State(db): State<DatabaseConnection>) -> impl IntoResponse {
    match catalog_service::statistics(&db).await {
        Ok(stats) => (StatusCode::OK, Json(stats)).into_response(),
        Err(e) => error_response(e).into_response(),
    }
}
