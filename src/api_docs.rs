use crate::api;
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    paths(
        api::health::health_check,
        api::books::list_books,
        api::books::create_book,
        api::books::get_book,
        api::books::update_book,
        api::books::delete_book,
        api::search::search_books,
        api::circulation::checkout_book,
        api::circulation::return_book,
        api::stats::catalog_stats,
        api::data::export_data,
        api::data::import_data,
    ),
    components(
        schemas(
            crate::models::book::Book,
            crate::services::catalog_service::CatalogStats,
        )
    ),
    tags(
        (name = "bibliocat", description = "Bibliocat catalog API")
    )
)]
pub struct ApiDoc;
