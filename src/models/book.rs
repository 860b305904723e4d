use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "books")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    /// Normalized digit string, unique across the catalog, immutable
    pub isbn: String,
    pub title: String,
    pub author: String,
    pub genre: String,
    pub publication_year: i32,
    pub checked_out: bool,
    pub created_at: String,
    pub updated_at: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

// DTO for API responses and the bulk interchange format
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Book {
    pub isbn: String,
    pub title: String,
    pub author: String,
    pub genre: String,
    pub year: i32,
    #[serde(default)]
    pub checked_out: bool,
}

impl From<Model> for Book {
    fn from(model: Model) -> Self {
        Self {
            isbn: model.isbn,
            title: model.title,
            author: model.author,
            genre: model.genre,
            year: model.publication_year,
            checked_out: model.checked_out,
        }
    }
}
