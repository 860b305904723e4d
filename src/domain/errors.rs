//! Catalog error types
//!
//! These errors are framework-agnostic and represent business-level failures.

use std::fmt;

#[derive(Debug, PartialEq)]
pub enum CatalogError {
    /// A field failed validation; carries the field name and a message
    Validation {
        field: &'static str,
        message: String,
    },
    /// A record with this ISBN already exists
    DuplicateIsbn(String),
    /// No record with the given ISBN
    NotFound,
    /// Checkout attempted on a record that is already checked out
    AlreadyCheckedOut,
    /// Return attempted on a record that is not checked out
    NotCheckedOut,
    /// Removal attempted on a record that is currently checked out
    RecordInUse,
    /// Database/persistence error; catalog state is unchanged
    Database(String),
}

impl fmt::Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogError::Validation { field, message } => {
                write!(f, "Invalid {}: {}", field, message)
            }
            CatalogError::DuplicateIsbn(isbn) => {
                write!(f, "A book with ISBN {} already exists", isbn)
            }
            CatalogError::NotFound => write!(f, "Book not found"),
            CatalogError::AlreadyCheckedOut => write!(f, "This book is already checked out"),
            CatalogError::NotCheckedOut => write!(f, "This book is not checked out"),
            CatalogError::RecordInUse => {
                write!(f, "Cannot remove a checked-out book; return it first")
            }
            CatalogError::Database(msg) => write!(f, "Database error: {}", msg),
        }
    }
}

impl std::error::Error for CatalogError {}

// Conversion from SeaORM errors (used in the service layer)
impl From<sea_orm::DbErr> for CatalogError {
    fn from(e: sea_orm::DbErr) -> Self {
        CatalogError::Database(e.to_string())
    }
}
