//! Catalog Service - business logic for the book catalog
//!
//! All mutations validate first and fail with a typed [`CatalogError`];
//! a failed operation leaves the stored catalog untouched.

use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, DatabaseConnection, EntityTrait, ModelTrait,
    PaginatorTrait, QueryFilter, QueryOrder, Set,
};
use serde::Serialize;
use utoipa::ToSchema;

use crate::domain::CatalogError;
use crate::domain::validation::{
    is_valid_isbn, is_valid_text_field, is_valid_year, normalize_isbn,
};
use crate::models::Book;
use crate::models::book::{ActiveModel as BookActiveModel, Column, Entity as BookEntity};

/// Catalog-wide availability counters
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct CatalogStats {
    pub total: u64,
    pub available: u64,
    pub checked_out: u64,
    /// available / total * 100, 0.0 for an empty catalog
    pub availability_rate: f64,
}

fn validate_mutable_fields(book: &Book) -> Result<(), CatalogError> {
    if !is_valid_text_field(&book.title) {
        return Err(CatalogError::Validation {
            field: "title",
            message: "title must not be empty".to_string(),
        });
    }
    if !is_valid_text_field(&book.author) {
        return Err(CatalogError::Validation {
            field: "author",
            message: "author must not be empty".to_string(),
        });
    }
    if !is_valid_text_field(&book.genre) {
        return Err(CatalogError::Validation {
            field: "genre",
            message: "genre must not be empty".to_string(),
        });
    }
    if !is_valid_year(book.year) {
        return Err(CatalogError::Validation {
            field: "year",
            message: "publication year must be between 1000 and the current year".to_string(),
        });
    }
    Ok(())
}

async fn find_by_isbn(
    db: &DatabaseConnection,
    isbn: &str,
) -> Result<crate::models::book::Model, CatalogError> {
    BookEntity::find()
        .filter(Column::Isbn.eq(normalize_isbn(isbn)))
        .one(db)
        .await?
        .ok_or(CatalogError::NotFound)
}

/// List the whole catalog, ordered by title
pub async fn list_books(db: &DatabaseConnection) -> Result<Vec<Book>, CatalogError> {
    let books = BookEntity::find()
        .order_by_asc(Column::Title)
        .all(db)
        .await?;

    Ok(books.into_iter().map(Book::from).collect())
}

/// Case-insensitive substring search over title, author, genre and ISBN.
/// An empty query returns the full catalog.
pub async fn search_books(
    db: &DatabaseConnection,
    query: &str,
) -> Result<Vec<Book>, CatalogError> {
    let query = query.trim();
    if query.is_empty() {
        return list_books(db).await;
    }

    let condition = Condition::any()
        .add(Column::Title.contains(query))
        .add(Column::Author.contains(query))
        .add(Column::Genre.contains(query))
        .add(Column::Isbn.contains(query));

    let books = BookEntity::find()
        .filter(condition)
        .order_by_asc(Column::Title)
        .all(db)
        .await?;

    Ok(books.into_iter().map(Book::from).collect())
}

/// Get a single book by ISBN
pub async fn get_book(db: &DatabaseConnection, isbn: &str) -> Result<Book, CatalogError> {
    Ok(Book::from(find_by_isbn(db, isbn).await?))
}

/// Add a new book. The ISBN is normalized before storage and must be
/// unique across the catalog.
pub async fn create_book(db: &DatabaseConnection, book: Book) -> Result<Book, CatalogError> {
    validate_mutable_fields(&book)?;
    if !is_valid_isbn(&book.isbn) {
        return Err(CatalogError::Validation {
            field: "isbn",
            message: "ISBN must be 10 or 13 digits with a valid check digit".to_string(),
        });
    }
    let isbn = normalize_isbn(&book.isbn);

    let existing = BookEntity::find()
        .filter(Column::Isbn.eq(isbn.as_str()))
        .one(db)
        .await?;
    if existing.is_some() {
        return Err(CatalogError::DuplicateIsbn(isbn));
    }

    let now = chrono::Utc::now().to_rfc3339();
    let new_book = BookActiveModel {
        isbn: Set(isbn),
        title: Set(book.title.trim().to_string()),
        author: Set(book.author.trim().to_string()),
        genre: Set(book.genre.trim().to_string()),
        publication_year: Set(book.year),
        checked_out: Set(book.checked_out),
        created_at: Set(now.clone()),
        updated_at: Set(now),
        ..Default::default()
    };

    let model = new_book.insert(db).await?;
    tracing::debug!("Added '{}' ({})", model.title, model.isbn);

    Ok(Book::from(model))
}

/// Replace the mutable fields of an existing book. The ISBN identifies
/// the record and never changes.
pub async fn update_book(
    db: &DatabaseConnection,
    isbn: &str,
    data: Book,
) -> Result<Book, CatalogError> {
    validate_mutable_fields(&data)?;

    let model = find_by_isbn(db, isbn).await?;
    let mut book: BookActiveModel = model.into();

    book.title = Set(data.title.trim().to_string());
    book.author = Set(data.author.trim().to_string());
    book.genre = Set(data.genre.trim().to_string());
    book.publication_year = Set(data.year);
    book.checked_out = Set(data.checked_out);
    book.updated_at = Set(chrono::Utc::now().to_rfc3339());

    let model = book.update(db).await?;
    Ok(Book::from(model))
}

/// Remove a book. Checked-out books must be returned first.
pub async fn delete_book(db: &DatabaseConnection, isbn: &str) -> Result<(), CatalogError> {
    let model = find_by_isbn(db, isbn).await?;

    if model.checked_out {
        return Err(CatalogError::RecordInUse);
    }

    model.delete(db).await?;
    Ok(())
}

/// Check a book out. Fails without changing state if it already is.
pub async fn checkout_book(db: &DatabaseConnection, isbn: &str) -> Result<Book, CatalogError> {
    let model = find_by_isbn(db, isbn).await?;

    if model.checked_out {
        return Err(CatalogError::AlreadyCheckedOut);
    }

    let mut book: BookActiveModel = model.into();
    book.checked_out = Set(true);
    book.updated_at = Set(chrono::Utc::now().to_rfc3339());

    Ok(Book::from(book.update(db).await?))
}

/// Return a checked-out book
pub async fn return_book(db: &DatabaseConnection, isbn: &str) -> Result<Book, CatalogError> {
    let model = find_by_isbn(db, isbn).await?;

    if !model.checked_out {
        return Err(CatalogError::NotCheckedOut);
    }

    let mut book: BookActiveModel = model.into();
    book.checked_out = Set(false);
    book.updated_at = Set(chrono::Utc::now().to_rfc3339());

    Ok(Book::from(book.update(db).await?))
}

/// Availability counters for the whole catalog
pub async fn statistics(db: &DatabaseConnection) -> Result<CatalogStats, CatalogError> {
    let total = BookEntity::find().count(db).await?;
    let checked_out = BookEntity::find()
        .filter(Column::CheckedOut.eq(true))
        .count(db)
        .await?;
    let available = total - checked_out;

    let availability_rate = if total == 0 {
        0.0
    } else {
        available as f64 / total as f64 * 100.0
    };

    Ok(CatalogStats {
        total,
        available,
        checked_out,
        availability_rate,
    })
}

/// Count total books
pub async fn count_books(db: &DatabaseConnection) -> Result<u64, CatalogError> {
    let count = BookEntity::find().count(db).await?;
    Ok(count)
}
