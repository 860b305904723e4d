use sea_orm::*;

use crate::models::book;

/// Insert the sample catalog. Existing ISBNs are left untouched, so
/// seeding an already-populated database is a no-op per book.
pub async fn seed_sample_books(db: &DatabaseConnection) -> Result<(), DbErr> {
    let sample_books = vec![
        ("9780743273565", "The Great Gatsby", "F. Scott Fitzgerald", "Fiction", 1925),
        ("9780061120084", "To Kill a Mockingbird", "Harper Lee", "Fiction", 1960),
        ("9780451524935", "1984", "George Orwell", "Fiction", 1949),
        ("9780141439518", "Pride and Prejudice", "Jane Austen", "Fiction", 1813),
        ("9780316769174", "The Catcher in the Rye", "J.D. Salinger", "Fiction", 1951),
        ("9780553380163", "A Brief History of Time", "Stephen Hawking", "Science", 1988),
        ("9780132350884", "Clean Code", "Robert C. Martin", "Programming", 2008),
        ("9780201633610", "Design Patterns", "Gang of Four", "Programming", 1994),
        ("9780321751041", "The Art of Computer Programming", "Donald Knuth", "Programming", 1968),
        ("9780262033848", "Introduction to Algorithms", "Thomas H. Cormen", "Programming", 2009),
    ];

    let now = chrono::Utc::now().to_rfc3339();

    for (isbn, title, author, genre, year) in sample_books {
        let new_book = book::ActiveModel {
            isbn: Set(isbn.to_owned()),
            title: Set(title.to_owned()),
            author: Set(author.to_owned()),
            genre: Set(genre.to_owned()),
            publication_year: Set(year),
            checked_out: Set(false),
            created_at: Set(now.clone()),
            updated_at: Set(now.clone()),
            ..Default::default()
        };

        let res = book::Entity::insert(new_book)
            .on_conflict(
                sea_orm::sea_query::OnConflict::column(book::Column::Isbn)
                    .do_nothing()
                    .to_owned(),
            )
            .exec(db)
            .await;

        match res {
            Ok(_) | Err(DbErr::RecordNotInserted) => {}
            Err(e) => return Err(e),
        }
    }

    Ok(())
}
