use bibliocat::db;
use bibliocat::domain::CatalogError;
use bibliocat::models::Book;
use bibliocat::seed;
use bibliocat::services::catalog_service;
use sea_orm::DatabaseConnection;

// Helper to create a test database
async fn setup_test_db() -> DatabaseConnection {
    // In-memory SQLite for testing
    db::init_db("sqlite::memory:")
        .await
        .expect("Failed to init DB")
}

fn sample_book(isbn: &str, title: &str) -> Book {
    Book {
        isbn: isbn.to_string(),
        title: title.to_string(),
        author: "Test Author".to_string(),
        genre: "Fiction".to_string(),
        year: 1999,
        checked_out: false,
    }
}

#[tokio::test]
async fn test_add_then_find_returns_record() {
    let db = setup_test_db().await;

    let created = catalog_service::create_book(&db, sample_book("9780143127550", "The Martian"))
        .await
        .expect("Create failed");

    let fetched = catalog_service::get_book(&db, "9780143127550")
        .await
        .expect("Find failed");

    assert_eq!(created, fetched);
    assert_eq!(fetched.title, "The Martian");
    assert!(!fetched.checked_out);
}

#[tokio::test]
async fn test_duplicate_isbn_rejected() {
    let db = setup_test_db().await;

    catalog_service::create_book(&db, sample_book("9780143127550", "First Copy"))
        .await
        .expect("Create failed");

    let err = catalog_service::create_book(&db, sample_book("9780143127550", "Second Copy"))
        .await
        .expect_err("Duplicate should fail");

    assert!(matches!(err, CatalogError::DuplicateIsbn(_)));
    assert_eq!(catalog_service::count_books(&db).await.unwrap(), 1);
}

#[tokio::test]
async fn test_hyphenated_isbn_is_normalized_before_storage() {
    let db = setup_test_db().await;

    let created = catalog_service::create_book(&db, sample_book("978-0-14-312755-0", "Hyphens"))
        .await
        .expect("Create failed");
    assert_eq!(created.isbn, "9780143127550");

    // The hyphenated and bare forms address the same record
    let err = catalog_service::create_book(&db, sample_book("9780143127550", "Bare"))
        .await
        .expect_err("Duplicate should fail");
    assert!(matches!(err, CatalogError::DuplicateIsbn(_)));
}

#[tokio::test]
async fn test_validation_failures_name_the_field() {
    let db = setup_test_db().await;

    let mut bad_title = sample_book("9780143127550", "  ");
    bad_title.title = "   ".to_string();
    let err = catalog_service::create_book(&db, bad_title)
        .await
        .expect_err("Blank title should fail");
    assert!(matches!(
        err,
        CatalogError::Validation { field: "title", .. }
    ));

    // Checksum mismatch: right length, wrong check digit
    let err = catalog_service::create_book(&db, sample_book("1234567890", "Bad Checksum"))
        .await
        .expect_err("Invalid ISBN should fail");
    assert!(matches!(err, CatalogError::Validation { field: "isbn", .. }));

    let mut bad_year = sample_book("9780143127550", "Too Old");
    bad_year.year = 999;
    let err = catalog_service::create_book(&db, bad_year)
        .await
        .expect_err("Year below 1000 should fail");
    assert!(matches!(err, CatalogError::Validation { field: "year", .. }));

    // Nothing was stored
    assert_eq!(catalog_service::count_books(&db).await.unwrap(), 0);
}

#[tokio::test]
async fn test_checkout_twice_fails_without_state_change() {
    let db = setup_test_db().await;

    catalog_service::create_book(&db, sample_book("0306406152", "Checkout Me"))
        .await
        .expect("Create failed");

    let book = catalog_service::checkout_book(&db, "0306406152")
        .await
        .expect("First checkout failed");
    assert!(book.checked_out);

    let err = catalog_service::checkout_book(&db, "0306406152")
        .await
        .expect_err("Second checkout should fail");
    assert_eq!(err, CatalogError::AlreadyCheckedOut);

    // Still checked out, not toggled back
    let fetched = catalog_service::get_book(&db, "0306406152").await.unwrap();
    assert!(fetched.checked_out);
}

#[tokio::test]
async fn test_checkout_return_round_trip() {
    let db = setup_test_db().await;

    catalog_service::create_book(&db, sample_book("9780451524935", "Round Trip"))
        .await
        .expect("Create failed");
    let before = catalog_service::get_book(&db, "9780451524935").await.unwrap();

    catalog_service::checkout_book(&db, "9780451524935")
        .await
        .expect("Checkout failed");
    catalog_service::return_book(&db, "9780451524935")
        .await
        .expect("Return failed");

    let after = catalog_service::get_book(&db, "9780451524935").await.unwrap();
    assert_eq!(before, after);
}

#[tokio::test]
async fn test_return_of_available_book_fails() {
    let db = setup_test_db().await;

    catalog_service::create_book(&db, sample_book("9780451524935", "Never Out"))
        .await
        .expect("Create failed");

    let err = catalog_service::return_book(&db, "9780451524935")
        .await
        .expect_err("Return of available book should fail");
    assert_eq!(err, CatalogError::NotCheckedOut);
}

#[tokio::test]
async fn test_circulation_of_unknown_isbn_is_not_found() {
    let db = setup_test_db().await;

    let err = catalog_service::checkout_book(&db, "9780451524935")
        .await
        .expect_err("Unknown ISBN should fail");
    assert_eq!(err, CatalogError::NotFound);

    let err = catalog_service::return_book(&db, "9780451524935")
        .await
        .expect_err("Unknown ISBN should fail");
    assert_eq!(err, CatalogError::NotFound);
}

#[tokio::test]
async fn test_statistics_empty_catalog() {
    let db = setup_test_db().await;

    let stats = catalog_service::statistics(&db).await.expect("Stats failed");
    assert_eq!(stats.total, 0);
    assert_eq!(stats.available, 0);
    assert_eq!(stats.checked_out, 0);
    assert_eq!(stats.availability_rate, 0.0);
}

#[tokio::test]
async fn test_statistics_counts_and_rate() {
    let db = setup_test_db().await;

    catalog_service::create_book(&db, sample_book("9780743273565", "Book One"))
        .await
        .unwrap();
    catalog_service::create_book(&db, sample_book("9780061120084", "Book Two"))
        .await
        .unwrap();
    catalog_service::create_book(&db, sample_book("9780451524935", "Book Three"))
        .await
        .unwrap();
    catalog_service::checkout_book(&db, "9780061120084")
        .await
        .unwrap();

    let stats = catalog_service::statistics(&db).await.expect("Stats failed");
    assert_eq!(stats.total, 3);
    assert_eq!(stats.available, 2);
    assert_eq!(stats.checked_out, 1);
    assert_eq!((stats.availability_rate * 10.0).round() / 10.0, 66.7);
}

#[tokio::test]
async fn test_search_is_case_insensitive_and_matches_genre() {
    let db = setup_test_db().await;

    let mut dune = sample_book("9780441172719", "Dune");
    dune.genre = "Science Fiction".to_string();
    catalog_service::create_book(&db, dune).await.unwrap();

    let mut cosmos = sample_book("9780345539434", "Cosmos");
    cosmos.genre = "Science".to_string();
    cosmos.author = "Carl Sagan".to_string();
    catalog_service::create_book(&db, cosmos).await.unwrap();

    let results = catalog_service::search_books(&db, "FICTION").await.unwrap();
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].title, "Dune");

    let results = catalog_service::search_books(&db, "sagan").await.unwrap();
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].title, "Cosmos");

    // ISBN substring match
    let results = catalog_service::search_books(&db, "0441172719").await.unwrap();
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].title, "Dune");
}

#[tokio::test]
async fn test_empty_search_returns_all_ordered_by_title() {
    let db = setup_test_db().await;

    catalog_service::create_book(&db, sample_book("9780451524935", "Zebra Stories"))
        .await
        .unwrap();
    catalog_service::create_book(&db, sample_book("9780743273565", "Aardvark Tales"))
        .await
        .unwrap();

    let results = catalog_service::search_books(&db, "").await.unwrap();
    assert_eq!(results.len(), 2);
    assert_eq!(results[0].title, "Aardvark Tales");
    assert_eq!(results[1].title, "Zebra Stories");
}

#[tokio::test]
async fn test_remove_checked_out_book_fails() {
    let db = setup_test_db().await;

    catalog_service::create_book(&db, sample_book("9780141439518", "On Loan"))
        .await
        .unwrap();
    catalog_service::checkout_book(&db, "9780141439518")
        .await
        .unwrap();

    let err = catalog_service::delete_book(&db, "9780141439518")
        .await
        .expect_err("Removing a checked-out book should fail");
    assert_eq!(err, CatalogError::RecordInUse);

    // Return it, then removal succeeds and the record is gone
    catalog_service::return_book(&db, "9780141439518").await.unwrap();
    catalog_service::delete_book(&db, "9780141439518")
        .await
        .expect("Delete failed");

    let err = catalog_service::get_book(&db, "9780141439518")
        .await
        .expect_err("Deleted book should be absent");
    assert_eq!(err, CatalogError::NotFound);
}

#[tokio::test]
async fn test_update_replaces_fields_and_preserves_isbn() {
    let db = setup_test_db().await;

    catalog_service::create_book(&db, sample_book("9780316769174", "Draft Title"))
        .await
        .unwrap();

    let mut revised = sample_book("ignored", "Final Title");
    revised.author = "Revised Author".to_string();
    revised.genre = "History".to_string();
    revised.year = 2001;

    let updated = catalog_service::update_book(&db, "9780316769174", revised)
        .await
        .expect("Update failed");

    assert_eq!(updated.isbn, "9780316769174");
    assert_eq!(updated.title, "Final Title");
    assert_eq!(updated.author, "Revised Author");
    assert_eq!(updated.genre, "History");
    assert_eq!(updated.year, 2001);
}

#[tokio::test]
async fn test_update_unknown_isbn_is_not_found() {
    let db = setup_test_db().await;

    let err = catalog_service::update_book(&db, "9780316769174", sample_book("x", "Ghost"))
        .await
        .expect_err("Update of unknown ISBN should fail");
    assert_eq!(err, CatalogError::NotFound);
}

#[tokio::test]
async fn test_seed_populates_empty_catalog_once() {
    let db = setup_test_db().await;

    seed::seed_sample_books(&db).await.expect("Seed failed");
    assert_eq!(catalog_service::count_books(&db).await.unwrap(), 10);

    // Re-seeding must not duplicate anything
    seed::seed_sample_books(&db).await.expect("Re-seed failed");
    assert_eq!(catalog_service::count_books(&db).await.unwrap(), 10);

    let stats = catalog_service::statistics(&db).await.unwrap();
    assert_eq!(stats.available, 10);
}
