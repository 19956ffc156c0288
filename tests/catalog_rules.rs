use circulib::{
    book::{BookDraft, BookField},
    core::store::Catalog,
    error::CatalogError,
    types::Genre,
};

fn draft(isbn: &str, title: &str, author: &str, genre: Genre, copies: u32) -> BookDraft {
    BookDraft {
        isbn: isbn.to_string(),
        title: title.to_string(),
        author: author.to_string(),
        genre,
        total_copies: copies,
    }
}

fn seeded() -> (Catalog, String) {
    let mut catalog = Catalog::new();
    catalog
        .add_book(draft("RAM-001", "Test Book 1", "Author One", Genre::SelfHelp, 3))
        .unwrap();
    catalog
        .add_book(draft("RAM-002", "Test Book 2", "Author Two", Genre::Romance, 1))
        .unwrap();
    let member_id = catalog
        .add_member("Fatmata Bangura", "fatmata@example.com")
        .unwrap();
    (catalog, member_id)
}

#[test]
fn add_book_rejects_duplicates_and_bad_drafts() {
    let (mut catalog, _) = seeded();

    let err = catalog
        .add_book(draft("RAM-001", "Duplicate", "Someone", Genre::SelfHelp, 2))
        .unwrap_err();
    assert_eq!(err, CatalogError::DuplicateIsbn("RAM-001".to_string()));
    assert_eq!(catalog.book("RAM-001").unwrap().title, "Test Book 1");

    assert_eq!(
        catalog.add_book(draft("RAM-003", "", "Someone", Genre::Mystery, 2)),
        Err(CatalogError::EmptyField("title"))
    );
    assert_eq!(
        catalog.add_book(draft("", "No Key", "Someone", Genre::Mystery, 2)),
        Err(CatalogError::EmptyField("ISBN"))
    );
    assert_eq!(
        catalog.add_book(draft("RAM-003", "No Copies", "Someone", Genre::Mystery, 0)),
        Err(CatalogError::CopiesNotPositive)
    );
    assert_eq!(catalog.books().len(), 2);
}

#[test]
fn member_ids_are_sequential_and_never_reused() {
    let mut catalog = Catalog::new();
    let first = catalog.add_member("A", "a@example.com").unwrap();
    let second = catalog.add_member("B", "b@example.com").unwrap();
    assert_eq!((first.as_str(), second.as_str()), ("MBR001", "MBR002"));

    catalog.delete_member(&first).unwrap();
    let third = catalog.add_member("C", "c@example.com").unwrap();
    assert_eq!(third, "MBR003");
}

#[test]
fn duplicate_email_is_rejected_exactly() {
    let (mut catalog, member_id) = seeded();

    assert_eq!(
        catalog.add_member("Different Name", "fatmata@example.com"),
        Err(CatalogError::DuplicateEmail("fatmata@example.com".to_string()))
    );
    assert_eq!(catalog.members().len(), 1);

    // Case-sensitive match: a different casing is a different email.
    assert!(catalog.add_member("Other", "FATMATA@example.com").is_ok());

    // Self-comparison is excluded when a member keeps their own email.
    use circulib::member::MemberField;
    assert!(
        catalog
            .update_member(&member_id, MemberField::Email("fatmata@example.com".to_string()))
            .is_ok()
    );
}

#[test]
fn borrow_then_return_restores_exact_state() {
    let (mut catalog, member_id) = seeded();
    let before = catalog.export_snapshot();

    catalog.borrow_book(&member_id, "RAM-001").unwrap();
    assert_eq!(catalog.book("RAM-001").unwrap().available_copies, 2);
    assert!(catalog.member(&member_id).unwrap().holds("RAM-001"));

    catalog.return_book(&member_id, "RAM-001").unwrap();
    assert_eq!(catalog.export_snapshot(), before);
}

#[test]
fn borrow_limit_is_enforced_at_three() {
    let (mut catalog, member_id) = seeded();
    catalog
        .add_book(draft("RAM-003", "Book 3", "Author", Genre::SelfHelp, 1))
        .unwrap();
    catalog
        .add_book(draft("RAM-004", "Book 4", "Author", Genre::Romance, 1))
        .unwrap();

    catalog.borrow_book(&member_id, "RAM-001").unwrap();
    catalog.borrow_book(&member_id, "RAM-002").unwrap();
    catalog.borrow_book(&member_id, "RAM-003").unwrap();

    assert_eq!(
        catalog.borrow_book(&member_id, "RAM-004"),
        Err(CatalogError::BorrowLimitReached(member_id.clone()))
    );
    assert_eq!(catalog.member(&member_id).unwrap().borrowed_books.len(), 3);
    assert_eq!(catalog.book("RAM-004").unwrap().available_copies, 1);
}

#[test]
fn borrowing_the_last_copy_exhausts_the_title() {
    let (mut catalog, first) = seeded();
    let second = catalog.add_member("Isatu Sesay", "isatu@example.com").unwrap();

    catalog.borrow_book(&first, "RAM-002").unwrap();
    assert_eq!(catalog.book("RAM-002").unwrap().available_copies, 0);

    assert_eq!(
        catalog.borrow_book(&second, "RAM-002"),
        Err(CatalogError::NoCopiesAvailable("RAM-002".to_string()))
    );
}

#[test]
fn borrow_checks_run_in_fixed_order() {
    let (mut catalog, member_id) = seeded();
    catalog
        .add_book(draft("RAM-003", "Book 3", "Author", Genre::SelfHelp, 1))
        .unwrap();

    // Unknown member wins over unknown book.
    assert_eq!(
        catalog.borrow_book("MBR999", "NOPE"),
        Err(CatalogError::MissingMember("MBR999".to_string()))
    );

    // At the limit, the limit is reported even for an unknown ISBN.
    catalog.borrow_book(&member_id, "RAM-001").unwrap();
    catalog.borrow_book(&member_id, "RAM-002").unwrap();
    catalog.borrow_book(&member_id, "RAM-003").unwrap();
    assert_eq!(
        catalog.borrow_book(&member_id, "NOPE"),
        Err(CatalogError::BorrowLimitReached(member_id.clone()))
    );

    // Holding the last copy, exhaustion is reported before the duplicate hold.
    catalog.return_book(&member_id, "RAM-001").unwrap();
    assert_eq!(
        catalog.borrow_book(&member_id, "RAM-002"),
        Err(CatalogError::NoCopiesAvailable("RAM-002".to_string()))
    );
}

#[test]
fn double_borrow_of_the_same_title_is_rejected() {
    let (mut catalog, member_id) = seeded();

    catalog.borrow_book(&member_id, "RAM-001").unwrap();
    assert_eq!(
        catalog.borrow_book(&member_id, "RAM-001"),
        Err(CatalogError::AlreadyBorrowed {
            member_id: member_id.clone(),
            isbn: "RAM-001".to_string(),
        })
    );
    assert_eq!(catalog.book("RAM-001").unwrap().available_copies, 2);
}

#[test]
fn return_requires_an_outstanding_loan() {
    let (mut catalog, member_id) = seeded();

    assert_eq!(
        catalog.return_book(&member_id, "RAM-001"),
        Err(CatalogError::NotBorrowed {
            member_id: member_id.clone(),
            isbn: "RAM-001".to_string(),
        })
    );
    assert_eq!(
        catalog.return_book("MBR999", "RAM-001"),
        Err(CatalogError::MissingMember("MBR999".to_string()))
    );
}

#[test]
fn deletion_guards_clear_once_loans_are_returned() {
    let (mut catalog, member_id) = seeded();
    catalog.borrow_book(&member_id, "RAM-001").unwrap();

    assert_eq!(
        catalog.delete_book("RAM-001"),
        Err(CatalogError::CopiesOnLoan("RAM-001".to_string()))
    );
    assert_eq!(
        catalog.delete_member(&member_id),
        Err(CatalogError::BooksStillHeld(member_id.clone()))
    );

    catalog.return_book(&member_id, "RAM-001").unwrap();
    catalog.delete_book("RAM-001").unwrap();
    catalog.delete_member(&member_id).unwrap();

    assert!(catalog.book("RAM-001").is_none());
    assert!(!catalog.ordered_isbns().contains(&"RAM-001".to_string()));
    assert!(catalog.member(&member_id).is_none());
}

#[test]
fn single_copy_lifecycle_scenario() {
    let mut catalog = Catalog::new();
    catalog
        .add_book(draft("978-1", "T", "A", Genre::SelfHelp, 1))
        .unwrap();
    let member_id = catalog.add_member("N", "e@x.com").unwrap();
    assert_eq!(member_id, "MBR001");

    catalog.borrow_book(&member_id, "978-1").unwrap();
    assert_eq!(catalog.book("978-1").unwrap().available_copies, 0);

    // The exhausted-title check fires before the duplicate-hold check.
    assert_eq!(
        catalog.borrow_book(&member_id, "978-1"),
        Err(CatalogError::NoCopiesAvailable("978-1".to_string()))
    );

    catalog.return_book(&member_id, "978-1").unwrap();
    assert_eq!(catalog.book("978-1").unwrap().available_copies, 1);
    catalog.delete_book("978-1").unwrap();
}

#[test]
fn growing_total_copies_extends_availability() {
    let (mut catalog, first) = seeded();
    let second = catalog.add_member("Isatu Sesay", "isatu@example.com").unwrap();
    catalog.borrow_book(&first, "RAM-001").unwrap();
    catalog.borrow_book(&second, "RAM-001").unwrap();

    catalog
        .update_book("RAM-001", BookField::TotalCopies(8))
        .unwrap();
    let book = catalog.book("RAM-001").unwrap();
    assert_eq!((book.total_copies, book.available_copies), (8, 6));

    catalog
        .update_book("RAM-001", BookField::TotalCopies(2))
        .unwrap();
    let book = catalog.book("RAM-001").unwrap();
    assert_eq!((book.total_copies, book.available_copies), (2, 0));
}

#[test]
fn shrink_below_borrowed_count_is_preserved_verbatim() {
    let (mut catalog, member_id) = seeded();
    catalog.borrow_book(&member_id, "RAM-002").unwrap();

    // One copy out on loan, total shrunk to zero: availability clamps.
    catalog
        .update_book("RAM-002", BookField::TotalCopies(0))
        .unwrap();
    let book = catalog.book("RAM-002").unwrap();
    assert_eq!((book.total_copies, book.available_copies), (0, 0));

    // Returning the loan pushes availability past the total.
    catalog.return_book(&member_id, "RAM-002").unwrap();
    let book = catalog.book("RAM-002").unwrap();
    assert_eq!((book.total_copies, book.available_copies), (0, 1));
    assert_eq!(book.on_loan(), 0);
}

#[test]
fn delete_while_held_strands_the_member() {
    let (mut catalog, member_id) = seeded();
    catalog.borrow_book(&member_id, "RAM-002").unwrap();
    catalog
        .update_book("RAM-002", BookField::TotalCopies(0))
        .unwrap();

    // available (0) is not below total (0), so the guard lets this through
    // even though the member still holds the ISBN.
    catalog.delete_book("RAM-002").unwrap();
    assert!(catalog.member(&member_id).unwrap().holds("RAM-002"));

    // The defensive catalog lookup in return_book is now the only thing
    // that can fire.
    assert_eq!(
        catalog.return_book(&member_id, "RAM-002"),
        Err(CatalogError::MissingBook("RAM-002".to_string()))
    );
    assert_eq!(
        catalog.delete_member(&member_id),
        Err(CatalogError::BooksStillHeld(member_id.clone()))
    );
}
