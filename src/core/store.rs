use hashbrown::HashMap;
use serde::{Deserialize, Serialize};

use crate::{
    book::{Book, BookDraft, BookField},
    error::CatalogError,
    member::{Member, MemberField},
    types::{Isbn, MEMBER_ID_PREFIX, MemberId, SearchField},
};

/// Serializable full read view of a [`Catalog`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogSnapshotV1 {
    /// Next value of the member-id counter.
    pub next_member_id: u32,
    /// ISBNs in shelf (insertion) order.
    pub shelf_order: Vec<Isbn>,
    /// Book records, in shelf order.
    pub books: Vec<Book>,
    /// Member records, in registration order.
    pub members: Vec<Member>,
}

/// Authoritative in-memory catalog of books, members, and loans.
///
/// The catalog is the only owner of its records; every mutation goes
/// through an operation that validates first and mutates second, so no
/// intermediate state is ever observable. Operations return
/// [`CatalogError`] instead of panicking and leave state untouched on
/// failure.
#[derive(Debug, Default)]
pub struct Catalog {
    books: HashMap<Isbn, Book>,
    shelf_order: Vec<Isbn>,
    members: Vec<Member>,
    next_member_id: u32,
}

impl Catalog {
    /// Creates an empty catalog.
    pub fn new() -> Self {
        Self {
            next_member_id: 1,
            ..Self::default()
        }
    }

    /// Rebuilds a catalog from a snapshot, rejecting structurally
    /// inconsistent input.
    pub fn from_snapshot(snapshot: CatalogSnapshotV1) -> Result<Self, CatalogError> {
        if snapshot.shelf_order.len() != snapshot.books.len() {
            return Err(CatalogError::InvalidSnapshot(
                "shelf order and book records disagree".to_string(),
            ));
        }

        let mut store = Self {
            next_member_id: snapshot.next_member_id.max(1),
            shelf_order: snapshot.shelf_order,
            ..Self::default()
        };

        for book in snapshot.books {
            if store.books.insert(book.isbn.clone(), book).is_some() {
                return Err(CatalogError::InvalidSnapshot(
                    "duplicate ISBN in book records".to_string(),
                ));
            }
        }
        for isbn in &store.shelf_order {
            if !store.books.contains_key(isbn) {
                return Err(CatalogError::InvalidSnapshot(format!(
                    "shelf order references unknown ISBN '{isbn}'"
                )));
            }
        }

        for member in snapshot.members {
            let dup_key = store
                .members
                .iter()
                .any(|m| m.member_id == member.member_id || m.email == member.email);
            if dup_key {
                return Err(CatalogError::InvalidSnapshot(format!(
                    "duplicate member key for '{}'",
                    member.member_id
                )));
            }
            let mut held = member.borrowed_books.clone();
            held.sort_unstable();
            held.dedup();
            if held.len() != member.borrowed_books.len() {
                return Err(CatalogError::InvalidSnapshot(format!(
                    "member '{}' holds a duplicate ISBN",
                    member.member_id
                )));
            }
            store.members.push(member);
        }

        Ok(store)
    }

    /// Exports the full catalog state as a snapshot.
    pub fn export_snapshot(&self) -> CatalogSnapshotV1 {
        let books = self
            .shelf_order
            .iter()
            .filter_map(|isbn| self.books.get(isbn).cloned())
            .collect();

        CatalogSnapshotV1 {
            next_member_id: self.next_member_id,
            shelf_order: self.shelf_order.clone(),
            books,
            members: self.members.clone(),
        }
    }

    /// Catalogs a new book with all copies available.
    pub fn add_book(&mut self, draft: BookDraft) -> Result<(), CatalogError> {
        if draft.isbn.is_empty() {
            return Err(CatalogError::EmptyField("ISBN"));
        }
        if draft.title.is_empty() {
            return Err(CatalogError::EmptyField("title"));
        }
        if draft.author.is_empty() {
            return Err(CatalogError::EmptyField("author"));
        }
        if self.books.contains_key(&draft.isbn) {
            return Err(CatalogError::DuplicateIsbn(draft.isbn));
        }
        if draft.total_copies == 0 {
            return Err(CatalogError::CopiesNotPositive);
        }

        let book = Book {
            isbn: draft.isbn.clone(),
            title: draft.title,
            author: draft.author,
            genre: draft.genre,
            total_copies: draft.total_copies,
            available_copies: draft.total_copies,
        };

        self.shelf_order.push(draft.isbn.clone());
        self.books.insert(draft.isbn, book);
        Ok(())
    }

    /// Registers a new member and returns the generated id.
    ///
    /// Ids are sequential and never reused, even after deletion.
    pub fn add_member(&mut self, name: &str, email: &str) -> Result<MemberId, CatalogError> {
        if name.is_empty() {
            return Err(CatalogError::EmptyField("name"));
        }
        if email.is_empty() {
            return Err(CatalogError::EmptyField("email"));
        }
        if self.members.iter().any(|m| m.email == email) {
            return Err(CatalogError::DuplicateEmail(email.to_string()));
        }

        let member_id = format!("{MEMBER_ID_PREFIX}{:03}", self.next_member_id);
        self.next_member_id += 1;

        self.members.push(Member {
            member_id: member_id.clone(),
            name: name.to_string(),
            email: email.to_string(),
            borrowed_books: Vec::new(),
        });
        Ok(member_id)
    }

    /// Case-insensitive substring search over one attribute, in shelf order.
    ///
    /// Zero matches is a success, not a failure.
    pub fn search_books(
        &self,
        field: SearchField,
        term: &str,
    ) -> Result<Vec<&Book>, CatalogError> {
        if term.is_empty() {
            return Err(CatalogError::EmptySearchTerm);
        }

        let needle = term.to_lowercase();
        let results: Vec<&Book> = self
            .shelf_order
            .iter()
            .filter_map(|isbn| self.books.get(isbn))
            .filter(|book| {
                let haystack = match field {
                    SearchField::Title => &book.title,
                    SearchField::Author => &book.author,
                };
                haystack.to_lowercase().contains(&needle)
            })
            .collect();

        if results.is_empty() {
            tracing::info!(term, "no books matched search");
        }
        Ok(results)
    }

    /// Overwrites one book attribute.
    ///
    /// Setting `total_copies` recomputes availability as
    /// `max(0, new_total - borrowed)`. Shrinking below the borrowed count
    /// clamps availability to zero while the outstanding loans remain; a
    /// later return can then push availability past the total. Known
    /// quirk, kept deliberately; a warning is logged when it happens.
    pub fn update_book(&mut self, isbn: &str, field: BookField) -> Result<(), CatalogError> {
        let book = self
            .books
            .get_mut(isbn)
            .ok_or_else(|| CatalogError::MissingBook(isbn.to_string()))?;

        match field {
            BookField::Title(title) => {
                if title.is_empty() {
                    return Err(CatalogError::EmptyField("title"));
                }
                book.title = title;
            }
            BookField::Author(author) => {
                if author.is_empty() {
                    return Err(CatalogError::EmptyField("author"));
                }
                book.author = author;
            }
            BookField::Genre(genre) => {
                book.genre = genre;
            }
            BookField::TotalCopies(new_total) => {
                let borrowed = i64::from(book.total_copies) - i64::from(book.available_copies);
                if i64::from(new_total) < borrowed {
                    tracing::warn!(
                        isbn,
                        new_total,
                        borrowed,
                        "total copies set below outstanding loans; clamping availability to zero"
                    );
                }
                let available = (i64::from(new_total) - borrowed).max(0);
                book.total_copies = new_total;
                book.available_copies = u32::try_from(available).unwrap_or(u32::MAX);
            }
        }
        Ok(())
    }

    /// Overwrites one member attribute.
    pub fn update_member(
        &mut self,
        member_id: &str,
        field: MemberField,
    ) -> Result<(), CatalogError> {
        let idx = self
            .member_index(member_id)
            .ok_or_else(|| CatalogError::MissingMember(member_id.to_string()))?;

        match field {
            MemberField::Name(name) => {
                if name.is_empty() {
                    return Err(CatalogError::EmptyField("name"));
                }
                self.members[idx].name = name;
            }
            MemberField::Email(email) => {
                if email.is_empty() {
                    return Err(CatalogError::EmptyField("email"));
                }
                let taken = self
                    .members
                    .iter()
                    .any(|m| m.email == email && m.member_id != member_id);
                if taken {
                    return Err(CatalogError::DuplicateEmail(email));
                }
                self.members[idx].email = email;
            }
        }
        Ok(())
    }

    /// Removes a book; refused while any copy is on loan.
    pub fn delete_book(&mut self, isbn: &str) -> Result<(), CatalogError> {
        let book = self
            .books
            .get(isbn)
            .ok_or_else(|| CatalogError::MissingBook(isbn.to_string()))?;
        if book.available_copies < book.total_copies {
            return Err(CatalogError::CopiesOnLoan(isbn.to_string()));
        }

        self.books.remove(isbn);
        Self::remove_from_order(&mut self.shelf_order, isbn);
        Ok(())
    }

    /// Removes a member; refused while they hold any book.
    pub fn delete_member(&mut self, member_id: &str) -> Result<(), CatalogError> {
        let idx = self
            .member_index(member_id)
            .ok_or_else(|| CatalogError::MissingMember(member_id.to_string()))?;
        if !self.members[idx].borrowed_books.is_empty() {
            return Err(CatalogError::BooksStillHeld(member_id.to_string()));
        }

        self.members.remove(idx);
        Ok(())
    }

    /// Lends one copy of `isbn` to `member_id`.
    ///
    /// Checks run short-circuit in a fixed order and the first failure is
    /// returned: member exists, borrow limit, book exists, availability,
    /// duplicate hold. A member at the limit asking for an unknown ISBN is
    /// told about the limit, and an exhausted title reports as unavailable
    /// even to the member already holding it.
    pub fn borrow_book(&mut self, member_id: &str, isbn: &str) -> Result<(), CatalogError> {
        let idx = self
            .member_index(member_id)
            .ok_or_else(|| CatalogError::MissingMember(member_id.to_string()))?;
        if self.members[idx].at_borrow_limit() {
            return Err(CatalogError::BorrowLimitReached(member_id.to_string()));
        }
        let book = self
            .books
            .get_mut(isbn)
            .ok_or_else(|| CatalogError::MissingBook(isbn.to_string()))?;
        if book.available_copies == 0 {
            return Err(CatalogError::NoCopiesAvailable(isbn.to_string()));
        }
        if self.members[idx].holds(isbn) {
            return Err(CatalogError::AlreadyBorrowed {
                member_id: member_id.to_string(),
                isbn: isbn.to_string(),
            });
        }

        book.available_copies -= 1;
        self.members[idx].borrowed_books.push(isbn.to_string());
        Ok(())
    }

    /// Takes back one copy of `isbn` from `member_id`.
    ///
    /// The catalog lookup is a defensive check: it can only fail after a
    /// held book was deleted through the total-copies shrink corner.
    pub fn return_book(&mut self, member_id: &str, isbn: &str) -> Result<(), CatalogError> {
        let idx = self
            .member_index(member_id)
            .ok_or_else(|| CatalogError::MissingMember(member_id.to_string()))?;
        let pos = self.members[idx]
            .borrowed_books
            .iter()
            .position(|held| held == isbn)
            .ok_or_else(|| CatalogError::NotBorrowed {
                member_id: member_id.to_string(),
                isbn: isbn.to_string(),
            })?;
        let book = self
            .books
            .get_mut(isbn)
            .ok_or_else(|| CatalogError::MissingBook(isbn.to_string()))?;

        self.members[idx].borrowed_books.remove(pos);
        book.available_copies += 1;
        Ok(())
    }

    /// Looks up a book by ISBN.
    pub fn book(&self, isbn: &str) -> Option<&Book> {
        self.books.get(isbn)
    }

    /// Cloning variant of [`Catalog::book`].
    pub fn book_cloned(&self, isbn: &str) -> Option<Book> {
        self.book(isbn).cloned()
    }

    /// Looks up a member by id.
    pub fn member(&self, member_id: &str) -> Option<&Member> {
        self.member_index(member_id).map(|idx| &self.members[idx])
    }

    /// Cloning variant of [`Catalog::member`].
    pub fn member_cloned(&self, member_id: &str) -> Option<Member> {
        self.member(member_id).cloned()
    }

    /// All books, in shelf (insertion) order.
    pub fn books(&self) -> Vec<&Book> {
        self.shelf_order
            .iter()
            .filter_map(|isbn| self.books.get(isbn))
            .collect()
    }

    /// All members, in registration order.
    pub fn members(&self) -> &[Member] {
        &self.members
    }

    /// ISBNs in shelf order.
    pub fn ordered_isbns(&self) -> &[Isbn] {
        &self.shelf_order
    }

    fn member_index(&self, member_id: &str) -> Option<usize> {
        self.members.iter().position(|m| m.member_id == member_id)
    }

    fn remove_from_order(order: &mut Vec<Isbn>, isbn: &str) {
        if let Some(pos) = order.iter().position(|x| x == isbn) {
            order.remove(pos);
        }
    }
}
