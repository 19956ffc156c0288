//! Catalog failure taxonomy.

use thiserror::Error;

use crate::types::{BORROW_LIMIT, Isbn, MemberId};

/// Every way a catalog operation can fail.
///
/// No failure is fatal: operations return an `Err` of this type and leave
/// the catalog unchanged. The `Display` text is the message a front end
/// shows for that failure.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    /// Referenced ISBN is not in the catalog.
    #[error("book with ISBN '{0}' not found")]
    MissingBook(Isbn),
    /// Referenced member id is not registered.
    #[error("member with ID '{0}' not found")]
    MissingMember(MemberId),
    /// A book with this ISBN is already cataloged.
    #[error("book with ISBN '{0}' already exists")]
    DuplicateIsbn(Isbn),
    /// Another member is already registered with this email.
    #[error("a member with email '{0}' already exists")]
    DuplicateEmail(String),
    /// A required text field was empty.
    #[error("{0} cannot be empty")]
    EmptyField(&'static str),
    /// Genre label is not in the shelving set.
    #[error("unknown genre '{0}'")]
    UnknownGenre(String),
    /// Field name is not an updatable book attribute.
    #[error("unknown book field '{0}': use 'title', 'author', 'genre', or 'total_copies'")]
    UnknownBookField(String),
    /// Field name is not an updatable member attribute.
    #[error("unknown member field '{0}': use 'name' or 'email'")]
    UnknownMemberField(String),
    /// Field name is not searchable.
    #[error("unknown search field '{0}': use 'title' or 'author'")]
    UnknownSearchField(String),
    /// Copy count text did not parse as an integer.
    #[error("total copies must be a number, got '{0}'")]
    CopiesNotNumeric(String),
    /// Copy count parsed but was negative.
    #[error("total copies cannot be negative, got {0}")]
    CopiesNegative(i64),
    /// A new book must start with at least one copy.
    #[error("total copies must be at least 1")]
    CopiesNotPositive,
    /// Member already holds the maximum number of books.
    #[error("borrow limit of {limit} books reached for member '{member}'", limit = BORROW_LIMIT, member = .0)]
    BorrowLimitReached(MemberId),
    /// Every copy of the book is currently on loan.
    #[error("no copies of ISBN '{0}' are currently available")]
    NoCopiesAvailable(Isbn),
    /// Member already holds this exact book.
    #[error("member '{member_id}' has already borrowed ISBN '{isbn}'")]
    AlreadyBorrowed {
        /// Member attempting the borrow.
        member_id: MemberId,
        /// Book already held.
        isbn: Isbn,
    },
    /// Member does not hold this book.
    #[error("member '{member_id}' has not borrowed ISBN '{isbn}'")]
    NotBorrowed {
        /// Member attempting the return.
        member_id: MemberId,
        /// Book not held.
        isbn: Isbn,
    },
    /// Book cannot be deleted while copies are on loan.
    #[error("cannot delete ISBN '{0}': copies are currently borrowed")]
    CopiesOnLoan(Isbn),
    /// Member cannot be deleted while holding books.
    #[error("cannot delete member '{0}': borrowed books are outstanding")]
    BooksStillHeld(MemberId),
    /// Search term was empty.
    #[error("search term cannot be empty")]
    EmptySearchTerm,
    /// Restored state contradicts itself.
    #[error("snapshot is inconsistent: {0}")]
    InvalidSnapshot(String),
}
