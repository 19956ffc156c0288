//! Console rendering helpers for books and members.

use crate::{book::Book, core::store::Catalog, member::Member};

/// One-line availability status for a book.
pub fn availability(book: &Book) -> String {
    let state = if book.is_available() {
        "Available"
    } else {
        "Out of stock"
    };
    format!(
        "{}/{} copies - {}",
        book.available_copies, book.total_copies, state
    )
}

/// Prints one book entry.
pub fn print_book(book: &Book) {
    println!("{} by {}", book.title, book.author);
    println!("   ISBN: {}", book.isbn);
    println!("   Genre: {}", book.genre);
    println!("   Status: {}", availability(book));
}

/// Prints one member entry.
pub fn print_member(member: &Member) {
    println!("{}", member.name);
    println!("   ID: {}", member.member_id);
    println!("   Email: {}", member.email);
    println!("   Borrowed books: {}", member.borrowed_books.len());
}

/// Prints every book in shelf order.
pub fn print_all_books(catalog: &Catalog) {
    let books = catalog.books();
    if books.is_empty() {
        println!("No books in the catalog yet.");
        return;
    }
    for book in books {
        print_book(book);
    }
}

/// Prints every member in registration order.
pub fn print_all_members(catalog: &Catalog) {
    let members = catalog.members();
    if members.is_empty() {
        println!("No members registered yet.");
        return;
    }
    for member in members {
        print_member(member);
    }
}
