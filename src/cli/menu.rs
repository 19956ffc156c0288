//! Interactive twelve-option menu mirroring a front-desk workflow.

use std::io::{self, BufRead, Write};

use crate::{
    book::{BookDraft, BookField},
    core::store::Catalog,
    error::CatalogError,
    member::MemberField,
    types::{Genre, SearchField},
};

use super::render;

/// Runs the menu loop over stdin until exit or end of input.
pub fn run() -> io::Result<()> {
    let mut catalog = Catalog::new();
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    println!("Welcome to the circulib catalog.");
    loop {
        print_menu();
        let Some(choice) = prompt(&mut lines, "Enter your choice (1-12): ")? else {
            break;
        };
        match choice.as_str() {
            "1" => add_book(&mut catalog, &mut lines)?,
            "2" => add_member(&mut catalog, &mut lines)?,
            "3" => search_books(&catalog, &mut lines)?,
            "4" => update_book(&mut catalog, &mut lines)?,
            "5" => update_member(&mut catalog, &mut lines)?,
            "6" => delete_book(&mut catalog, &mut lines)?,
            "7" => delete_member(&mut catalog, &mut lines)?,
            "8" => borrow_book(&mut catalog, &mut lines)?,
            "9" => return_book(&mut catalog, &mut lines)?,
            "10" => render::print_all_books(&catalog),
            "11" => render::print_all_members(&catalog),
            "12" => {
                println!("Goodbye.");
                break;
            }
            _ => println!("error: enter a choice between 1 and 12"),
        }
    }
    Ok(())
}

fn print_menu() {
    println!();
    println!(" 1. Add new book");
    println!(" 2. Add new member");
    println!(" 3. Search books");
    println!(" 4. Update book details");
    println!(" 5. Update member details");
    println!(" 6. Delete book");
    println!(" 7. Delete member");
    println!(" 8. Borrow book");
    println!(" 9. Return book");
    println!("10. Display all books");
    println!("11. Display all members");
    println!("12. Exit");
}

fn prompt<I>(lines: &mut I, text: &str) -> io::Result<Option<String>>
where
    I: Iterator<Item = io::Result<String>>,
{
    print!("{text}");
    io::stdout().flush()?;
    match lines.next() {
        Some(line) => Ok(Some(line?.trim().to_string())),
        None => Ok(None),
    }
}

fn report(result: Result<(), CatalogError>, success: &str) {
    match result {
        Ok(()) => println!("{success}"),
        Err(err) => println!("error: {err}"),
    }
}

fn add_book<I>(catalog: &mut Catalog, lines: &mut I) -> io::Result<()>
where
    I: Iterator<Item = io::Result<String>>,
{
    let Some(isbn) = prompt(lines, "ISBN: ")? else {
        return Ok(());
    };
    let Some(title) = prompt(lines, "Title: ")? else {
        return Ok(());
    };
    let Some(author) = prompt(lines, "Author: ")? else {
        return Ok(());
    };
    let labels = Genre::ALL.map(Genre::label).join(", ");
    let Some(genre_raw) = prompt(lines, &format!("Genre ({labels}): "))? else {
        return Ok(());
    };
    let genre = match genre_raw.parse::<Genre>() {
        Ok(genre) => genre,
        Err(err) => {
            println!("error: {err}");
            return Ok(());
        }
    };
    let Some(copies_raw) = prompt(lines, "Total copies: ")? else {
        return Ok(());
    };
    // Negative input is passed through as zero; the store rejects
    // non-positive counts with its own message.
    let total_copies = match copies_raw.parse::<i64>() {
        Ok(n) => u32::try_from(n).unwrap_or(0),
        Err(_) => {
            println!("error: {}", CatalogError::CopiesNotNumeric(copies_raw));
            return Ok(());
        }
    };

    let summary = format!("Added '{title}' to the catalog.");
    report(
        catalog.add_book(BookDraft {
            isbn,
            title,
            author,
            genre,
            total_copies,
        }),
        &summary,
    );
    Ok(())
}

fn add_member<I>(catalog: &mut Catalog, lines: &mut I) -> io::Result<()>
where
    I: Iterator<Item = io::Result<String>>,
{
    let Some(name) = prompt(lines, "Member name: ")? else {
        return Ok(());
    };
    let Some(email) = prompt(lines, "Email: ")? else {
        return Ok(());
    };
    match catalog.add_member(&name, &email) {
        Ok(member_id) => println!("Registered '{name}' with ID {member_id}."),
        Err(err) => println!("error: {err}"),
    }
    Ok(())
}

fn search_books<I>(catalog: &Catalog, lines: &mut I) -> io::Result<()>
where
    I: Iterator<Item = io::Result<String>>,
{
    let Some(field_raw) = prompt(lines, "Search by (title/author): ")? else {
        return Ok(());
    };
    let field = match field_raw.parse::<SearchField>() {
        Ok(field) => field,
        Err(err) => {
            println!("error: {err}");
            return Ok(());
        }
    };
    let Some(term) = prompt(lines, "Search term: ")? else {
        return Ok(());
    };
    match catalog.search_books(field, &term) {
        Ok(results) if results.is_empty() => println!("No books matched '{term}'."),
        Ok(results) => {
            println!("Found {} book(s) matching '{term}':", results.len());
            for book in results {
                render::print_book(book);
            }
        }
        Err(err) => println!("error: {err}"),
    }
    Ok(())
}

fn update_book<I>(catalog: &mut Catalog, lines: &mut I) -> io::Result<()>
where
    I: Iterator<Item = io::Result<String>>,
{
    let Some(isbn) = prompt(lines, "ISBN of book to update: ")? else {
        return Ok(());
    };
    let Some(field_raw) = prompt(lines, "Field (title/author/genre/total_copies): ")? else {
        return Ok(());
    };
    let Some(value) = prompt(lines, "New value: ")? else {
        return Ok(());
    };
    match BookField::parse(&field_raw, &value) {
        Ok(field) => report(catalog.update_book(&isbn, field), "Book updated."),
        Err(err) => println!("error: {err}"),
    }
    Ok(())
}

fn update_member<I>(catalog: &mut Catalog, lines: &mut I) -> io::Result<()>
where
    I: Iterator<Item = io::Result<String>>,
{
    let Some(member_id) = prompt(lines, "Member ID to update: ")? else {
        return Ok(());
    };
    let Some(field_raw) = prompt(lines, "Field (name/email): ")? else {
        return Ok(());
    };
    let Some(value) = prompt(lines, "New value: ")? else {
        return Ok(());
    };
    match MemberField::parse(&field_raw, &value) {
        Ok(field) => report(catalog.update_member(&member_id, field), "Member updated."),
        Err(err) => println!("error: {err}"),
    }
    Ok(())
}

fn delete_book<I>(catalog: &mut Catalog, lines: &mut I) -> io::Result<()>
where
    I: Iterator<Item = io::Result<String>>,
{
    let Some(isbn) = prompt(lines, "ISBN of book to delete: ")? else {
        return Ok(());
    };
    report(catalog.delete_book(&isbn), "Book deleted.");
    Ok(())
}

fn delete_member<I>(catalog: &mut Catalog, lines: &mut I) -> io::Result<()>
where
    I: Iterator<Item = io::Result<String>>,
{
    let Some(member_id) = prompt(lines, "Member ID to delete: ")? else {
        return Ok(());
    };
    report(catalog.delete_member(&member_id), "Member deleted.");
    Ok(())
}

fn borrow_book<I>(catalog: &mut Catalog, lines: &mut I) -> io::Result<()>
where
    I: Iterator<Item = io::Result<String>>,
{
    let Some(member_id) = prompt(lines, "Member ID: ")? else {
        return Ok(());
    };
    let Some(isbn) = prompt(lines, "ISBN to borrow: ")? else {
        return Ok(());
    };
    match catalog.borrow_book(&member_id, &isbn) {
        Ok(()) => {
            let held = catalog
                .member(&member_id)
                .map(|m| m.borrowed_books.len())
                .unwrap_or(0);
            println!("Borrowed '{isbn}'. Member now holds {held} book(s).");
        }
        Err(err) => println!("error: {err}"),
    }
    Ok(())
}

fn return_book<I>(catalog: &mut Catalog, lines: &mut I) -> io::Result<()>
where
    I: Iterator<Item = io::Result<String>>,
{
    let Some(member_id) = prompt(lines, "Member ID: ")? else {
        return Ok(());
    };
    let Some(isbn) = prompt(lines, "ISBN to return: ")? else {
        return Ok(());
    };
    report(catalog.return_book(&member_id, &isbn), "Book returned.");
    Ok(())
}
