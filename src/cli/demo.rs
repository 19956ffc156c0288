//! Scripted walkthrough exercising every lending rule on seeded data.

use crate::{
    book::{BookDraft, BookField},
    core::store::Catalog,
    member::MemberField,
    types::{Genre, MemberId, SearchField},
};

use super::render;

const RULE: &str = "----------------------------------------------------------------------";

/// Seed books: (isbn, title, author, genre, copies).
const BOOKS: [(&str, &str, &str, Genre, u32); 10] = [
    ("978-0735211292", "Big Magic", "Elizabeth Gilbert", Genre::SelfHelp, 5),
    ("978-0385543765", "Where the Crawdads Sing", "Delia Owens", Genre::Mystery, 4),
    ("978-0525562023", "The Vanishing Half", "Brit Bennett", Genre::ContemporaryFiction, 3),
    ("978-1984819873", "The Midnight Library", "Matt Haig", Genre::ContemporaryFiction, 6),
    ("978-0062951626", "Untamed", "Glennon Doyle", Genre::SelfHelp, 4),
    ("978-1501160769", "Becoming", "Michelle Obama", Genre::Biography, 5),
    ("978-0525562696", "The Four Winds", "Kristin Hannah", Genre::HistoricalFiction, 3),
    ("978-0593318480", "Lessons in Chemistry", "Bonnie Garmus", Genre::ContemporaryFiction, 4),
    ("978-0593299598", "The Personal Librarian", "Marie Benedict", Genre::HistoricalFiction, 3),
    ("978-0593356147", "The Christie Affair", "Nina de Gramont", Genre::Mystery, 1),
];

/// Seed members: (name, email).
const MEMBERS: [(&str, &str); 10] = [
    ("Fatmata Bangura", "fatmata.bangura@example.com"),
    ("Kadie Kamara", "kadie.kamara@example.com"),
    ("Isatu Sesay", "isatu.sesay@example.com"),
    ("Mariama Koroma", "mariama.koroma@example.com"),
    ("Hawa Conteh", "hawa.conteh@example.com"),
    ("Aminata Turay", "aminata.turay@example.com"),
    ("Kadiatu Jalloh", "kadiatu.jalloh@example.com"),
    ("Sia Kabia", "sia.kabia@example.com"),
    ("Yabom Sesay", "yabom.sesay@example.com"),
    ("Memuna Mansaray", "memuna.mansaray@example.com"),
];

/// Runs the walkthrough; with `json` the final state is printed as a
/// pretty-printed snapshot instead of text.
pub fn run(json: bool) {
    let mut catalog = Catalog::new();

    section("1. Adding books");
    for (isbn, title, author, genre, copies) in BOOKS {
        match catalog.add_book(BookDraft {
            isbn: isbn.to_string(),
            title: title.to_string(),
            author: author.to_string(),
            genre,
            total_copies: copies,
        }) {
            Ok(()) => println!("Added '{title}' ({copies} copies)"),
            Err(err) => println!("error: {err}"),
        }
    }

    section("2. Registering members");
    let mut member_ids: Vec<MemberId> = Vec::new();
    for (name, email) in MEMBERS {
        match catalog.add_member(name, email) {
            Ok(member_id) => {
                println!("Registered {name} with ID {member_id}");
                member_ids.push(member_id);
            }
            Err(err) => println!("error: {err}"),
        }
    }

    section("3. Searching the catalog");
    demo_search(&catalog, SearchField::Title, "library");
    demo_search(&catalog, SearchField::Author, "Gilbert");

    let fatmata = member_ids[0].clone();
    let kadie = member_ids[1].clone();

    section("4. Borrowing up to the limit");
    for isbn in ["978-0735211292", "978-0385543765", "978-0593356147"] {
        demo_borrow(&mut catalog, &fatmata, isbn);
    }
    println!("Attempting a fourth borrow:");
    demo_borrow(&mut catalog, &fatmata, "978-1984819873");

    section("5. Borrowing an exhausted title");
    demo_borrow(&mut catalog, &kadie, "978-0593356147");

    section("6. Returning frees the copy");
    match catalog.return_book(&fatmata, "978-0593356147") {
        Ok(()) => println!("Fatmata returned 'The Christie Affair'"),
        Err(err) => println!("error: {err}"),
    }
    demo_borrow(&mut catalog, &kadie, "978-0593356147");

    section("7. Updating records");
    match BookField::parse("total_copies", "8") {
        Ok(field) => match catalog.update_book("978-1984819873", field) {
            Ok(()) => println!("'The Midnight Library' now has 8 copies"),
            Err(err) => println!("error: {err}"),
        },
        Err(err) => println!("error: {err}"),
    }
    let isatu = member_ids[2].clone();
    match catalog.update_member(&isatu, MemberField::Email("isatu.new@example.com".to_string()))
    {
        Ok(()) => println!("Updated Isatu's email"),
        Err(err) => println!("error: {err}"),
    }

    section("8. Deletion guards");
    println!("Deleting a member who still holds books:");
    if let Err(err) = catalog.delete_member(&fatmata) {
        println!("error: {err}");
    }
    println!("Deleting a book with borrowed copies:");
    if let Err(err) = catalog.delete_book("978-0735211292") {
        println!("error: {err}");
    }

    section("9. Final state");
    if json {
        match serde_json::to_string_pretty(&catalog.export_snapshot()) {
            Ok(dump) => println!("{dump}"),
            Err(err) => eprintln!("error: failed to serialize snapshot: {err}"),
        }
    } else {
        render::print_all_books(&catalog);
        println!();
        render::print_all_members(&catalog);
    }
}

fn section(title: &str) {
    println!();
    println!("{title}");
    println!("{RULE}");
}

fn demo_search(catalog: &Catalog, field: SearchField, term: &str) {
    match catalog.search_books(field, term) {
        Ok(results) => {
            println!("Search '{term}' matched {} book(s)", results.len());
            for book in results {
                println!("   {} by {}", book.title, book.author);
            }
        }
        Err(err) => println!("error: {err}"),
    }
}

fn demo_borrow(catalog: &mut Catalog, member_id: &str, isbn: &str) {
    match catalog.borrow_book(member_id, isbn) {
        Ok(()) => {
            let title = catalog
                .book(isbn)
                .map(|b| b.title.clone())
                .unwrap_or_else(|| isbn.to_string());
            println!("{member_id} borrowed '{title}'");
        }
        Err(err) => println!("error: {err}"),
    }
}
