//! In-memory library catalog with borrow/return rules.
//!
//! # Examples
//!
//! Cataloging, lending, and returning with [`core::store::Catalog`]:
//! ```
//! use circulib::{
//!     book::BookDraft,
//!     core::store::Catalog,
//!     types::Genre,
//! };
//!
//! let mut catalog = Catalog::new();
//! catalog.add_book(BookDraft {
//!     isbn: "978-0735211292".to_string(),
//!     title: "Big Magic".to_string(),
//!     author: "Elizabeth Gilbert".to_string(),
//!     genre: Genre::SelfHelp,
//!     total_copies: 2,
//! }).expect("add book");
//!
//! let member_id = catalog.add_member("Fatmata Bangura", "fatmata@example.com").expect("add member");
//! assert_eq!(member_id, "MBR001");
//!
//! catalog.borrow_book(&member_id, "978-0735211292").expect("borrow");
//! assert_eq!(catalog.book("978-0735211292").unwrap().available_copies, 1);
//!
//! catalog.return_book(&member_id, "978-0735211292").expect("return");
//! assert_eq!(catalog.book("978-0735211292").unwrap().available_copies, 2);
//! ```
//!
//! Typed field updates at the stringly boundary:
//! ```
//! use circulib::{book::BookDraft, core::store::Catalog, book::BookField, types::Genre};
//!
//! let mut catalog = Catalog::new();
//! catalog.add_book(BookDraft {
//!     isbn: "978-1".to_string(),
//!     title: "T".to_string(),
//!     author: "A".to_string(),
//!     genre: Genre::Mystery,
//!     total_copies: 1,
//! }).expect("add book");
//!
//! let field = BookField::parse("total_copies", "4").expect("parse");
//! catalog.update_book("978-1", field).expect("update");
//! assert_eq!(catalog.book("978-1").unwrap().total_copies, 4);
//!
//! assert!(BookField::parse("total_copies", "not-a-number").is_err());
//! ```
#![deny(missing_docs)]

/// Book record, draft, and typed field updates.
pub mod book;
/// Interactive menu, scripted demo, and console rendering.
pub mod cli;
/// In-memory authoritative catalog store.
pub mod core;
/// Catalog failure taxonomy.
pub mod error;
/// Member record and typed field updates.
pub mod member;
/// Shared key aliases, limits, and catalog enums.
pub mod types;
