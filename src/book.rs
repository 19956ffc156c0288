//! Book record, draft, and typed field updates.

use serde::{Deserialize, Serialize};

use crate::{
    error::CatalogError,
    types::{Genre, Isbn},
};

/// Fully materialized, authoritative book record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    /// Stable catalog key.
    pub isbn: Isbn,
    /// Title text.
    pub title: String,
    /// Author text.
    pub author: String,
    /// Shelving genre.
    pub genre: Genre,
    /// Copies owned by the library.
    pub total_copies: u32,
    /// Copies not currently on loan.
    pub available_copies: u32,
}

impl Book {
    /// Copies currently on loan, as tracked by availability.
    pub fn on_loan(&self) -> u32 {
        self.total_copies.saturating_sub(self.available_copies)
    }

    /// True when at least one copy can be borrowed.
    pub fn is_available(&self) -> bool {
        self.available_copies > 0
    }
}

/// Insert payload used to create a new [`Book`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookDraft {
    /// Stable catalog key.
    pub isbn: String,
    /// Title text.
    pub title: String,
    /// Author text.
    pub author: String,
    /// Shelving genre.
    pub genre: Genre,
    /// Copies owned; availability starts equal to this.
    pub total_copies: u32,
}

/// One updatable book attribute carrying its typed replacement value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BookField {
    /// Replace the title.
    Title(String),
    /// Replace the author.
    Author(String),
    /// Replace the genre.
    Genre(Genre),
    /// Replace the owned copy count; availability is recomputed.
    TotalCopies(u32),
}

impl BookField {
    /// Builds a typed field update from raw field-name and value text.
    ///
    /// This is the defensive boundary for stringly callers: unknown field
    /// names, non-numeric copy counts, and negative copy counts are
    /// rejected here. Emptiness of title/author is checked by the update
    /// itself, after the ISBN lookup.
    pub fn parse(field: &str, value: &str) -> Result<Self, CatalogError> {
        match field {
            "title" => Ok(BookField::Title(value.to_string())),
            "author" => Ok(BookField::Author(value.to_string())),
            "genre" => Ok(BookField::Genre(value.parse()?)),
            "total_copies" => {
                let copies: i64 = value
                    .trim()
                    .parse()
                    .map_err(|_| CatalogError::CopiesNotNumeric(value.to_string()))?;
                if copies < 0 {
                    return Err(CatalogError::CopiesNegative(copies));
                }
                let copies = u32::try_from(copies)
                    .map_err(|_| CatalogError::CopiesNotNumeric(value.to_string()))?;
                Ok(BookField::TotalCopies(copies))
            }
            other => Err(CatalogError::UnknownBookField(other.to_string())),
        }
    }
}
