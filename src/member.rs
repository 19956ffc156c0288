//! Member record and typed field updates.

use serde::{Deserialize, Serialize};

use crate::{
    error::CatalogError,
    types::{BORROW_LIMIT, Isbn, MemberId},
};

/// Registered library patron.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Member {
    /// Stable generated key.
    pub member_id: MemberId,
    /// Display name.
    pub name: String,
    /// Contact email, unique across members.
    pub email: String,
    /// ISBNs currently held, in acquisition order.
    pub borrowed_books: Vec<Isbn>,
}

impl Member {
    /// True when the member cannot borrow any more books.
    pub fn at_borrow_limit(&self) -> bool {
        self.borrowed_books.len() >= BORROW_LIMIT
    }

    /// True when the member currently holds `isbn`.
    pub fn holds(&self, isbn: &str) -> bool {
        self.borrowed_books.iter().any(|held| held == isbn)
    }
}

/// One updatable member attribute carrying its typed replacement value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MemberField {
    /// Replace the display name.
    Name(String),
    /// Replace the contact email.
    Email(String),
}

impl MemberField {
    /// Builds a typed field update from raw field-name and value text.
    pub fn parse(field: &str, value: &str) -> Result<Self, CatalogError> {
        match field {
            "name" => Ok(MemberField::Name(value.to_string())),
            "email" => Ok(MemberField::Email(value.to_string())),
            other => Err(CatalogError::UnknownMemberField(other.to_string())),
        }
    }
}
