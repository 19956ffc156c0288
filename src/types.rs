//! Shared key aliases, limits, and catalog enums.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CatalogError;

/// Caller-supplied unique book key.
pub type Isbn = String;
/// System-generated unique member key.
pub type MemberId = String;

/// Maximum number of books a member may hold at once.
pub const BORROW_LIMIT: usize = 3;
/// Prefix for generated member ids; the counter is zero-padded to three digits.
pub const MEMBER_ID_PREFIX: &str = "MBR";

/// Closed set of shelving genres.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Genre {
    /// Romance.
    Romance,
    /// Contemporary fiction.
    #[serde(rename = "Contemporary Fiction")]
    ContemporaryFiction,
    /// Self-help.
    #[serde(rename = "Self-Help")]
    SelfHelp,
    /// Biography.
    Biography,
    /// Mystery.
    Mystery,
    /// Historical fiction.
    #[serde(rename = "Historical Fiction")]
    HistoricalFiction,
    /// Health and wellness.
    #[serde(rename = "Health & Wellness")]
    HealthAndWellness,
}

impl Genre {
    /// Every genre, in shelving-label order.
    pub const ALL: [Genre; 7] = [
        Genre::Romance,
        Genre::ContemporaryFiction,
        Genre::SelfHelp,
        Genre::Biography,
        Genre::Mystery,
        Genre::HistoricalFiction,
        Genre::HealthAndWellness,
    ];

    /// Catalog label for this genre.
    pub fn label(self) -> &'static str {
        match self {
            Genre::Romance => "Romance",
            Genre::ContemporaryFiction => "Contemporary Fiction",
            Genre::SelfHelp => "Self-Help",
            Genre::Biography => "Biography",
            Genre::Mystery => "Mystery",
            Genre::HistoricalFiction => "Historical Fiction",
            Genre::HealthAndWellness => "Health & Wellness",
        }
    }
}

impl fmt::Display for Genre {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Genre {
    type Err = CatalogError;

    /// Labels are matched exactly, including case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Genre::ALL
            .into_iter()
            .find(|g| g.label() == s)
            .ok_or_else(|| CatalogError::UnknownGenre(s.to_string()))
    }
}

/// Book attribute a search scans against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchField {
    /// Match against the title.
    Title,
    /// Match against the author.
    Author,
}

impl FromStr for SearchField {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "title" => Ok(SearchField::Title),
            "author" => Ok(SearchField::Author),
            other => Err(CatalogError::UnknownSearchField(other.to_string())),
        }
    }
}
