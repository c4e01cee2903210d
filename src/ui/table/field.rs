//! Column identifiers of the artworks table.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// A sortable and filterable column of the table.
///
/// The set is fixed: filters always carry exactly one predicate per variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    Id,
    Title,
    ArtistDisplay,
}

impl Field {
    /// All columns in display order.
    pub const ALL: [Field; 3] = [Field::Id, Field::Title, Field::ArtistDisplay];

    /// Attribute name as it appears in the API payload.
    pub fn as_str(self) -> &'static str {
        match self {
            Field::Id => "id",
            Field::Title => "title",
            Field::ArtistDisplay => "artist_display",
        }
    }

    /// Column header label.
    pub fn header(self) -> &'static str {
        match self {
            Field::Id => "ID",
            Field::Title => "Title",
            Field::ArtistDisplay => "Artist",
        }
    }

    /// Placeholder shown in the column's filter box.
    pub fn filter_placeholder(self) -> &'static str {
        match self {
            Field::Id => "Search ID",
            Field::Title => "Search Title",
            Field::ArtistDisplay => "Search Artist",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a string names no known column.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown field '{0}' (expected one of: id, title, artist_display)")]
pub struct UnknownField(pub String);

impl FromStr for Field {
    type Err = UnknownField;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "id" => Ok(Field::Id),
            "title" => Ok(Field::Title),
            "artist_display" | "artist" => Ok(Field::ArtistDisplay),
            _ => Err(UnknownField(s.to_string())),
        }
    }
}
