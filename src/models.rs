//! Domain models shared across the search pipeline.

use serde::{Deserialize, Serialize};

/// A named record from the upstream catalog. Identity is the name;
/// duplicates returned by the upstream are preserved as-is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pokemon {
    pub name: String,
}

/// A search result with the query matches marked inline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HighlightedPokemon {
    pub name: String,
    pub highlight: String,
}

/// Result ordering requested by the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortMode {
    Alphabetical,
    Length,
}

impl SortMode {
    /// Resolve a free-form sort token. Only a "length" spelling (any
    /// casing) selects [`SortMode::Length`]; every other token, and an
    /// absent one, falls back to alphabetical. Unrecognized tokens are
    /// not errors.
    pub fn from_token(token: Option<&str>) -> Self {
        match token {
            Some(t) if t.eq_ignore_ascii_case("length") => SortMode::Length,
            _ => SortMode::Alphabetical,
        }
    }
}
