//! Catalog entries
//!
//! One row of the source catalog. Every field is a plain string: missing
//! values are normalized to the empty string by the loader, and nothing here
//! validates them. Comparisons elsewhere treat them as literal values.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Number of billed stars carried by every entry
pub const STAR_SLOTS: usize = 4;

/// A single movie in the catalog
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogEntry {
    /// Title, used both as loop identity and as output key
    pub title: String,
    pub genre: String,
    pub director: String,
    /// Billed stars in order; duplicates are allowed
    pub stars: [String; STAR_SLOTS],
    /// Raw rating text, expected to be a decimal number but may be empty or malformed
    pub rating: String,
}

impl CatalogEntry {
    pub fn new(
        title: impl Into<String>,
        genre: impl Into<String>,
        director: impl Into<String>,
        stars: [&str; STAR_SLOTS],
        rating: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            genre: genre.into(),
            director: director.into(),
            stars: stars.map(str::to_string),
            rating: rating.into(),
        }
    }

    /// Parse the rating as a decimal number.
    ///
    /// Surrounding whitespace is ignored. Empty, non-numeric and non-finite
    /// values (`nan`, `inf`) yield `None`.
    pub fn parsed_rating(&self) -> Option<f64> {
        self.rating
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|r| r.is_finite())
    }

    /// Distinct star names; repeated names collapse to one
    pub fn star_set(&self) -> HashSet<&str> {
        self.stars.iter().map(String::as_str).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parsed_rating() {
        let mut entry = CatalogEntry::new("A", "Drama", "X", ["a", "b", "c", "d"], "8.5");
        assert_eq!(entry.parsed_rating(), Some(8.5));

        entry.rating = " 7 ".to_string();
        assert_eq!(entry.parsed_rating(), Some(7.0));

        entry.rating = String::new();
        assert_eq!(entry.parsed_rating(), None);

        entry.rating = "N/A".to_string();
        assert_eq!(entry.parsed_rating(), None);

        entry.rating = "NaN".to_string();
        assert_eq!(entry.parsed_rating(), None);
    }

    #[test]
    fn test_star_set_collapses_duplicates() {
        let entry = CatalogEntry::new("A", "Drama", "X", ["a", "a", "b", ""], "");
        let stars = entry.star_set();
        assert_eq!(stars.len(), 3);
        assert!(stars.contains(""));
    }
}
