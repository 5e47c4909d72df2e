//! # cinesim Core
//!
//! Core library for cinesim.
//!
//! This crate provides the catalog model and the two pieces of logic that
//! produce a similarity table:
//!
//! - [`CatalogEntry`] - One movie: title, genre, director, four stars, raw rating
//! - [`score`] / [`explain`] - Additive pairwise similarity between two entries
//! - [`Ranker`] - Exhaustive all-pairs ranking into a [`SimilarityTable`]
//! - [`TableStats`] - Summary of a built table
//!
//! ## Example
//!
//! ```rust
//! use cinesim_core::{CatalogEntry, build_table};
//!
//! let catalog = vec![
//!     CatalogEntry::new("A", "Drama", "X", ["a", "b", "c", "d"], "8.0"),
//!     CatalogEntry::new("B", "Drama", "Y", ["a", "e", "f", "g"], "7.0"),
//! ];
//!
//! let table = build_table(&catalog);
//! let ranked = table.get("A").unwrap();
//! assert_eq!(ranked[0].title, "B");
//! assert!((ranked[0].score - 1.2).abs() < 1e-9);
//! ```

pub mod entry;
pub mod error;
pub mod score;
pub mod rank;
pub mod stats;

pub use entry::{CatalogEntry, STAR_SLOTS};
pub use error::{Error, Result};
pub use score::{explain, score, ScoreBreakdown};
pub use rank::{build_table, Ranker, ScoredCandidate, SimilarityTable, DEFAULT_LIMIT};
pub use stats::TableStats;
