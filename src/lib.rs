//! # cinesim
//!
//! Batch similarity tables for a movie catalog.
//!
//! For every movie in a catalog, cinesim scores every other movie with a
//! hand-crafted additive score (genre, director, shared cast, rating) and
//! keeps the ten best matches. The result is a JSON object keyed by title.
//!
//! ## Quick Start
//!
//! ### As a Binary
//!
//! ```bash
//! cargo install cinesim
//! cinesim --input static/imdb.csv --output similarity.json
//! ```
//!
//! ### As a Library
//!
//! ```rust
//! use cinesim::prelude::*;
//!
//! let catalog = vec![
//!     CatalogEntry::new("A", "Drama", "X", ["a", "b", "c", "d"], "8.0"),
//!     CatalogEntry::new("B", "Drama", "Y", ["a", "e", "f", "g"], "7.0"),
//! ];
//!
//! let table = Ranker::default().build_table(&catalog);
//! assert_eq!(table.get("B").unwrap()[0].title, "A");
//! ```
//!
//! ## Crate Structure
//!
//! - `cinesim-core` - Catalog model, scorer, ranker
//! - `cinesim-storage` - CSV catalog loading, atomic JSON output, job configuration
//!
//! ## Scale
//!
//! Ranking is exhaustive: every subject is compared with every candidate,
//! O(n²) in the catalog size. That is intended for catalogs of hundreds to
//! low thousands of movies.

pub mod job;

// Re-export core types
pub use cinesim_core::{
    CatalogEntry, ScoredCandidate, SimilarityTable,
    Ranker, ScoreBreakdown, TableStats,
    build_table, explain, score,
    Error, Result,
};

// Re-export storage
pub use cinesim_storage::{load_catalog, load_table, read_catalog, save_table, JobConfig};

pub use job::run;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        CatalogEntry, ScoredCandidate, SimilarityTable,
        Ranker, ScoreBreakdown, TableStats,
        Error, Result,
        JobConfig,
        run,
    };
}
