//! All-pairs ranking
//!
//! Every subject is scored against every other entry of the catalog, the
//! candidates are stable-sorted by descending score and the head of the list
//! is kept. There is no index and no caching: the catalog is expected to be
//! small enough (hundreds to low thousands of entries) that O(n²) scoring is
//! tractable, and exact tie order depends on plain catalog iteration.

use crate::entry::CatalogEntry;
use crate::score::score;
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Number of candidates kept per subject unless configured otherwise
pub const DEFAULT_LIMIT: usize = 10;

/// A candidate title with its similarity to the current subject
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredCandidate {
    pub title: String,
    pub score: f64,
}

/// Ranked candidate lists keyed by subject title
///
/// Serializes as a plain JSON object. Keys are kept sorted so repeated runs
/// over the same catalog produce identical documents.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SimilarityTable {
    entries: BTreeMap<String, Vec<ScoredCandidate>>,
}

impl SimilarityTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a ranked list, replacing whatever was stored under `title`
    pub fn insert(&mut self, title: String, ranked: Vec<ScoredCandidate>) {
        self.entries.insert(title, ranked);
    }

    pub fn get(&self, title: &str) -> Option<&[ScoredCandidate]> {
        self.entries.get(title).map(Vec::as_slice)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[ScoredCandidate])> {
        self.entries
            .iter()
            .map(|(title, ranked)| (title.as_str(), ranked.as_slice()))
    }
}

/// Drives the exhaustive pairwise comparison over a catalog
#[derive(Debug, Clone, Copy)]
pub struct Ranker {
    limit: usize,
}

impl Default for Ranker {
    fn default() -> Self {
        Self { limit: DEFAULT_LIMIT }
    }
}

impl Ranker {
    /// Keep at most `limit` candidates per subject
    pub fn with_limit(limit: usize) -> Result<Self> {
        if limit == 0 {
            return Err(Error::InvalidConfig(
                "ranking limit must be at least 1".to_string(),
            ));
        }
        Ok(Self { limit })
    }

    pub fn limit(&self) -> usize {
        self.limit
    }

    /// Rank every other catalog entry against `subject`
    ///
    /// Entries sharing the subject's title are skipped, whether or not they
    /// are the same row. Equal scores keep catalog order.
    pub fn rank_subject(&self, subject: &CatalogEntry, catalog: &[CatalogEntry]) -> Vec<ScoredCandidate> {
        let mut ranked: Vec<ScoredCandidate> = catalog
            .iter()
            .filter(|candidate| candidate.title != subject.title)
            .map(|candidate| ScoredCandidate {
                title: candidate.title.clone(),
                score: score(subject, candidate),
            })
            .collect();

        // sort_by is stable
        ranked.sort_by(|a, b| b.score.total_cmp(&a.score));
        ranked.truncate(self.limit);
        ranked
    }

    /// Build the similarity table for the whole catalog
    ///
    /// Subjects are processed in catalog order; a later row with a repeated
    /// title replaces the list stored by an earlier one.
    pub fn build_table(&self, catalog: &[CatalogEntry]) -> SimilarityTable {
        let mut table = SimilarityTable::new();

        for subject in catalog {
            let ranked = self.rank_subject(subject, catalog);
            tracing::trace!(
                "Ranked {} candidates for {:?}",
                ranked.len(),
                subject.title
            );
            table.insert(subject.title.clone(), ranked);
        }

        tracing::debug!(
            "Built similarity table: {} subjects from {} catalog rows",
            table.len(),
            catalog.len()
        );
        table
    }
}

/// Build the similarity table with the default limit of ten candidates
pub fn build_table(catalog: &[CatalogEntry]) -> SimilarityTable {
    Ranker::default().build_table(catalog)
}
