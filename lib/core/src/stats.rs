//! Summary statistics for a built similarity table

use crate::rank::SimilarityTable;
use serde::Serialize;

/// Run summary reported once a table is built
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TableStats {
    /// Rows read from the catalog
    pub catalog_rows: usize,
    /// Distinct titles in the table
    pub subjects: usize,
    /// Rows whose title repeated an earlier row
    pub duplicate_rows: usize,
    /// Candidates kept across all ranked lists
    pub ranked_candidates: usize,
    /// Mean ranked list length
    pub avg_list_len: f64,
    /// Highest score anywhere in the table
    pub best_score: Option<f64>,
    /// Subject and candidate titles of the highest-scoring pair
    pub best_pair: Option<(String, String)>,
}

impl TableStats {
    /// Compute stats from a table built over `catalog_rows` rows
    pub fn compute(table: &SimilarityTable, catalog_rows: usize) -> Self {
        let subjects = table.len();
        let ranked_candidates: usize = table.iter().map(|(_, ranked)| ranked.len()).sum();
        let avg_list_len = if subjects == 0 {
            0.0
        } else {
            ranked_candidates as f64 / subjects as f64
        };

        // Lists are sorted, so the head of each is its best
        let mut best: Option<(&str, &str, f64)> = None;
        for (subject, ranked) in table.iter() {
            if let Some(head) = ranked.first() {
                if best.map_or(true, |(_, _, score)| head.score > score) {
                    best = Some((subject, head.title.as_str(), head.score));
                }
            }
        }

        Self {
            catalog_rows,
            subjects,
            duplicate_rows: catalog_rows.saturating_sub(subjects),
            ranked_candidates,
            avg_list_len,
            best_score: best.map(|(_, _, score)| score),
            best_pair: best.map(|(s, c, _)| (s.to_string(), c.to_string())),
        }
    }
}
