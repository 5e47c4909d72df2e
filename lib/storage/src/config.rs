use cinesim_core::DEFAULT_LIMIT;
use std::path::PathBuf;

/// Catalog read when no other source is configured
pub const DEFAULT_INPUT_SOURCE: &str = "static/imdb.csv";
/// Document written when no other destination is configured
pub const DEFAULT_OUTPUT_DOCUMENT: &str = "similarity.json";

/// Locations and ranking settings for one batch run
#[derive(Debug, Clone, PartialEq)]
pub struct JobConfig {
    pub input_source: PathBuf,
    pub output_document: PathBuf,
    /// Candidates kept per subject
    pub limit: usize,
}

impl Default for JobConfig {
    fn default() -> Self {
        Self {
            input_source: PathBuf::from(DEFAULT_INPUT_SOURCE),
            output_document: PathBuf::from(DEFAULT_OUTPUT_DOCUMENT),
            limit: DEFAULT_LIMIT,
        }
    }
}
