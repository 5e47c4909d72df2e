//! CSV catalog loading
//!
//! Columns are located by header name, so extra columns (poster links,
//! release year, overview, gross, ...) are ignored and column order does not
//! matter. Short rows are accepted; absent cells become empty strings, as do
//! the usual "not available" markers.

use cinesim_core::{CatalogEntry, Error, Result};
use serde::Deserialize;
use std::collections::HashSet;
use std::path::Path;

pub const TITLE_COLUMN: &str = "Series_Title";
pub const GENRE_COLUMN: &str = "Genre";
pub const DIRECTOR_COLUMN: &str = "Director";
pub const STAR_COLUMNS: [&str; 4] = ["Star1", "Star2", "Star3", "Star4"];
pub const RATING_COLUMN: &str = "IMDB_Rating";

/// Cell values treated as missing and normalized to the empty string
const NA_MARKERS: &[&str] = &[
    "#N/A", "#N/A N/A", "#NA", "-1.#IND", "-1.#QNAN", "-NaN", "-nan", "1.#IND", "1.#QNAN",
    "<NA>", "N/A", "NA", "NULL", "NaN", "None", "n/a", "nan", "null",
];

#[derive(Debug, Deserialize)]
struct CatalogRow {
    #[serde(rename = "Series_Title", default)]
    title: String,
    #[serde(rename = "Genre", default)]
    genre: String,
    #[serde(rename = "Director", default)]
    director: String,
    #[serde(rename = "Star1", default)]
    star1: String,
    #[serde(rename = "Star2", default)]
    star2: String,
    #[serde(rename = "Star3", default)]
    star3: String,
    #[serde(rename = "Star4", default)]
    star4: String,
    #[serde(rename = "IMDB_Rating", default)]
    rating: String,
}

fn normalize(value: String) -> String {
    if NA_MARKERS.contains(&value.as_str()) {
        String::new()
    } else {
        value
    }
}

impl From<CatalogRow> for CatalogEntry {
    fn from(row: CatalogRow) -> Self {
        Self {
            title: normalize(row.title),
            genre: normalize(row.genre),
            director: normalize(row.director),
            stars: [
                normalize(row.star1),
                normalize(row.star2),
                normalize(row.star3),
                normalize(row.star4),
            ],
            rating: normalize(row.rating),
        }
    }
}

fn required_columns() -> impl Iterator<Item = &'static str> {
    [TITLE_COLUMN, GENRE_COLUMN, DIRECTOR_COLUMN]
        .into_iter()
        .chain(STAR_COLUMNS)
        .chain([RATING_COLUMN])
}

fn map_csv_error(path: &Path, err: csv::Error) -> Error {
    match err.kind() {
        csv::ErrorKind::Io(io) if io.kind() == std::io::ErrorKind::NotFound => {
            Error::CatalogNotFound(path.display().to_string())
        }
        _ => Error::MalformedCatalog(err.to_string()),
    }
}

/// Load a catalog from any CSV reader
pub fn read_catalog<R: std::io::Read>(reader: R) -> Result<Vec<CatalogEntry>> {
    let mut reader = csv::ReaderBuilder::new().flexible(true).from_reader(reader);
    load_rows(&mut reader, Path::new("<reader>"))
}

/// Load a catalog from a CSV file
///
/// Fails if the file is missing or unreadable, if a required column is absent
/// from the header, or if a row cannot be decoded.
pub fn load_catalog<P: AsRef<Path>>(path: P) -> Result<Vec<CatalogEntry>> {
    let path = path.as_ref();
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .from_path(path)
        .map_err(|e| map_csv_error(path, e))?;

    let catalog = load_rows(&mut reader, path)?;
    tracing::info!("Loaded {} catalog rows from {:?}", catalog.len(), path);
    Ok(catalog)
}

fn load_rows<R: std::io::Read>(reader: &mut csv::Reader<R>, path: &Path) -> Result<Vec<CatalogEntry>> {
    let headers = reader.headers().map_err(|e| map_csv_error(path, e))?.clone();
    for column in required_columns() {
        if !headers.iter().any(|h| h == column) {
            return Err(Error::MissingColumn(column.to_string()));
        }
    }

    let mut catalog = Vec::new();
    for record in reader.records() {
        let mut record = record.map_err(|e| map_csv_error(path, e))?;
        // Short rows are padded so absent trailing cells read as empty
        while record.len() < headers.len() {
            record.push_field("");
        }
        let row: CatalogRow = record
            .deserialize(Some(&headers))
            .map_err(|e| map_csv_error(path, e))?;
        catalog.push(CatalogEntry::from(row));
    }

    warn_duplicate_titles(&catalog);
    Ok(catalog)
}

/// Titles that occur on more than one row, in order of first repetition
pub fn duplicate_titles(catalog: &[CatalogEntry]) -> Vec<&str> {
    let mut seen = HashSet::new();
    let mut reported = HashSet::new();
    let mut duplicates = Vec::new();

    for entry in catalog {
        let title = entry.title.as_str();
        if !seen.insert(title) && reported.insert(title) {
            duplicates.push(title);
        }
    }
    duplicates
}

fn warn_duplicate_titles(catalog: &[CatalogEntry]) {
    for title in duplicate_titles(catalog) {
        tracing::warn!("Duplicate title {:?}: later rows replace earlier ones", title);
    }
}
