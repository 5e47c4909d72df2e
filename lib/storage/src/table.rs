//! Similarity table persistence
//!
//! The table is written as one pretty-printed JSON object. The document is
//! serialized in memory first and then swapped into place with an atomic
//! rename, so a failed run never leaves a truncated file behind.

use atomicwrites::{AtomicFile, OverwriteBehavior};
use cinesim_core::{Error, Result, SimilarityTable};
use std::io::Write;
use std::path::Path;

/// Write `table` to `path`, replacing any existing document
pub fn save_table<P: AsRef<Path>>(table: &SimilarityTable, path: P) -> Result<()> {
    let path = path.as_ref();
    let data = serde_json::to_vec_pretty(table)
        .map_err(|e| Error::Serialization(e.to_string()))?;

    AtomicFile::new(path, OverwriteBehavior::AllowOverwrite)
        .write(|f| f.write_all(&data))
        .map_err(|e| Error::Persistence(format!("failed to write {}: {}", path.display(), e)))?;

    tracing::debug!("Wrote {} bytes to {:?}", data.len(), path);
    Ok(())
}

/// Read a previously written table back from disk
pub fn load_table<P: AsRef<Path>>(path: P) -> Result<SimilarityTable> {
    let data = std::fs::read(path.as_ref())?;
    serde_json::from_slice(&data).map_err(|e| Error::Serialization(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use cinesim_core::{build_table, CatalogEntry};

    fn sample_table() -> SimilarityTable {
        build_table(&[
            CatalogEntry::new("A", "Drama", "X", ["a", "b", "c", "d"], "8.0"),
            CatalogEntry::new("B", "Drama", "Y", ["a", "e", "f", "g"], "7.0"),
        ])
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("similarity.json");
        let table = sample_table();

        save_table(&table, &path).unwrap();
        assert_eq!(load_table(&path).unwrap(), table);
    }

    #[test]
    fn test_document_shape() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("similarity.json");
        save_table(&sample_table(), &path).unwrap();

        let value: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        let a = value["A"].as_array().unwrap();
        assert_eq!(a.len(), 1);
        assert_eq!(a[0]["title"], "B");
        assert!((a[0]["score"].as_f64().unwrap() - 1.2).abs() < 1e-9);
        assert_eq!(a[0].as_object().unwrap().len(), 2);
    }

    #[test]
    fn test_overwrites_existing_document() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("similarity.json");
        std::fs::write(&path, "stale content that is much longer than needed").unwrap();

        save_table(&SimilarityTable::new(), &path).unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "{}");
    }

    #[test]
    fn test_unwritable_destination() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("similarity.json");

        let err = save_table(&sample_table(), &path).unwrap_err();
        assert!(matches!(err, Error::Persistence(_)));
        assert!(!path.exists());
    }
}
