//! One-shot batch run: load the catalog, rank it, write the table

use cinesim_core::{explain, CatalogEntry, Ranker, Result, TableStats};
use cinesim_storage::{load_catalog, save_table, JobConfig};
use tracing::{debug, info};

/// Run the whole pipeline described by `config`
///
/// Nothing is written unless loading and ranking both succeed.
pub fn run(config: &JobConfig) -> Result<TableStats> {
    let ranker = Ranker::with_limit(config.limit)?;

    debug!("Keeping up to {} candidates per title", ranker.limit());

    let catalog = load_catalog(&config.input_source)?;
    let table = ranker.build_table(&catalog);
    let stats = TableStats::compute(&table, catalog.len());

    info!(
        "Ranked {} subjects ({} candidates kept, {:.2} per subject)",
        stats.subjects, stats.ranked_candidates, stats.avg_list_len
    );
    if let (Some((subject, candidate)), Some(best)) = (&stats.best_pair, stats.best_score) {
        let signal = find_entry(&catalog, subject)
            .zip(find_entry(&catalog, candidate))
            .and_then(|(s, c)| explain(s, c).dominant_signal());
        debug!(
            "Best pair {:?} -> {:?} scored {} (dominant signal: {})",
            subject,
            candidate,
            best,
            signal.unwrap_or("none")
        );
    }

    save_table(&table, &config.output_document)?;
    info!("Similarity JSON saved to {}", config.output_document.display());

    Ok(stats)
}

/// The row that ended up owning `title`: later rows win
fn find_entry<'a>(catalog: &'a [CatalogEntry], title: &str) -> Option<&'a CatalogEntry> {
    catalog.iter().rev().find(|entry| entry.title == title)
}
