use clap::Parser;
use cinesim::JobConfig;
use cinesim_storage::{DEFAULT_INPUT_SOURCE, DEFAULT_OUTPUT_DOCUMENT};
use std::path::PathBuf;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

/// Build a movie similarity table from a CSV catalog
#[derive(Parser, Debug)]
#[command(name = "cinesim")]
#[command(about = "Rank the most similar movies for every title in a catalog", long_about = None)]
struct Args {
    /// Path to the CSV catalog
    #[arg(short, long, default_value = DEFAULT_INPUT_SOURCE)]
    input: PathBuf,

    /// Path of the JSON document to write
    #[arg(short, long, default_value = DEFAULT_OUTPUT_DOCUMENT)]
    output: PathBuf,

    /// Candidates kept per title
    #[arg(long, default_value_t = cinesim_core::DEFAULT_LIMIT)]
    limit: usize,

    /// Log level
    #[arg(long, default_value = "info")]
    log_level: String,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let log_level = match args.log_level.as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    info!("Starting cinesim v{}", env!("CARGO_PKG_VERSION"));
    info!("Catalog: {:?}", args.input);
    info!("Output: {:?}", args.output);

    let config = JobConfig {
        input_source: args.input,
        output_document: args.output,
        limit: args.limit,
    };

    let stats = cinesim::run(&config)?;
    if stats.duplicate_rows > 0 {
        info!("{} rows shared a title with an earlier row", stats.duplicate_rows);
    }

    Ok(())
}
