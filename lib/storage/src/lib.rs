pub mod catalog;
pub mod config;
pub mod table;

pub use catalog::{duplicate_titles, load_catalog, read_catalog};
pub use config::{JobConfig, DEFAULT_INPUT_SOURCE, DEFAULT_OUTPUT_DOCUMENT};
pub use table::{load_table, save_table};
