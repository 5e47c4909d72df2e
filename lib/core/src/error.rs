use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Catalog source not found: {0}")]
    CatalogNotFound(String),

    #[error("Catalog is missing required column: {0}")]
    MissingColumn(String),

    #[error("Malformed catalog: {0}")]
    MalformedCatalog(String),

    #[error("Persistence error: {0}")]
    Persistence(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}
