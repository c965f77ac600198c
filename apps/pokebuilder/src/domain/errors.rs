use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while loading the creature catalog
///
/// All of them are fatal at startup: the catalog is read once and nothing
/// works without it.
#[derive(Debug, Error)]
pub enum DataSourceError {
    #[error("catalog file not found: {}", path.display())]
    NotFound { path: PathBuf },

    #[error("failed to read catalog {}: {source}", path.display())]
    Unreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed catalog {}: {reason}", path.display())]
    Malformed { path: PathBuf, reason: String },

    /// Malformed catalog data read from a source with no path
    #[error("malformed catalog data: {reason}")]
    InvalidData { reason: String },
}

/// Errors raised by the team store
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("team store {} is corrupt: {reason}", path.display())]
    Corrupt { path: PathBuf, reason: String },

    #[error("I/O error on team store: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to write team store: {0}")]
    Csv(#[from] csv::Error),
}

pub type CatalogResult<T> = Result<T, DataSourceError>;
pub type StoreResult<T> = Result<T, StoreError>;
