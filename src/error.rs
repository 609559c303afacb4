//! Error types for fixture generation.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum FixtureError {
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// Not enough postal codes to satisfy the request.
    #[error("postal-code pool has {available} codes but {required} are required")]
    InsufficientPool { available: usize, required: usize },

    #[error("failed to read postal-code table {path}: {source}")]
    PoolRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("malformed postal-code table {path}: {source}")]
    PoolFormat {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("postal-code table {0} is not a mapping")]
    PoolNotMapping(PathBuf),

    /// Window bounds are given in minutes from midnight.
    #[error("invalid time window {start}..{end}")]
    InvalidTimeWindow { start: u32, end: u32 },

    #[error(transparent)]
    Io(#[from] io::Error),

    #[error(transparent)]
    Csv(#[from] csv::Error),

    #[error(transparent)]
    Xlsx(#[from] rust_xlsxwriter::XlsxError),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}
