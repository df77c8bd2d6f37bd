//! Error types for grw-io operations.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// The error type for grw-io operations.
#[derive(Debug, Error)]
pub enum Error {
    /// IO error occurred while reading or writing.
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// Delimited text could not be parsed.
    #[error("CSV error in {}: {source}", path.display())]
    Csv {
        /// File being parsed.
        path: PathBuf,
        /// Underlying parser error.
        #[source]
        source: csv::Error,
    },

    /// The file holds valid multi-byte UTF-8 alongside bytes that are not
    /// UTF-8.
    #[error("{}:{line}: mixes UTF-8 with other encodings", path.display())]
    Encoding {
        /// File being read.
        path: PathBuf,
        /// 1-based line of the first invalid byte.
        line: u64,
    },

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The header row does not contain a column the caller asked for.
    #[error("{}: missing column '{column}'", path.display())]
    MissingColumn {
        /// File being read.
        path: PathBuf,
        /// Requested column name.
        column: String,
    },

    /// A data row is shorter than the header and has no value for a column.
    #[error("{}:{line}: row has no value for column '{column}'", path.display())]
    MissingField {
        /// File being read.
        path: PathBuf,
        /// 1-based line number of the row.
        line: u64,
        /// Requested column name.
        column: String,
    },
}

/// A specialized Result type for grw-io operations.
pub type Result<T> = std::result::Result<T, Error>;
