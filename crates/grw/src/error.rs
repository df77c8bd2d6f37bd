//! Error types for graph building.

use std::io;
use thiserror::Error;

/// The error type for grw operations.
#[derive(Debug, Error)]
pub enum Error {
    /// IO error occurred.
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// An input file could not be read or lacks an expected column.
    #[error(transparent)]
    Input(#[from] grw_io::Error),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// A paper author has no entry in the institution roster.
    #[error("No institution record for '{name}'")]
    UnresolvedName {
        /// Bare identifier that failed to resolve.
        name: String,
    },

    /// Two people at different institutions share a bare identifier.
    #[error("Bare name '{name}' is claimed by both '{existing}' and '{conflicting}'")]
    NameConflict {
        /// The shared bare identifier.
        name: String,
        /// Qualified identifier that claimed the name first.
        existing: String,
        /// Qualified identifier that tried to claim it again.
        conflicting: String,
    },

    /// A node imports an identifier that is not a node.
    #[error("Node '{node}' imports unknown node '{import}'")]
    DanglingImport {
        /// Node holding the reference.
        node: String,
        /// Identifier that does not name a node.
        import: String,
    },
}

/// A specialized Result type for grw operations.
pub type Result<T> = std::result::Result<T, Error>;
