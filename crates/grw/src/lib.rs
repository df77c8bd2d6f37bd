//! GRW - co-authorship import graphs for edge-bundling visualizations.
//!
//! Reads a roster of people and institutions plus a list of paper authors
//! from delimited files, and writes a JSON array of
//! `{"name": ..., "imports": [...]}` nodes where each person imports their
//! co-authors. Names are institution-qualified (`root.<institution>.<name>`)
//! so the front-end can cluster people by institution.

#![forbid(unsafe_code)]

pub mod config;
pub mod error;
pub mod graph;
pub mod pipeline;
pub mod records;
pub mod slug;

// Public CLI module (needed by binary)
pub mod cli;

pub use error::{Error, Result};
pub use graph::{Graph, GraphOptions, Node, create_graph};
pub use slug::{CaseMode, Normalizer, dotify, slugify};
