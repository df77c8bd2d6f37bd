//! Input and output plumbing for the GRW graph builder.
//!
//! This crate reads delimited text files (CSV by default) into tables with
//! header-keyed row access, and writes JSON documents atomically so a failed
//! run never leaves a half-written file behind.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod atomic;
pub mod error;
pub mod reader;
pub mod writer;

pub use atomic::write_json_atomic;
pub use error::{Error, Result};
pub use reader::{Row, Table, decode_text, read_table};
pub use writer::JsonWriter;
