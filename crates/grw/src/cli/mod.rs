//! CLI argument parsing and dispatch.
//!
//! `grw` takes no required arguments: run it from the project root and it
//! reads `fixtures/people.csv` and `fixtures/papers.csv`, then writes
//! `app/data/grw-papers.json`.
//!
//! # Example
//!
//! ```bash
//! grw
//! grw --root ~/projects/grw --quiet
//! RUST_LOG=grw=debug grw --config alt.yaml
//! ```

mod execute;

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

/// GRW - build a co-authorship import graph
///
/// Reads the people roster and paper authorship CSV files and writes the
/// JSON node list consumed by the edge-bundling visualization.
#[derive(Parser, Debug)]
#[command(name = "grw")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Project root containing `fixtures/` and `app/data/`
    ///
    /// Defaults to the current directory.
    #[arg(long, env = "GRW_ROOT")]
    pub root: Option<PathBuf>,

    /// Configuration file, relative to the project root
    ///
    /// Defaults to `grw.yaml` in the project root when that file exists.
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Suppress output messages
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// Parse CLI arguments from command line
    pub fn parse_args() -> Self {
        <Self as Parser>::parse()
    }

    /// Parse CLI arguments from an iterator (for testing)
    pub fn try_parse_from<I, T>(iter: I) -> std::result::Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        <Self as Parser>::try_parse_from(iter)
    }

    /// Execute the build
    pub async fn execute(&self) -> Result<()> {
        let root = match &self.root {
            Some(root) => root.clone(),
            None => std::env::current_dir()?,
        };
        execute::execute_build(&root, self.config.as_deref(), self.quiet).await
    }
}
