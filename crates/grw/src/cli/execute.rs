//! Command execution logic.

use anyhow::{Context, Result};
use std::path::Path;

use crate::config::Config;
use crate::pipeline;

/// Execute the build for the project at `root`
pub async fn execute_build(root: &Path, config_file: Option<&Path>, quiet: bool) -> Result<()> {
    let config = Config::load(root, config_file)
        .await
        .with_context(|| format!("Failed to load configuration for {}", root.display()))?;

    if !quiet {
        println!(
            "Reading CSV files from {} and writing the graph to {}",
            config.fixtures_dir.display(),
            config.output_dir.display()
        );
    }

    pipeline::run(&config).await?;

    Ok(())
}
