//! GRW CLI binary.

use anyhow::Result;
use grw::cli::Cli;
use tracing_subscriber::EnvFilter;

/// Main entry point for the grw CLI.
///
/// Runs on tokio's current_thread runtime: the build is one sequential
/// batch of local file reads and a single write.
#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // Controlled via RUST_LOG, e.g. RUST_LOG=grw=debug,grw_io=debug
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("grw=info,grw_io=info")),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    tracing::debug!("Starting grw");

    let cli = Cli::parse_args();
    cli.execute().await?;

    tracing::debug!("grw completed successfully");
    Ok(())
}
