//! stepbox container entrypoint

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use stepbox::cli::Cli;
use stepbox::core::ExecutorRegistry;

fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();

    // Deployment images extend this registry with their own executors.
    let registry = ExecutorRegistry::with_defaults();

    let cli = Cli::parse();
    cli.execute(&registry)
}
