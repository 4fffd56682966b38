//! FormTrack CLI entry point.

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use formtrack_cli::{Cli, Commands};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Watch(args) => {
            formtrack_cli::watch::execute(args).await?;
        }
        Commands::Check(args) => {
            formtrack_cli::check::execute(args)?;
        }
        Commands::Version => {
            println!("formtrack {}", env!("CARGO_PKG_VERSION"));
            println!("core module version: {}", formtrack_core::VERSION);
        }
    }

    Ok(())
}
