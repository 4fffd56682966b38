//! FormTrack backend server.
//!
//! Axum server that accepts camera frames from the dashboard, runs them
//! through the pose sidecar and the analysis rules, and mirrors every
//! verdict to the configured store.

use std::net::SocketAddr;
use std::sync::Arc;

use clap::Parser;
use tracing::info;

use formtrack_core::{LandmarkProvider, PostureStore};
use formtrack_server::{create_router, AppState, HttpLandmarkProvider};
use formtrack_store::bootstrap_store;

#[derive(Parser, Debug)]
#[command(name = "formtrack-server", about = "FormTrack frame-upload backend")]
struct Args {
    /// Bind address
    #[arg(long, default_value = "127.0.0.1")]
    host: String,

    /// HTTP port
    #[arg(long, default_value = "8080")]
    port: u16,

    /// Pose sidecar endpoint receiving raw image bytes
    #[arg(long, default_value = "http://127.0.0.1:5100/landmarks")]
    pose_url: String,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,tower_http=debug".into()),
        )
        .init();

    let args = Args::parse();

    let provider = Arc::new(HttpLandmarkProvider::new(args.pose_url));
    let store = bootstrap_store()?;
    info!(
        provider = provider.name(),
        pose_url = provider.endpoint(),
        store = store.name(),
        "collaborators ready"
    );

    let state = AppState::new(provider, store);
    let app = create_router(state);

    let addr: SocketAddr = format!("{}:{}", args.host, args.port).parse()?;
    info!(%addr, "formtrack backend listening");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
