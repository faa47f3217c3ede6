//! Tic-tac-toe session server binary.

use anyhow::Result;
use clap::Parser;
use oxo::{Cli, SessionRegistry, router};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    let registry = SessionRegistry::new();
    let app = router(registry);

    let listener = tokio::net::TcpListener::bind((cli.host.as_str(), cli.port)).await?;
    info!(host = %cli.host, port = cli.port, "Server ready");

    axum::serve(listener, app).await?;

    Ok(())
}
