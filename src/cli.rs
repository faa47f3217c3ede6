//! Command-line interface for the server binary.

use clap::Parser;

/// Concurrent tic-tac-toe session server over REST.
#[derive(Parser, Debug)]
#[command(name = "oxo")]
#[command(about = "Concurrent tic-tac-toe game server", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Host to bind to
    #[arg(long, default_value = "127.0.0.1")]
    pub host: String,

    /// Port to bind to
    #[arg(short, long, default_value = "8080")]
    pub port: u16,
}
