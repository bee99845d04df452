//! Backend API HTTP Server
//!
//! A minimal Axum server exposing a single greeting endpoint.
//!
//! # Endpoints
//!
//! - `GET /`
//!   - Returns a fixed plain-text greeting with status 200.
//!
//! Any other path returns 404; any other method on `/` returns 405,
//! both per Axum's defaults.

use axum::{routing::get, Router};
use clap::Parser;
use std::net::SocketAddr;

/// Greeting returned by the root endpoint.
const GREETING: &str = "Hello from the Backend API!";

/// Command-line arguments for the server.
#[derive(Parser)]
#[command(name = "backend-api", version, about = "Backend API HTTP server")]
struct Args {
    /// Port to listen on.
    #[arg(short, long, default_value_t = 5000)]
    port: u16,
}

/// Handler for the root path.
///
/// Route: `GET /`
async fn root() -> &'static str {
    GREETING
}

/// Creates the Axum router with all routes configured.
///
/// This function is separated from `run` to enable integration testing
/// without requiring a live server.
pub fn create_app() -> Router {
    Router::new().route("/", get(root))
}

/// Main server entry point.
///
/// Parses CLI arguments, binds the listener, and serves requests until
/// the process is terminated.
pub async fn run() -> anyhow::Result<()> {
    let args = Args::parse();

    let app = create_app();

    let addr = SocketAddr::from(([0, 0, 0, 0], args.port));
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to bind to port {}: {}", args.port, e))?;

    println!("Backend API running on port {}", args.port);

    axum::serve(listener, app)
        .await
        .map_err(|e| anyhow::anyhow!("Server error: {}", e))?;

    Ok(())
}
