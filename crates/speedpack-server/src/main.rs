// crates/speedpack-server/src/main.rs
//! Speedpack backend binary.
//!
//! Builds the live job log and the optional stats database from the
//! environment, then serves the Axum app.

use std::net::SocketAddr;

use anyhow::Result;
use speedpack_core::JobLog;
use speedpack_db::Database;
use speedpack_server::{create_app, AppState};
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

/// Default port for the server.
const DEFAULT_PORT: u16 = 3000;

/// Get the server port from environment or use default.
fn get_port() -> u16 {
    std::env::var("SPEEDPACK_PORT")
        .ok()
        .or_else(|| std::env::var("PORT").ok())
        .and_then(|p| p.parse().ok())
        .unwrap_or(DEFAULT_PORT)
}

#[tokio::main]
async fn main() -> Result<()> {
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .compact()
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    // Live log: in-memory unless SPEEDPACK_LOG_FILE names a backing file
    let log = match std::env::var("SPEEDPACK_LOG_FILE") {
        Ok(path) => JobLog::with_file(path)?,
        Err(_) => JobLog::new(),
    };

    // Counter store: present only when DATABASE_URL is configured
    let stats = match std::env::var("DATABASE_URL") {
        Ok(url) => Some(Database::connect(&url).await?),
        Err(_) => {
            tracing::warn!(
                "DATABASE_URL not set; performance stats endpoints will report errors"
            );
            None
        }
    };

    let app = create_app(AppState::new(log, stats));

    let port = get_port();
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(port, "Speedpack backend listening");

    axum::serve(listener, app).await?;

    Ok(())
}
