//! # Chat File Access
//!
//! Application entry point that initializes:
//! - Configuration loading
//! - Tracing/logging subsystem
//! - Database connection pool
//! - HTTP server

use anyhow::Result;
use tracing::info;

use chat_file_access::config::Settings;
use chat_file_access::startup::Application;

#[tokio::main]
async fn main() -> Result<()> {
    // Configuration decides the log format, so it is loaded first
    let settings = Settings::load()?;
    chat_file_access::telemetry::init_tracing(&settings.telemetry);

    info!(
        host = %settings.server.host,
        port = %settings.server.port,
        environment = %settings.environment,
        "Configuration loaded"
    );

    let application = Application::build(settings).await?;

    info!("Server ready to accept connections");
    application.run_until_stopped().await?;

    Ok(())
}
