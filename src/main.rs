use anyhow::Result;
use genai_relay::{config, server, telemetry};
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (before logging setup)
    let config = match config::load().await {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = telemetry::init(&config.server.logs.level) {
        eprintln!("{}", e);
        std::process::exit(1);
    }

    info!(
        "Starting local relay server with log level: {}",
        config.server.logs.level
    );

    server::run(config).await?;

    Ok(())
}
