use crate::{Error, Result};
use tracing_subscriber::{EnvFilter, filter::LevelFilter};

/// Validates that a log level string is valid
pub fn validate_log_level(level: &str) -> Result<()> {
    level.parse::<LevelFilter>().map_err(|_| {
        Error::config(format!(
            "Invalid log level: '{}'. Valid levels: error, warn, info, debug, trace",
            level
        ))
    })?;
    Ok(())
}

/// Installs the JSON subscriber. `RUST_LOG` takes precedence over `level`.
pub fn init(level: &str) -> Result<()> {
    validate_log_level(level)?;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .json()
        .try_init()
        .map_err(|e| Error::internal(format!("Failed to initialize logging: {}", e)))
}
