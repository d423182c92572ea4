// Initialization utilities
//
// Logging/tracing setup and the runtime used by the storage commands

use anyhow::{Context, Result};
use csvglue_config::{LogConfig, LogFormat};

/// Initialize tracing/logging from LogConfig
///
/// Everything goes to stderr so command output stays pipeable.
pub fn init_tracing(config: &LogConfig) {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let env_filter = EnvFilter::try_new(&config.level).unwrap_or_else(|_| EnvFilter::new("info"));

    let registry = tracing_subscriber::registry().with(env_filter);

    // Ignore the error if a subscriber is already installed (tests)
    let _ = match config.format {
        LogFormat::Json => tracing::subscriber::set_global_default(
            registry.with(fmt::layer().json().with_writer(std::io::stderr)),
        ),
        LogFormat::Text => tracing::subscriber::set_global_default(
            registry.with(
                fmt::layer()
                    .with_target(false)
                    .with_writer(std::io::stderr),
            ),
        ),
    };
}

/// Single-threaded runtime; every remote call is awaited in sequence.
pub fn runtime() -> Result<tokio::runtime::Runtime> {
    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .context("Failed to build tokio runtime")
}
