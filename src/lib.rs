// csvglue - sample data helper for the CSV/Parquet demo bucket
//
// Commands:
// - upload-csv-files / upload-data-files: mirror a day partition into S3
// - reset-s3-files: delete everything under the sample-data prefix
// - convert-csv-to-parquet: rewrite a directory of CSV files as text-only Parquet

use anyhow::{Context, Result};
use csvglue_config::RuntimeConfig;

mod cli;
mod init;

pub mod commands;
pub mod prompt;

pub use cli::Cli;
pub use init::{init_tracing, runtime};

/// Resolve configuration for a parsed command line.
///
/// Priority: CLI flags > environment > config file > defaults.
pub fn load_config(cli: &Cli) -> Result<RuntimeConfig> {
    let mut config = match &cli.config {
        Some(path) => RuntimeConfig::load_from_path(path)
            .with_context(|| format!("Failed to load config from {}", path.display()))?,
        None => RuntimeConfig::load_or_default().context("Failed to load configuration")?,
    };

    apply_cli_overrides(&mut config, cli);
    config.validate()?;
    Ok(config)
}

fn apply_cli_overrides(config: &mut RuntimeConfig, cli: &Cli) {
    if let Some(level) = &cli.log_level {
        config.log.level = level.clone();
    }

    if let Some(root) = &cli.data_root {
        config.data.root = root.clone();
    }
}
