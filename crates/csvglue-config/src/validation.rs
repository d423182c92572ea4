// Configuration validation
//
// Validates that required fields are present and values are sensible

use crate::*;
use anyhow::{bail, Result};
use tracing::warn;

pub fn validate_config(config: &RuntimeConfig) -> Result<()> {
    validate_storage_config(&config.storage)?;
    validate_data_config(&config.data)?;
    validate_log_config(&config.log)?;
    Ok(())
}

fn validate_storage_config(config: &StorageConfig) -> Result<()> {
    if config.region.trim().is_empty() {
        bail!("storage.region must not be empty");
    }

    let prefix = config.prefix.trim_matches('/');
    if prefix.is_empty() {
        bail!("storage.prefix must not be empty; reset would otherwise target the whole bucket");
    }
    if config.prefix.starts_with('/') {
        bail!(
            "storage.prefix must be relative to the bucket root, got '{}'",
            config.prefix
        );
    }

    if let Some(endpoint) = &config.endpoint {
        if !endpoint.starts_with("http://") && !endpoint.starts_with("https://") {
            bail!(
                "storage.endpoint must be an http(s) URL, got '{}'",
                endpoint
            );
        }
    }

    Ok(())
}

fn validate_data_config(config: &DataConfig) -> Result<()> {
    if config.root.as_os_str().is_empty() {
        bail!("data.root must not be empty");
    }

    if config.batch_size == 0 {
        bail!("data.batch_size must be greater than 0");
    }

    if config.row_group_size == 0 {
        bail!("data.row_group_size must be greater than 0");
    }

    if config.row_group_size > 10_000_000 {
        warn!(
            row_group_size = config.row_group_size,
            "data.row_group_size is very large; may cause memory issues"
        );
    }

    Ok(())
}

fn validate_log_config(config: &LogConfig) -> Result<()> {
    if config.level.trim().is_empty() {
        bail!("log.level must not be empty");
    }
    Ok(())
}
