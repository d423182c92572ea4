// csvglue-config - Configuration for the csvglue CLI
//
// Supports configuration from multiple sources:
// 1. CLI flags (applied by the binary, highest priority)
// 2. Environment variables (CSVGLUE_* prefix, plus AWS_REGION / AWS_ENDPOINT_URL)
// 3. Config file from --config, CSVGLUE_CONFIG or CSVGLUE_CONFIG_CONTENT
// 4. Default config file locations (./csvglue.toml, ./.csvglue.toml)
// 5. Built-in defaults (lowest priority)

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

mod env_overrides;
mod sources;
mod validation;

pub use env_overrides::{apply_env_overrides, EnvSource, ENV_PREFIX};

/// Top-level prefix every sample object lives under
pub const DEFAULT_PREFIX: &str = "sample-data";

/// Main runtime configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RuntimeConfig {
    #[serde(default)]
    pub storage: StorageConfig,

    #[serde(default)]
    pub data: DataConfig,

    #[serde(default)]
    pub log: LogConfig,
}

/// Object storage configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Target bucket; usually supplied per invocation with --bucket or AWS_BUCKET
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bucket: Option<String>,

    #[serde(default = "default_region")]
    pub region: String,

    /// Custom S3-compatible endpoint (MinIO, LocalStack, ...)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub endpoint: Option<String>,

    #[serde(default = "default_prefix")]
    pub prefix: String,
}

fn default_region() -> String {
    "us-east-1".to_string()
}

fn default_prefix() -> String {
    DEFAULT_PREFIX.to_string()
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            bucket: None,
            region: default_region(),
            endpoint: None,
            prefix: default_prefix(),
        }
    }
}

impl StorageConfig {
    /// Resolve the bucket, preferring an explicit CLI/env value over the config file
    pub fn resolve_bucket(&self, explicit: Option<&str>) -> Result<String> {
        explicit
            .map(str::to_string)
            .or_else(|| self.bucket.clone())
            .filter(|b| !b.trim().is_empty())
            .ok_or_else(|| {
                anyhow::anyhow!(
                    "no bucket configured. Pass --bucket, set AWS_BUCKET, \
                    or add `bucket` to the [storage] section of csvglue.toml"
                )
            })
    }
}

/// Local sample data and conversion settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DataConfig {
    /// Directory holding csv-sample/ and parquet-sample/
    #[serde(default = "default_data_root")]
    pub root: PathBuf,

    /// Rows per Arrow batch when reading CSV
    #[serde(default = "default_batch_size")]
    pub batch_size: usize,

    #[serde(default = "default_row_group_size")]
    pub row_group_size: usize,
}

fn default_data_root() -> PathBuf {
    PathBuf::from("./data")
}

fn default_batch_size() -> usize {
    8 * 1024
}

fn default_row_group_size() -> usize {
    32 * 1024
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            root: default_data_root(),
            batch_size: default_batch_size(),
            row_group_size: default_row_group_size(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogConfig {
    #[serde(default = "default_log_level")]
    pub level: String,

    #[serde(default)]
    pub format: LogFormat,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: LogFormat::default(),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

impl std::fmt::Display for LogFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LogFormat::Text => write!(f, "text"),
            LogFormat::Json => write!(f, "json"),
        }
    }
}

impl std::str::FromStr for LogFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "text" | "pretty" => Ok(LogFormat::Text),
            "json" => Ok(LogFormat::Json),
            _ => anyhow::bail!("Unsupported log format: {}. Supported: text, json", s),
        }
    }
}

impl RuntimeConfig {
    /// Load configuration from the default sources, falling back to defaults
    pub fn load_or_default() -> Result<Self> {
        sources::load_or_default()
    }

    /// Load configuration from an explicit file (CLI --config flag)
    pub fn load_from_path(path: impl AsRef<Path>) -> Result<Self> {
        sources::load_from_file_path(path)
    }

    /// Parse a TOML document without touching the environment
    pub fn from_toml(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        validation::validate_config(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_configs() {
        let config = RuntimeConfig::default();
        assert_eq!(config.storage.prefix, "sample-data");
        assert_eq!(config.storage.region, "us-east-1");
        assert!(config.storage.bucket.is_none());
        assert_eq!(config.data.root, PathBuf::from("./data"));
        assert_eq!(config.log.level, "info");
        assert_eq!(config.log.format, LogFormat::Text);
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = RuntimeConfig::from_toml(
            r#"
            [storage]
            bucket = "demo-bucket"

            [log]
            format = "json"
            "#,
        )
        .unwrap();

        assert_eq!(config.storage.bucket.as_deref(), Some("demo-bucket"));
        assert_eq!(config.storage.prefix, "sample-data");
        assert_eq!(config.data.row_group_size, 32 * 1024);
        assert_eq!(config.log.format, LogFormat::Json);
    }

    #[test]
    fn test_resolve_bucket_prefers_explicit() {
        let storage = StorageConfig {
            bucket: Some("from-file".to_string()),
            ..Default::default()
        };
        assert_eq!(storage.resolve_bucket(Some("from-cli")).unwrap(), "from-cli");
        assert_eq!(storage.resolve_bucket(None).unwrap(), "from-file");
    }

    #[test]
    fn test_resolve_bucket_missing() {
        let storage = StorageConfig::default();
        let err = storage.resolve_bucket(None).unwrap_err();
        assert!(err.to_string().contains("--bucket"));
        assert!(storage.resolve_bucket(Some("  ")).is_err());
    }

    #[test]
    fn test_log_format_from_str() {
        assert_eq!("json".parse::<LogFormat>().unwrap(), LogFormat::Json);
        assert_eq!("TEXT".parse::<LogFormat>().unwrap(), LogFormat::Text);
        assert!("xml".parse::<LogFormat>().is_err());
    }
}
