// Configuration source loading.
//
// Priority order:
// 1. Environment variables (CSVGLUE_* prefix)
// 2. Config file path from CSVGLUE_CONFIG
// 3. Inline config content from CSVGLUE_CONFIG_CONTENT
// 4. Default config files (./csvglue.toml, ./.csvglue.toml)
// 5. Built-in defaults

use crate::env_overrides::{self, EnvSource, ENV_PREFIX};
use crate::RuntimeConfig;
use anyhow::{Context, Result};
use std::env;
use std::path::Path;

const DEFAULT_LOCATIONS: &[&str] = &["./csvglue.toml", "./.csvglue.toml"];

fn load_from_file() -> Result<Option<RuntimeConfig>> {
    if let Ok(path) = env::var("CSVGLUE_CONFIG") {
        return read_config_file(Path::new(&path)).map(Some);
    }

    if let Ok(content) = env::var("CSVGLUE_CONFIG_CONTENT") {
        let config: RuntimeConfig = toml::from_str(&content)
            .context("Failed to parse inline config from CSVGLUE_CONFIG_CONTENT")?;
        return Ok(Some(config));
    }

    for path in DEFAULT_LOCATIONS {
        let path = Path::new(path);
        if path.exists() {
            return read_config_file(path).map(Some);
        }
    }

    Ok(None)
}

fn read_config_file(path: &Path) -> Result<RuntimeConfig> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;
    toml::from_str(&content)
        .with_context(|| format!("Failed to parse config file: {}", path.display()))
}

/// Load configuration from a specific file path (for CLI --config flag).
/// Returns error if file doesn't exist or can't be parsed.
pub fn load_from_file_path(path: impl AsRef<Path>) -> Result<RuntimeConfig> {
    let mut config = read_config_file(path.as_ref())?;
    env_overrides::apply_env_overrides(&mut config, &StdEnvSource)?;
    config.validate()?;
    Ok(config)
}

/// Load configuration with graceful fallback to defaults.
/// A config file that exists but fails to parse is still an error.
pub fn load_or_default() -> Result<RuntimeConfig> {
    let mut config = load_from_file()?.unwrap_or_default();
    env_overrides::apply_env_overrides(&mut config, &StdEnvSource)?;
    config.validate()?;
    Ok(config)
}

struct StdEnvSource;

impl EnvSource for StdEnvSource {
    fn get(&self, key: &str) -> Option<String> {
        env::var(format!("{}{}", ENV_PREFIX, key)).ok()
    }

    fn get_raw(&self, key: &str) -> Option<String> {
        env::var(key).ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn reads_explicit_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "[storage]\nbucket = \"file-bucket\"\nprefix = \"demo-data\"\n\n[data]\nroot = \"samples\""
        )
        .unwrap();

        let config = read_config_file(file.path()).unwrap();
        assert_eq!(config.storage.bucket.as_deref(), Some("file-bucket"));
        assert_eq!(config.storage.prefix, "demo-data");
        assert_eq!(config.data.root, std::path::PathBuf::from("samples"));
    }

    #[test]
    fn missing_file_is_an_error() {
        let err = read_config_file(Path::new("/nonexistent/csvglue.toml")).unwrap_err();
        assert!(err.to_string().contains("Failed to read config file"));
    }

    #[test]
    fn malformed_file_is_an_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[storage\nbucket = ").unwrap();
        let err = read_config_file(file.path()).unwrap_err();
        assert!(err.to_string().contains("Failed to parse config file"));
    }
}
