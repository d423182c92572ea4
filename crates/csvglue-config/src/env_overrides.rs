use super::{LogFormat, RuntimeConfig};
use anyhow::{anyhow, Context, Result};
use std::path::PathBuf;

pub const ENV_PREFIX: &str = "CSVGLUE_";

/// Abstraction over environment-variable lookups so tests can supply
/// overrides without mutating the process environment.
pub trait EnvSource {
    fn get(&self, key: &str) -> Option<String>;

    /// Get an environment variable WITHOUT the CSVGLUE_ prefix
    /// Used for AWS standard variables (AWS_REGION, AWS_ENDPOINT_URL)
    fn get_raw(&self, key: &str) -> Option<String>;
}

/// Apply environment-variable overrides on top of file/default config.
pub fn apply_env_overrides<E: EnvSource>(config: &mut RuntimeConfig, env: &E) -> Result<()> {
    // AWS standard variables first so CSVGLUE_* wins when both are set
    if let Some(region) = get_raw_env_string(env, "AWS_REGION") {
        config.storage.region = region;
    }
    if let Some(endpoint) = get_raw_env_string(env, "AWS_ENDPOINT_URL") {
        config.storage.endpoint = Some(endpoint);
    }

    // Storage
    if let Some(bucket) = get_env_string(env, "S3_BUCKET") {
        config.storage.bucket = Some(bucket);
    }
    if let Some(region) = get_env_string(env, "S3_REGION") {
        config.storage.region = region;
    }
    if let Some(endpoint) = get_env_string(env, "S3_ENDPOINT") {
        config.storage.endpoint = Some(endpoint);
    }
    if let Some(prefix) = get_env_string(env, "S3_PREFIX") {
        config.storage.prefix = prefix;
    }

    // Local data
    if let Some(root) = get_env_string(env, "DATA_ROOT") {
        config.data.root = PathBuf::from(root);
    }
    if let Some(val) = get_env_usize(env, "BATCH_SIZE")? {
        config.data.batch_size = val;
    }
    if let Some(val) = get_env_usize(env, "ROW_GROUP_SIZE")? {
        config.data.row_group_size = val;
    }

    // Logging
    if let Some(level) = get_env_string(env, "LOG_LEVEL") {
        config.log.level = level;
    }
    if let Some(format) = get_env_string(env, "LOG_FORMAT") {
        config.log.format = format
            .parse::<LogFormat>()
            .context("Invalid CSVGLUE_LOG_FORMAT value")?;
    }

    Ok(())
}

fn get_env_string<E: EnvSource>(env: &E, key: &str) -> Option<String> {
    env.get(key).filter(|v| !v.is_empty())
}

fn get_raw_env_string<E: EnvSource>(env: &E, key: &str) -> Option<String> {
    env.get_raw(key).filter(|v| !v.is_empty())
}

fn get_env_usize<E: EnvSource>(env: &E, key: &str) -> Result<Option<usize>> {
    match get_env_string(env, key) {
        Some(val) => {
            let parsed = val
                .parse::<usize>()
                .map_err(|e| anyhow!("Failed to parse {}{}: {}", ENV_PREFIX, key, e))?;
            Ok(Some(parsed))
        }
        None => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[derive(Default)]
    struct MapEnv(HashMap<String, String>);

    impl MapEnv {
        fn with(mut self, key: &str, value: &str) -> Self {
            self.0.insert(key.to_string(), value.to_string());
            self
        }
    }

    impl EnvSource for MapEnv {
        fn get(&self, key: &str) -> Option<String> {
            self.0.get(&format!("{}{}", ENV_PREFIX, key)).cloned()
        }

        fn get_raw(&self, key: &str) -> Option<String> {
            self.0.get(key).cloned()
        }
    }

    #[test]
    fn overrides_storage_and_log() {
        let env = MapEnv::default()
            .with("CSVGLUE_S3_BUCKET", "env-bucket")
            .with("CSVGLUE_S3_PREFIX", "other-data")
            .with("CSVGLUE_LOG_LEVEL", "debug")
            .with("CSVGLUE_LOG_FORMAT", "json")
            .with("CSVGLUE_DATA_ROOT", "/tmp/samples");
        let mut config = RuntimeConfig::default();
        apply_env_overrides(&mut config, &env).unwrap();

        assert_eq!(config.storage.bucket.as_deref(), Some("env-bucket"));
        assert_eq!(config.storage.prefix, "other-data");
        assert_eq!(config.log.level, "debug");
        assert_eq!(config.log.format, LogFormat::Json);
        assert_eq!(config.data.root, PathBuf::from("/tmp/samples"));
    }

    #[test]
    fn prefixed_region_beats_aws_region() {
        let env = MapEnv::default()
            .with("AWS_REGION", "eu-west-1")
            .with("AWS_ENDPOINT_URL", "http://localhost:9000");
        let mut config = RuntimeConfig::default();
        apply_env_overrides(&mut config, &env).unwrap();
        assert_eq!(config.storage.region, "eu-west-1");
        assert_eq!(
            config.storage.endpoint.as_deref(),
            Some("http://localhost:9000")
        );

        let env = env.with("CSVGLUE_S3_REGION", "ap-southeast-2");
        apply_env_overrides(&mut config, &env).unwrap();
        assert_eq!(config.storage.region, "ap-southeast-2");
    }

    #[test]
    fn invalid_number_is_an_error() {
        let env = MapEnv::default().with("CSVGLUE_ROW_GROUP_SIZE", "lots");
        let mut config = RuntimeConfig::default();
        let err = apply_env_overrides(&mut config, &env).unwrap_err();
        assert!(err.to_string().contains("CSVGLUE_ROW_GROUP_SIZE"));
    }

    #[test]
    fn empty_values_are_ignored() {
        let env = MapEnv::default().with("CSVGLUE_S3_BUCKET", "");
        let mut config = RuntimeConfig::default();
        apply_env_overrides(&mut config, &env).unwrap();
        assert!(config.storage.bucket.is_none());
    }
}
