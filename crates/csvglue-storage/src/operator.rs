//! Storage operator construction

use crate::{Result, StorageError};
use csvglue_config::StorageConfig;
use opendal::Operator;

/// Build an S3 operator for `bucket` using region/endpoint from config.
///
/// Credentials are resolved by OpenDAL from the standard AWS environment
/// (env vars, shared profile, instance metadata).
pub fn init_operator(config: &StorageConfig, bucket: &str) -> Result<Operator> {
    tracing::debug!(
        bucket = %bucket,
        region = %config.region,
        endpoint = ?config.endpoint,
        "Initializing S3 operator"
    );

    let mut s3_builder = opendal::services::S3::default()
        .bucket(bucket)
        .region(&config.region);

    if let Some(endpoint) = &config.endpoint {
        s3_builder = s3_builder.endpoint(endpoint);
    }

    let operator = Operator::new(s3_builder)
        .map_err(|e| StorageError::invalid_config(bucket, e))?
        .finish();

    Ok(operator)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_operator_for_custom_endpoint() {
        let config = StorageConfig {
            endpoint: Some("http://localhost:9000".to_string()),
            ..Default::default()
        };
        let op = init_operator(&config, "demo-bucket").unwrap();
        assert_eq!(op.info().name(), "demo-bucket");
    }

    #[test]
    fn empty_bucket_is_rejected() {
        let err = init_operator(&StorageConfig::default(), "").unwrap_err();
        assert_eq!(err.code(), crate::ErrorCode::E101InvalidConfig);
    }
}
