//! Error types for the storage crate

use std::path::PathBuf;
use thiserror::Error;

/// Error codes for programmatic handling
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    /// E101: Operator could not be built from configuration
    E101InvalidConfig,
    /// E102: Local sample file could not be read or enumerated
    E102LocalRead,
    /// E103: Object upload failed
    E103Upload,
    /// E104: Object listing failed
    E104List,
    /// E105: Object delete failed
    E105Delete,
}

impl ErrorCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::E101InvalidConfig => "E101",
            Self::E102LocalRead => "E102",
            Self::E103Upload => "E103",
            Self::E104List => "E104",
            Self::E105Delete => "E105",
        }
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Errors that can occur while talking to the sample data bucket
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("[{code}] Invalid storage configuration for bucket '{bucket}': {source}")]
    InvalidConfig {
        code: ErrorCode,
        bucket: String,
        #[source]
        source: opendal::Error,
    },

    #[error("[{code}] Failed to read local file {}: {source}", .path.display())]
    LocalRead {
        code: ErrorCode,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("[{code}] Invalid local file pattern '{pattern}': {reason}")]
    LocalPattern {
        code: ErrorCode,
        pattern: String,
        reason: String,
    },

    #[error("[{code}] Failed to upload {} to s3://{bucket}/{key}: {source}", .path.display())]
    Upload {
        code: ErrorCode,
        path: PathBuf,
        bucket: String,
        key: String,
        #[source]
        source: opendal::Error,
    },

    #[error("[{code}] Failed to list s3://{bucket}/{prefix}: {source}")]
    List {
        code: ErrorCode,
        bucket: String,
        prefix: String,
        #[source]
        source: opendal::Error,
    },

    #[error("[{code}] Failed to delete s3://{bucket}/{key}: {source}")]
    Delete {
        code: ErrorCode,
        bucket: String,
        key: String,
        #[source]
        source: opendal::Error,
    },
}

impl StorageError {
    pub fn invalid_config(bucket: &str, source: opendal::Error) -> Self {
        Self::InvalidConfig {
            code: ErrorCode::E101InvalidConfig,
            bucket: bucket.to_string(),
            source,
        }
    }

    pub fn local_read(path: PathBuf, source: std::io::Error) -> Self {
        Self::LocalRead {
            code: ErrorCode::E102LocalRead,
            path,
            source,
        }
    }

    pub fn local_pattern(pattern: String, reason: String) -> Self {
        Self::LocalPattern {
            code: ErrorCode::E102LocalRead,
            pattern,
            reason,
        }
    }

    pub fn upload(path: PathBuf, bucket: &str, key: String, source: opendal::Error) -> Self {
        Self::Upload {
            code: ErrorCode::E103Upload,
            path,
            bucket: bucket.to_string(),
            key,
            source,
        }
    }

    pub fn list(bucket: &str, prefix: &str, source: opendal::Error) -> Self {
        Self::List {
            code: ErrorCode::E104List,
            bucket: bucket.to_string(),
            prefix: prefix.to_string(),
            source,
        }
    }

    pub fn delete(bucket: &str, key: String, source: opendal::Error) -> Self {
        Self::Delete {
            code: ErrorCode::E105Delete,
            bucket: bucket.to_string(),
            key,
            source,
        }
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            Self::InvalidConfig { code, .. }
            | Self::LocalRead { code, .. }
            | Self::LocalPattern { code, .. }
            | Self::Upload { code, .. }
            | Self::List { code, .. }
            | Self::Delete { code, .. } => *code,
        }
    }
}

/// Result type alias for StorageError
pub type Result<T> = std::result::Result<T, StorageError>;
