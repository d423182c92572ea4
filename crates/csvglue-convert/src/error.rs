//! Error types for the converter

use arrow::error::ArrowError;
use parquet::errors::ParquetError;
use std::path::PathBuf;
use thiserror::Error;

/// Error codes for programmatic handling
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    /// E201: Input or output path missing or not a directory
    E201InvalidPath,
    /// E202: CSV file has no header columns
    E202MissingHeader,
    /// E203: CSV content could not be read
    E203Read,
    /// E204: Parquet output could not be written
    E204Write,
}

impl ErrorCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::E201InvalidPath => "E201",
            Self::E202MissingHeader => "E202",
            Self::E203Read => "E203",
            Self::E204Write => "E204",
        }
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error)]
pub enum ConvertError {
    #[error("[{code}] {role} path {} {reason}", .path.display())]
    InvalidPath {
        code: ErrorCode,
        role: &'static str,
        path: PathBuf,
        reason: &'static str,
    },

    #[error("[{code}] {} has no header row", .path.display())]
    MissingHeader { code: ErrorCode, path: PathBuf },

    #[error("[{code}] Failed to read {}: {source}", .path.display())]
    Read {
        code: ErrorCode,
        path: PathBuf,
        #[source]
        source: Cause,
    },

    #[error("[{code}] Failed to write {}: {source}", .path.display())]
    Write {
        code: ErrorCode,
        path: PathBuf,
        #[source]
        source: Cause,
    },
}

/// Underlying failure behind a read or write error
#[derive(Debug, Error)]
pub enum Cause {
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Arrow(#[from] ArrowError),
    #[error(transparent)]
    Parquet(#[from] ParquetError),
}

impl ConvertError {
    pub fn missing_path(role: &'static str, path: PathBuf) -> Self {
        Self::InvalidPath {
            code: ErrorCode::E201InvalidPath,
            role,
            path,
            reason: "does not exist",
        }
    }

    pub fn not_a_directory(role: &'static str, path: PathBuf) -> Self {
        Self::InvalidPath {
            code: ErrorCode::E201InvalidPath,
            role,
            path,
            reason: "is not a directory",
        }
    }

    pub fn missing_header(path: PathBuf) -> Self {
        Self::MissingHeader {
            code: ErrorCode::E202MissingHeader,
            path,
        }
    }

    pub fn read(path: PathBuf, source: impl Into<Cause>) -> Self {
        Self::Read {
            code: ErrorCode::E203Read,
            path,
            source: source.into(),
        }
    }

    pub fn write(path: PathBuf, source: impl Into<Cause>) -> Self {
        Self::Write {
            code: ErrorCode::E204Write,
            path,
            source: source.into(),
        }
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            Self::InvalidPath { code, .. }
            | Self::MissingHeader { code, .. }
            | Self::Read { code, .. }
            | Self::Write { code, .. } => *code,
        }
    }
}

pub type Result<T> = std::result::Result<T, ConvertError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn read_error_keeps_typed_source() {
        let err = ConvertError::read(
            PathBuf::from("bad.csv"),
            ArrowError::CsvError("incorrect number of fields".to_string()),
        );

        assert!(err.to_string().starts_with("[E203] Failed to read bad.csv"));
        let source = err.source().unwrap();
        assert!(source.downcast_ref::<Cause>().is_some());
        assert!(matches!(
            err,
            ConvertError::Read {
                source: Cause::Arrow(ArrowError::CsvError(_)),
                ..
            }
        ));
    }

    #[test]
    fn write_error_keeps_io_source() {
        let err = ConvertError::write(
            PathBuf::from("out/a.parquet"),
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "read-only"),
        );

        assert_eq!(err.code(), ErrorCode::E204Write);
        assert!(matches!(err, ConvertError::Write { source: Cause::Io(_), .. }));
        assert!(err.to_string().contains("read-only"));
    }
}
