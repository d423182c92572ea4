//! Sample data storage for csvglue
//!
//! Mirrors day-partitioned local sample files into an object storage bucket
//! and clears them out again. All remote access goes through an
//! [`opendal::Operator`], so tests can swap the S3 backend for an in-memory one.

mod error;
mod layout;
mod operator;
mod reset;
mod upload;

pub use error::{ErrorCode, Result, StorageError};
pub use layout::{DataFormat, SampleLayout};
pub use operator::init_operator;
pub use reset::remove_prefix;
pub use upload::{upload_partition, UploadReport};

pub use opendal::Operator;
