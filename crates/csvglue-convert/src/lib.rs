//! CSV to Parquet conversion for csvglue
//!
//! Every CSV column is read as text, missing cells become empty strings,
//! and the result is written as a snappy-compressed Parquet file.

mod convert;
mod encoding;
mod error;
mod table;

pub use convert::{convert_directory, convert_file, ConvertOptions, ConvertedFile};
pub use encoding::writer_properties;
pub use error::{Cause, ConvertError, ErrorCode, Result};
pub use table::{fill_missing, text_schema};
