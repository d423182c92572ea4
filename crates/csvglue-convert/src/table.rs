//! All-text view of a CSV file

use crate::{ConvertError, Result};
use arrow::array::{Array, ArrayRef, AsArray, RecordBatch, StringArray};
use arrow::csv::reader::Format;
use arrow::datatypes::{DataType, Field, Schema, SchemaRef};
use arrow::error::ArrowError;
use std::io::{Read, Seek};
use std::path::Path;
use std::sync::Arc;

/// Read the header row of `reader` and type every column as nullable Utf8.
///
/// The reader is rewound so it can be handed straight to the CSV reader.
pub fn text_schema<R: Read + Seek>(reader: &mut R, path: &Path) -> Result<SchemaRef> {
    let (header, _) = Format::default()
        .with_header(true)
        .infer_schema(&mut *reader, Some(0))
        .map_err(|e| ConvertError::read(path.to_path_buf(), e))?;

    if header.fields().is_empty() {
        return Err(ConvertError::missing_header(path.to_path_buf()));
    }

    reader
        .rewind()
        .map_err(|e| ConvertError::read(path.to_path_buf(), e))?;

    let fields: Vec<Field> = header
        .fields()
        .iter()
        .map(|f| Field::new(f.name(), DataType::Utf8, true))
        .collect();
    Ok(Arc::new(Schema::new(fields)))
}

/// Replace every null cell with the empty string.
pub fn fill_missing(batch: &RecordBatch) -> std::result::Result<RecordBatch, ArrowError> {
    let columns = batch
        .columns()
        .iter()
        .map(|column| -> std::result::Result<ArrayRef, ArrowError> {
            if column.null_count() == 0 {
                return Ok(Arc::clone(column));
            }
            let strings = column.as_string_opt::<i32>().ok_or_else(|| {
                ArrowError::InvalidArgumentError(format!(
                    "expected a text column, found {}",
                    column.data_type()
                ))
            })?;
            let filled: StringArray = strings.iter().map(|v| Some(v.unwrap_or(""))).collect();
            Ok(Arc::new(filled))
        })
        .collect::<std::result::Result<Vec<_>, _>>()?;

    RecordBatch::try_new(batch.schema(), columns)
}
