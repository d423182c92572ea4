//! Converter: batch CSV -> Parquet for one directory

use crate::encoding::writer_properties;
use crate::table::{fill_missing, text_schema};
use crate::{ConvertError, Result};
use arrow::array::RecordBatch;
use arrow::csv::ReaderBuilder;
use arrow::datatypes::SchemaRef;
use arrow::error::ArrowError;
use parquet::arrow::ArrowWriter;
use parquet::errors::ParquetError;
use parquet::file::properties::WriterProperties;
use std::fs::File;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{info, warn};

const DEFAULT_BATCH_SIZE: usize = 8 * 1024;
const DEFAULT_ROW_GROUP_SIZE: usize = 32 * 1024;

#[derive(Debug, Clone, Copy)]
pub struct ConvertOptions {
    /// Rows per Arrow batch while reading the CSV
    pub batch_size: usize,
    /// Maximum rows per Parquet row group
    pub row_group_size: usize,
}

impl Default for ConvertOptions {
    fn default() -> Self {
        Self {
            batch_size: DEFAULT_BATCH_SIZE,
            row_group_size: DEFAULT_ROW_GROUP_SIZE,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConvertedFile {
    pub input: PathBuf,
    pub output: PathBuf,
    pub rows: usize,
}

/// Convert every `*.csv` directly inside `input_dir` into `output_dir`.
///
/// Both directories must already exist. Files are converted in name order
/// and the first failure aborts the rest of the batch.
pub fn convert_directory(
    input_dir: &Path,
    output_dir: &Path,
    options: &ConvertOptions,
) -> Result<Vec<ConvertedFile>> {
    ensure_directory("input", input_dir)?;
    ensure_directory("output", output_dir)?;

    let files = list_csv_files(input_dir)?;
    if files.is_empty() {
        warn!("No CSV files found in {}", input_dir.display());
        return Ok(Vec::new());
    }

    info!(
        files = files.len(),
        "Converting CSV files from {} to {}",
        input_dir.display(),
        output_dir.display()
    );

    files
        .iter()
        .map(|path| convert_file(path, output_dir, options))
        .collect()
}

/// Convert one CSV file to `<output_dir>/<stem>.parquet` with all columns as text.
///
/// The whole CSV is read before the output file is created, so a read
/// failure never leaves a partial Parquet file behind.
pub fn convert_file(
    input: &Path,
    output_dir: &Path,
    options: &ConvertOptions,
) -> Result<ConvertedFile> {
    let batches = read_text_batches(input, options.batch_size)?;
    let rows: usize = batches.iter().map(RecordBatch::num_rows).sum();

    let output = output_path(input, output_dir);
    let source_name = input
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    let props = writer_properties(options.row_group_size, &source_name);

    if let Err(e) = write_parquet(&output, &batches, props) {
        let _ = std::fs::remove_file(&output);
        return Err(e);
    }

    info!(
        rows,
        "  converted: {} -> {}",
        input.display(),
        output.display()
    );

    Ok(ConvertedFile {
        input: input.to_path_buf(),
        output,
        rows,
    })
}

struct TextBatches {
    schema: SchemaRef,
    batches: Vec<RecordBatch>,
}

impl TextBatches {
    fn iter(&self) -> std::slice::Iter<'_, RecordBatch> {
        self.batches.iter()
    }
}

fn read_text_batches(input: &Path, batch_size: usize) -> Result<TextBatches> {
    let read_err = |e: ArrowError| ConvertError::read(input.to_path_buf(), e);

    let mut source = File::open(input).map_err(|e| ConvertError::read(input.to_path_buf(), e))?;
    let schema = text_schema(&mut source, input)?;

    let reader = ReaderBuilder::new(Arc::clone(&schema))
        .with_header(true)
        .with_batch_size(batch_size.max(1))
        .with_truncated_rows(true)
        .build(source)
        .map_err(read_err)?;

    let batches = reader
        .map(|batch| batch.and_then(|b| fill_missing(&b)).map_err(read_err))
        .collect::<Result<Vec<_>>>()?;

    Ok(TextBatches { schema, batches })
}

fn write_parquet(output: &Path, batches: &TextBatches, props: WriterProperties) -> Result<()> {
    let write_err = |e: ParquetError| ConvertError::write(output.to_path_buf(), e);

    let sink = File::create(output).map_err(|e| ConvertError::write(output.to_path_buf(), e))?;
    let mut writer =
        ArrowWriter::try_new(sink, Arc::clone(&batches.schema), Some(props)).map_err(write_err)?;
    for batch in batches.iter() {
        writer.write(batch).map_err(write_err)?;
    }
    writer.close().map_err(write_err)?;
    Ok(())
}

fn output_path(input: &Path, output_dir: &Path) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    output_dir.join(format!("{}.parquet", stem))
}

fn ensure_directory(role: &'static str, path: &Path) -> Result<()> {
    if !path.exists() {
        return Err(ConvertError::missing_path(role, path.to_path_buf()));
    }
    if !path.is_dir() {
        return Err(ConvertError::not_a_directory(role, path.to_path_buf()));
    }
    Ok(())
}

fn list_csv_files(dir: &Path) -> Result<Vec<PathBuf>> {
    let pattern = format!("{}/*.csv", glob::Pattern::escape(&dir.to_string_lossy()));
    let entries = glob::glob(&pattern).map_err(|e| {
        ConvertError::read(
            dir.to_path_buf(),
            std::io::Error::new(std::io::ErrorKind::InvalidInput, e),
        )
    })?;

    let mut files = Vec::new();
    for entry in entries {
        let path = entry.map_err(|e| {
            let path = e.path().to_path_buf();
            ConvertError::read(path, std::io::Error::from(e))
        })?;
        if path.is_file() {
            files.push(path);
        }
    }
    Ok(files)
}
