//! Uploader: mirror one local day partition into the bucket

use crate::layout::{DataFormat, SampleLayout};
use crate::{Result, StorageError};
use opendal::Operator;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Keys written by a successful [`upload_partition`] call, in upload order
#[derive(Debug, Default, Clone)]
pub struct UploadReport {
    pub uploaded: Vec<String>,
}

impl UploadReport {
    pub fn len(&self) -> usize {
        self.uploaded.len()
    }

    pub fn is_empty(&self) -> bool {
        self.uploaded.is_empty()
    }
}

/// Upload every `*.<ext>` file of `day` for each format in `formats`.
///
/// Files are uploaded one at a time. The first failure stops the run;
/// objects already written stay in the bucket.
pub async fn upload_partition(
    op: &Operator,
    layout: &SampleLayout,
    day: u32,
    formats: &[DataFormat],
    bucket: &str,
) -> Result<UploadReport> {
    let mut report = UploadReport::default();

    for &format in formats {
        let local_dir = layout.local_dir(format, day);
        let object_prefix = layout.object_prefix(format, day);
        info!(
            "Loading {} data: {} to {}",
            format,
            SampleLayout::partition_name(day),
            object_prefix
        );

        let files = list_local_files(&local_dir, format)?;
        if files.is_empty() {
            warn!(
                dir = %local_dir.display(),
                "No {} files found for {}",
                format,
                SampleLayout::partition_name(day)
            );
            continue;
        }

        for path in files {
            let key = upload_file(op, layout, format, day, &path, bucket).await?;
            report.uploaded.push(key);
        }
    }

    Ok(report)
}

async fn upload_file(
    op: &Operator,
    layout: &SampleLayout,
    format: DataFormat,
    day: u32,
    path: &Path,
    bucket: &str,
) -> Result<String> {
    let filename = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .ok_or_else(|| {
            StorageError::local_read(
                path.to_path_buf(),
                std::io::Error::new(std::io::ErrorKind::InvalidInput, "path has no file name"),
            )
        })?;
    let key = layout.object_key(format, day, &filename);

    let body = tokio::fs::read(path)
        .await
        .map_err(|e| StorageError::local_read(path.to_path_buf(), e))?;
    let bytes = body.len();

    op.write(&key, body)
        .await
        .map_err(|e| StorageError::upload(path.to_path_buf(), bucket, key.clone(), e))?;

    info!(bytes, "  uploaded: s3://{}/{}", bucket, key);
    Ok(key)
}

/// Regular files directly inside `dir` with the format's extension, sorted by name.
/// A missing directory yields an empty list.
fn list_local_files(dir: &Path, format: DataFormat) -> Result<Vec<PathBuf>> {
    let pattern = format!(
        "{}/*.{}",
        glob::Pattern::escape(&dir.to_string_lossy()),
        format.extension()
    );

    let entries = glob::glob(&pattern)
        .map_err(|e| StorageError::local_pattern(pattern.clone(), e.to_string()))?;

    let mut files = Vec::new();
    for entry in entries {
        let path = entry.map_err(|e| {
            let path = e.path().to_path_buf();
            StorageError::local_read(path, std::io::Error::from(e))
        })?;
        if path.is_file() {
            files.push(path);
        }
    }
    Ok(files)
}
