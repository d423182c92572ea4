//! Remover: delete every object under the sample data prefix

use crate::layout::SampleLayout;
use crate::{Result, StorageError};
use opendal::Operator;
use tracing::{debug, info, warn};

/// Delete every object below `layout.root_prefix()`, one call per object.
///
/// The listing follows continuation tokens, so prefixes larger than a single
/// page are fully removed. Folder marker objects (keys ending in `/`) are
/// deleted after the objects below them. Returns the number of objects deleted.
pub async fn remove_prefix(op: &Operator, layout: &SampleLayout, bucket: &str) -> Result<usize> {
    let prefix = layout.root_prefix();

    let entries = op
        .list_with(&prefix)
        .recursive(true)
        .await
        .map_err(|e| StorageError::list(bucket, &prefix, e))?;

    let (mut keys, mut markers): (Vec<String>, Vec<String>) = entries
        .into_iter()
        .map(|entry| entry.path().to_string())
        .filter(|key| *key != prefix)
        .partition(|key| !key.ends_with('/'));
    // deepest markers first
    markers.sort_by(|a, b| b.len().cmp(&a.len()).then_with(|| a.cmp(b)));
    keys.append(&mut markers);
    debug!(objects = ?keys, "Listed objects");

    if keys.is_empty() {
        warn!("No files found in bucket s3://{}/{}", bucket, prefix);
        return Ok(0);
    }

    warn!("Removing files in bucket s3://{}/{}", bucket, prefix);
    for key in &keys {
        warn!("  deleting: {}", key);
        op.delete(key)
            .await
            .map_err(|e| StorageError::delete(bucket, key.clone(), e))?;
    }

    info!(deleted = keys.len(), "Reset complete for s3://{}/{}", bucket, prefix);
    Ok(keys.len())
}
