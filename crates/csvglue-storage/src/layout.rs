//! Day-partition layout shared by the local data tree and the bucket
//!
//! Local:  `<root>/csv-sample/p_day=<day>/<file>`
//! Remote: `<prefix>/csv-sample/p_day=<day>/<file>`

use csvglue_config::{DataConfig, StorageConfig};
use std::path::{Path, PathBuf};

/// Sample file formats that are mirrored to the bucket
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DataFormat {
    Csv,
    Parquet,
}

impl DataFormat {
    pub const ALL: [DataFormat; 2] = [DataFormat::Csv, DataFormat::Parquet];

    pub fn dir_name(&self) -> &'static str {
        match self {
            DataFormat::Csv => "csv-sample",
            DataFormat::Parquet => "parquet-sample",
        }
    }

    pub fn extension(&self) -> &'static str {
        match self {
            DataFormat::Csv => "csv",
            DataFormat::Parquet => "parquet",
        }
    }
}

impl std::fmt::Display for DataFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.extension())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SampleLayout {
    data_root: PathBuf,
    prefix: String,
}

impl SampleLayout {
    pub fn new(data_root: impl Into<PathBuf>, prefix: &str) -> Self {
        Self {
            data_root: data_root.into(),
            prefix: prefix.trim_matches('/').to_string(),
        }
    }

    pub fn from_config(data: &DataConfig, storage: &StorageConfig) -> Self {
        Self::new(&data.root, &storage.prefix)
    }

    pub fn data_root(&self) -> &Path {
        &self.data_root
    }

    /// Top-level object prefix, always ending in `/`
    pub fn root_prefix(&self) -> String {
        format!("{}/", self.prefix)
    }

    pub fn partition_name(day: u32) -> String {
        format!("p_day={}", day)
    }

    pub fn local_dir(&self, format: DataFormat, day: u32) -> PathBuf {
        self.data_root
            .join(format.dir_name())
            .join(Self::partition_name(day))
    }

    /// Object prefix for one format/day, always ending in `/`
    pub fn object_prefix(&self, format: DataFormat, day: u32) -> String {
        format!(
            "{}/{}/{}/",
            self.prefix,
            format.dir_name(),
            Self::partition_name(day)
        )
    }

    pub fn object_key(&self, format: DataFormat, day: u32, filename: &str) -> String {
        format!("{}{}", self.object_prefix(format, day), filename)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn object_prefix_matches_partition_scheme() {
        let layout = SampleLayout::new("./data", "sample-data");
        for day in [0, 1, 7, 365, u32::MAX] {
            assert_eq!(
                layout.object_prefix(DataFormat::Csv, day),
                format!("sample-data/csv-sample/p_day={}/", day)
            );
            assert_eq!(
                layout.object_prefix(DataFormat::Parquet, day),
                format!("sample-data/parquet-sample/p_day={}/", day)
            );
        }
    }

    #[test]
    fn object_key_keeps_filename() {
        let layout = SampleLayout::new("./data", "sample-data");
        assert_eq!(
            layout.object_key(DataFormat::Csv, 3, "orders.csv"),
            "sample-data/csv-sample/p_day=3/orders.csv"
        );
    }

    #[test]
    fn local_dir_mirrors_remote() {
        let layout = SampleLayout::new("/srv/data", "sample-data");
        assert_eq!(
            layout.local_dir(DataFormat::Parquet, 2),
            PathBuf::from("/srv/data/parquet-sample/p_day=2")
        );
    }

    #[test]
    fn prefix_slashes_are_normalised() {
        let layout = SampleLayout::new("./data", "/sample-data/");
        assert_eq!(layout.root_prefix(), "sample-data/");
        assert_eq!(
            layout.object_prefix(DataFormat::Csv, 1),
            "sample-data/csv-sample/p_day=1/"
        );
    }
}
