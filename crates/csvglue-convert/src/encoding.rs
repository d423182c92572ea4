use parquet::basic::Compression;
use parquet::file::properties::{EnabledStatistics, WriterProperties};
use parquet::format::KeyValue;

fn compression_setting() -> Compression {
    Compression::SNAPPY
}

/// Writer properties for converted sample files
///
/// - Snappy compression
/// - Dictionary encoding enabled (sample text columns repeat heavily)
/// - `row_group_size` rows per group
/// - csvglue version and source file name embedded in the footer
pub fn writer_properties(row_group_size: usize, source_file: &str) -> WriterProperties {
    let metadata = vec![
        KeyValue {
            key: "csvglue.version".to_string(),
            value: Some(env!("CARGO_PKG_VERSION").to_string()),
        },
        KeyValue {
            key: "csvglue.source_file".to_string(),
            value: Some(source_file.to_string()),
        },
    ];

    WriterProperties::builder()
        .set_dictionary_enabled(true)
        .set_statistics_enabled(EnabledStatistics::Page)
        .set_compression(compression_setting())
        .set_data_page_size_limit(256 * 1024)
        .set_max_row_group_size(row_group_size.max(1))
        .set_dictionary_page_size_limit(128 * 1024)
        .set_key_value_metadata(Some(metadata))
        .build()
}
