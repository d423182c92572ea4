//! convert-csv-to-parquet

use super::CommandContext;
use anyhow::Result;
use clap::Args;
use csvglue_convert::{convert_directory, ConvertOptions};
use std::path::PathBuf;
use tracing::info;

#[derive(Args, Debug)]
pub struct ConvertArgs {
    /// Directory containing the *.csv files to convert
    pub input_path: PathBuf,

    /// Existing directory to write the *.parquet files into
    pub output_path: PathBuf,
}

pub fn run(args: ConvertArgs, ctx: &CommandContext) -> Result<()> {
    let options = ConvertOptions {
        batch_size: ctx.config.data.batch_size,
        row_group_size: ctx.config.data.row_group_size,
    };

    let converted = convert_directory(&args.input_path, &args.output_path, &options)?;
    if !converted.is_empty() {
        let rows: usize = converted.iter().map(|c| c.rows).sum();
        info!(files = converted.len(), rows, "Conversion complete");
    }
    Ok(())
}
