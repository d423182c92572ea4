//! Command registry and dispatcher
//!
//! Every verb the binary understands is a variant of [`Command`]; `main`
//! builds a [`CommandContext`] once and hands both to [`Command::run`].

use crate::prompt::Prompt;
use anyhow::Result;
use clap::Subcommand;
use csvglue_config::RuntimeConfig;
use csvglue_storage::DataFormat;

pub mod convert;
pub mod reset;
pub mod upload;

pub use convert::ConvertArgs;
pub use reset::ResetArgs;
pub use upload::UploadArgs;

#[derive(Subcommand, Debug)]
pub enum Command {
    /// load a 'day' of csv data to the s3 partition
    #[command(name = "upload-csv-files")]
    UploadCsvFiles(UploadArgs),

    /// load a 'day' of csv and parquet data to the s3 partitions
    #[command(name = "upload-data-files")]
    UploadDataFiles(UploadArgs),

    /// reset the s3 data in the bucket
    #[command(name = "reset-s3-files")]
    ResetS3Files(ResetArgs),

    /// convert a directory of csv files to parquet (all columns as text)
    #[command(name = "convert-csv-to-parquet")]
    ConvertCsvToParquet(ConvertArgs),
}

/// Everything a command needs besides its own arguments
pub struct CommandContext {
    pub config: RuntimeConfig,
    pub prompt: Box<dyn Prompt>,
}

impl Command {
    pub fn name(&self) -> &'static str {
        match self {
            Command::UploadCsvFiles(_) => "upload-csv-files",
            Command::UploadDataFiles(_) => "upload-data-files",
            Command::ResetS3Files(_) => "reset-s3-files",
            Command::ConvertCsvToParquet(_) => "convert-csv-to-parquet",
        }
    }

    pub fn run(self, ctx: &CommandContext) -> Result<()> {
        tracing::debug!(command = self.name(), "Dispatching command");
        match self {
            Command::UploadCsvFiles(args) => upload::run(args, &[DataFormat::Csv], ctx),
            Command::UploadDataFiles(args) => upload::run(args, &DataFormat::ALL, ctx),
            Command::ResetS3Files(args) => reset::run(args, ctx),
            Command::ConvertCsvToParquet(args) => convert::run(args, ctx),
        }
    }
}
