//! upload-csv-files / upload-data-files

use super::CommandContext;
use anyhow::Result;
use clap::Args;
use csvglue_storage::{init_operator, upload_partition, DataFormat, SampleLayout};
use tracing::info;

#[derive(Args, Debug)]
pub struct UploadArgs {
    /// Day partition to load (p_day=<DAY>)
    pub day: u32,

    /// target data bucket name
    #[arg(short, long, env = "AWS_BUCKET")]
    pub bucket: Option<String>,
}

pub fn run(args: UploadArgs, formats: &[DataFormat], ctx: &CommandContext) -> Result<()> {
    let config = &ctx.config;
    let bucket = config.storage.resolve_bucket(args.bucket.as_deref())?;
    let layout = SampleLayout::from_config(&config.data, &config.storage);
    let op = init_operator(&config.storage, &bucket)?;

    let report = crate::runtime()?.block_on(upload_partition(
        &op, &layout, args.day, formats, &bucket,
    ))?;

    info!(
        files = report.len(),
        "Upload complete for {}",
        SampleLayout::partition_name(args.day)
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::Command;
    use crate::Cli;
    use clap::Parser;

    #[test]
    fn parses_day_and_bucket() {
        let cli = Cli::parse_from(["csvglue", "upload-data-files", "4", "-b", "demo-bucket"]);
        let Command::UploadDataFiles(args) = cli.command else {
            panic!("expected upload-data-files");
        };
        assert_eq!(args.day, 4);
        assert_eq!(args.bucket.as_deref(), Some("demo-bucket"));
    }
}
