use crate::commands::Command;
use clap::Parser;
use std::path::PathBuf;

/// csv glue cli to manage demo steps.
#[derive(Parser, Debug)]
#[command(name = "csvglue")]
#[command(version)]
#[command(about = "csv glue cli to manage demo steps.", long_about = None)]
#[command(arg_required_else_help = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Path to configuration file
    #[arg(short, long, value_name = "FILE", global = true)]
    pub config: Option<PathBuf>,

    /// Local directory holding csv-sample/ and parquet-sample/ (default ./data)
    #[arg(long, value_name = "DIR", global = true)]
    pub data_root: Option<PathBuf>,

    /// Log level: trace, debug, info, warn, error
    #[arg(short = 'v', long, value_name = "LEVEL", global = true)]
    pub log_level: Option<String>,
}
