//! reset-s3-files

use super::CommandContext;
use crate::prompt::confirm_twice;
use anyhow::Result;
use clap::Args;
use csvglue_storage::{init_operator, remove_prefix, SampleLayout};
use tracing::warn;

const QUESTION: &str = "Remove all files from s3 bucket?";

#[derive(Args, Debug)]
pub struct ResetArgs {
    /// target data bucket name
    #[arg(short, long, env = "AWS_BUCKET")]
    pub bucket: Option<String>,

    /// Delete without prompting
    #[arg(long, conflicts_with = "no_confirm")]
    pub confirm: bool,

    /// Skip the delete without prompting
    #[arg(long)]
    pub no_confirm: bool,
}

impl ResetArgs {
    /// Answer given on the command line, if any
    pub fn decision(&self) -> Option<bool> {
        match (self.confirm, self.no_confirm) {
            (true, _) => Some(true),
            (_, true) => Some(false),
            _ => None,
        }
    }
}

pub fn run(args: ResetArgs, ctx: &CommandContext) -> Result<()> {
    let config = &ctx.config;
    let bucket = config.storage.resolve_bucket(args.bucket.as_deref())?;
    let layout = SampleLayout::from_config(&config.data, &config.storage);

    let confirmed = match args.decision() {
        Some(answer) => answer,
        None => confirm_twice(ctx.prompt.as_ref(), QUESTION)?,
    };

    if !confirmed {
        warn!(
            "Skipping s3 file delete from s3://{}/{}",
            bucket,
            layout.root_prefix()
        );
        return Ok(());
    }

    let op = init_operator(&config.storage, &bucket)?;
    crate::runtime()?.block_on(remove_prefix(&op, &layout, &bucket))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::Command;
    use crate::prompt::testing::ScriptedPrompt;
    use crate::Cli;
    use clap::Parser;
    use csvglue_config::RuntimeConfig;

    #[test]
    fn flags_decide_without_prompting() {
        let parse = |argv: &[&str]| match Cli::parse_from(argv).command {
            Command::ResetS3Files(args) => args,
            _ => panic!("expected reset-s3-files"),
        };

        assert_eq!(
            parse(&["csvglue", "reset-s3-files", "-b", "x", "--confirm"]).decision(),
            Some(true)
        );
        assert_eq!(
            parse(&["csvglue", "reset-s3-files", "-b", "x", "--no-confirm"]).decision(),
            Some(false)
        );
        assert_eq!(parse(&["csvglue", "reset-s3-files", "-b", "x"]).decision(), None);
        assert!(Cli::try_parse_from([
            "csvglue",
            "reset-s3-files",
            "--confirm",
            "--no-confirm"
        ])
        .is_err());
    }

    #[test]
    fn declined_prompt_exits_cleanly_without_storage() {
        // An unreachable endpoint proves no remote call is attempted.
        let mut config = RuntimeConfig::default();
        config.storage.endpoint = Some("http://127.0.0.1:1".to_string());
        let ctx = CommandContext {
            config,
            prompt: Box::new(ScriptedPrompt::new(&[false, false])),
        };
        let args = ResetArgs {
            bucket: Some("demo".to_string()),
            confirm: false,
            no_confirm: false,
        };

        run(args, &ctx).unwrap();
    }

    #[test]
    fn aborted_prompt_is_an_error() {
        let ctx = CommandContext {
            config: RuntimeConfig::default(),
            prompt: Box::new(ScriptedPrompt::new(&[])),
        };
        let args = ResetArgs {
            bucket: Some("demo".to_string()),
            confirm: false,
            no_confirm: false,
        };

        assert!(run(args, &ctx).is_err());
    }
}
