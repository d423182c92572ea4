use clap::Parser;
use csvglue::commands::CommandContext;
use csvglue::prompt::TerminalPrompt;
use csvglue::{init_tracing, load_config, Cli};
use csvglue_config::LogConfig;
use tracing::error;

fn main() {
    let cli = Cli::parse();

    let config = match load_config(&cli) {
        Ok(config) => config,
        Err(e) => {
            let mut log = LogConfig::default();
            if let Some(level) = &cli.log_level {
                log.level = level.clone();
            }
            init_tracing(&log);
            error!("{:#}", e);
            std::process::exit(1);
        }
    };

    init_tracing(&config.log);

    let ctx = CommandContext {
        config,
        prompt: Box::new(TerminalPrompt),
    };

    if let Err(e) = cli.command.run(&ctx) {
        error!("{:#}", e);
        std::process::exit(1);
    }
}
