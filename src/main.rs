use std::path::Path;

use anyhow::Result;
use clap::Parser;

use fitlog::cli::handlers::{CommandContext, handle_init, handle_log, handle_path};
use fitlog::cli::{Cli, Commands};
use fitlog::logging;

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose, cli.log_file.clone());

    let cwd = std::env::current_dir()?;

    match cli.command.unwrap_or_default() {
        Commands::Init => handle_init(&cwd, cli.data_dir),
        Commands::Log { date, strict } => {
            let ctx = load_context(&cwd, cli.config.as_deref(), cli.data_dir)?;
            handle_log(&ctx, date, strict)
        }
        Commands::Path => {
            let ctx = load_context(&cwd, cli.config.as_deref(), cli.data_dir)?;
            handle_path(&ctx)
        }
    }
}

fn load_context(
    cwd: &Path,
    config: Option<&Path>,
    data_dir: Option<String>,
) -> Result<CommandContext> {
    let ctx = CommandContext::load(cwd, config, data_dir)?;
    tracing::debug!(log = %ctx.log.path().display(), "resolved workout log");
    Ok(ctx)
}
