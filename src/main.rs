use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use taskcat::cli::handlers::{
    CommandContext, handle_categorize, handle_export, handle_init, handle_render, handle_tui,
};
use taskcat::cli::{Cli, Commands};
use taskcat::config::TaskcatConfig;
use taskcat::logging::{self, LogTarget};

fn main() -> Result<()> {
    // A missing .env is fine; real environment variables take precedence
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let command = cli.command.unwrap_or(Commands::Tui);

    let log_file = cli.log_file.map(PathBuf::from);
    let target = match command {
        // The TUI owns the terminal, so its logs go to a file
        Commands::Tui => LogTarget::FileOnly(log_file.unwrap_or_else(logging::default_log_file)),
        _ => LogTarget::Stderr(log_file),
    };
    logging::init(cli.verbose, target);

    match command {
        Commands::Init { force } => handle_init(force),
        Commands::Render { file, json } => handle_render(file, json),
        Commands::Export {
            file,
            check,
            all,
            copy,
        } => handle_export(file, check, all, copy),
        Commands::Categorize {
            tasks,
            file,
            json,
            raw,
            dry_run,
        } => {
            let ctx = load_context(cli.config, cli.api_key)?;
            handle_categorize(&ctx, tasks, file, json, raw, dry_run)
        }
        Commands::Tui => {
            let ctx = load_context(cli.config, cli.api_key)?;
            handle_tui(ctx)
        }
    }
}

fn load_context(config_path: Option<String>, api_key: Option<String>) -> Result<CommandContext> {
    let config = match config_path {
        Some(path) => TaskcatConfig::load(&PathBuf::from(path)),
        None => TaskcatConfig::discover(&std::env::current_dir()?),
    }
    .context("Failed to load taskcat configuration")?;

    Ok(CommandContext::new(config, api_key))
}
