//! Markdown heading augmenter CLI

use anyhow::Result;
use augment::error::{print_error, print_error_with_suggestion, AugmentError};
use clap::Parser;
use log::LevelFilter;

mod cli;
mod commands;

use cli::{Cli, Commands};
use commands::*;

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        _ => LevelFilter::Debug,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .format_timestamp(None)
        .parse_default_env()
        .init();

    let config = cli.config.as_deref();

    let result = match cli.command {
        Commands::Run { input, output, dry_run } => run_tree(&input, &output, config, dry_run),
        Commands::Preview { path, root } => preview_file(&path, root.as_deref(), config),
        Commands::Outline { path, root, format } => {
            outline_file(&path, root.as_deref(), config, &format)
        }
        Commands::Config { root } => show_config(root.as_deref(), config),
    };

    if let Err(e) = result {
        match e.downcast_ref::<AugmentError>() {
            Some(AugmentError::MissingInput(_)) => print_error_with_suggestion(
                "Command failed",
                &e,
                "Check the --in path, or create the directory first",
            ),
            _ => print_error("Command failed", &e),
        }
        std::process::exit(1);
    }

    Ok(())
}
