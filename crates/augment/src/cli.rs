//! CLI argument parsing

use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "mdaug")]
#[command(about = "Markdown Heading Augmenter", long_about = None)]
#[command(after_help = "Use 'mdaug <command> --help' for more information about a command.")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Configuration file (defaults to <root>/.mdaug.toml when present)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Increase log output (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Augment every markdown file under a directory
    #[command(visible_alias = "augment")]
    Run {
        /// Input folder with markdown files
        #[arg(long = "in", value_name = "DIR")]
        input: PathBuf,

        /// Output folder for augmented files (may equal --in)
        #[arg(long = "out", value_name = "DIR")]
        output: PathBuf,

        /// Show what would change without writing files
        #[arg(long)]
        dry_run: bool,
    },

    /// Print the augmented form of a single file
    Preview {
        /// Path to document
        path: PathBuf,

        /// Root used for the Path field (defaults to the file's directory)
        #[arg(short, long)]
        root: Option<PathBuf>,
    },

    /// List the headings detected in a file
    #[command(visible_alias = "headings")]
    Outline {
        /// Path to document
        path: PathBuf,

        /// Root used for the Path field (defaults to the file's directory)
        #[arg(short, long)]
        root: Option<PathBuf>,

        /// Output format (text or json)
        #[arg(short, long, default_value = "text")]
        format: String,
    },

    /// Print the effective configuration
    Config {
        /// Root whose .mdaug.toml is read (defaults to the current directory)
        root: Option<PathBuf>,
    },
}
