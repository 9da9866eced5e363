//! Error types and terminal error reporting

use colored::*;
use std::error::Error as _;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AugmentError {
    #[error("Invalid heading pattern: {0}")]
    Pattern(#[from] regex::Error),

    #[error("Input directory not found: {0}")]
    MissingInput(PathBuf),

    #[error("{path} is not inside {root}")]
    OutsideRoot { path: PathBuf, root: PathBuf },

    #[error("Failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to walk {path}: {source}")]
    Walk {
        path: PathBuf,
        #[source]
        source: walkdir::Error,
    },
}

impl AugmentError {
    /// The underlying cause alone, without the path the variant carries
    pub fn reason(&self) -> String {
        self.source().map_or_else(|| self.to_string(), ToString::to_string)
    }
}

/// Print a failed command with its chain of causes
pub fn print_error(context: &str, error: &anyhow::Error) {
    eprintln!("{} {}", "Error:".red().bold(), context);
    eprintln!("  {}", error.to_string().red());

    let mut current = error.source();
    while let Some(cause) = current {
        eprintln!("  {} {}", "Caused by:".dimmed(), cause.to_string().dimmed());
        current = cause.source();
    }
}

/// Print a failed command followed by a hint for fixing it
pub fn print_error_with_suggestion(context: &str, error: &anyhow::Error, suggestion: &str) {
    print_error(context, error);
    eprintln!("\n{} {}", "Suggestion:".cyan().bold(), suggestion);
}

/// Print a markdown file the batch left unwritten
pub fn print_file_failure(path: &Path, error: &AugmentError) {
    eprintln!("  {} {} ({})", "Skipped:".yellow().bold(), path.display(), error.reason());
}
