//! Run command implementation

use anyhow::{Context, Result};
use augment::batch::{self, BatchOptions};
use augment::config::Config;
use augment::error::print_file_failure;
use augment::rewrite::Rewriter;
use colored::*;
use std::path::Path;

/// Augment every markdown file under `input`, mirroring results into `output`
pub fn run_tree(
    input: &Path,
    output: &Path,
    config_path: Option<&Path>,
    dry_run: bool,
) -> Result<()> {
    let config = Config::load(input, config_path)?;
    let rewriter = Rewriter::new(&config)?;

    if !dry_run {
        std::fs::create_dir_all(output)
            .with_context(|| format!("Failed to create {}", output.display()))?;
    }

    let options = BatchOptions {
        input_root: input.to_path_buf(),
        output_root: output.to_path_buf(),
        dry_run,
    };
    let report = batch::run(&rewriter, &config, &options)?;

    for outcome in &report.processed {
        if outcome.changed {
            let verb = if dry_run { "Would augment:" } else { "Augmented:" };
            println!("  {} {} ({} headings)", verb.green(), outcome.rel_path, outcome.headings);
        } else {
            println!("  {} {}", "Unchanged:".dimmed(), outcome.rel_path);
        }
    }

    for failure in &report.failures {
        let shown = failure.path.strip_prefix(input).unwrap_or(failure.path.as_path());
        print_file_failure(shown, &failure.error);
    }

    println!();
    println!(
        "{} {} changed, {} unchanged, {} failed",
        if report.has_failures() { "⚠".yellow().bold() } else { "✓".green().bold() },
        report.changed(),
        report.unchanged(),
        report.failures.len()
    );

    if report.has_failures() {
        anyhow::bail!("{} file(s) could not be augmented", report.failures.len());
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_run_tree_creates_output() {
        let input = TempDir::new().unwrap();
        let output = TempDir::new().unwrap();
        let out_dir = output.path().join("augmented");
        fs::write(input.path().join("a.md"), "**Title**\ntext\n").unwrap();

        run_tree(input.path(), &out_dir, None, false).unwrap();

        let written = fs::read_to_string(out_dir.join("a.md")).unwrap();
        assert!(written.starts_with("# Title\n[DocTitle: Title]\n"));
    }

    #[test]
    fn test_run_tree_reports_failures() {
        let input = TempDir::new().unwrap();
        let output = TempDir::new().unwrap();
        fs::write(input.path().join("bad.md"), [0xffu8, 0xfe]).unwrap();

        let err = run_tree(input.path(), output.path(), None, false).unwrap_err();
        assert!(err.to_string().contains("could not be augmented"));
    }

    #[test]
    fn test_run_tree_missing_input() {
        let temp = TempDir::new().unwrap();
        let err = run_tree(&temp.path().join("missing"), temp.path(), None, true).unwrap_err();
        assert!(err.to_string().contains("Input directory not found"));
    }
}
