//! Outline command implementation

use super::load_file;
use anyhow::Result;
use augment::rewrite::OutlineEntry;
use colored::*;
use std::path::Path;

/// List the headings the classifier accepts in a file
pub fn outline_file(
    path: &Path,
    root: Option<&Path>,
    config_path: Option<&Path>,
    format: &str,
) -> Result<()> {
    let file = load_file(path, root, config_path)?;
    let result = file.rewriter.process(&file.rel_path, &file.text);

    match format {
        "json" => println!("{}", serde_json::to_string_pretty(&result.outline)?),
        "text" => print_outline(&file.rel_path, &result.outline),
        other => anyhow::bail!("Unknown format: {} (expected text or json)", other),
    }

    Ok(())
}

fn print_outline(rel_path: &str, outline: &[OutlineEntry]) {
    println!("\n{}\n", rel_path.bold().underline());

    if outline.is_empty() {
        println!("  {}", "No headings found".dimmed());
        return;
    }

    for entry in outline {
        let indent = "  ".repeat(entry.level as usize);
        let marker = if entry.injected { "+".green() } else { "=".dimmed() };
        println!(
            "{}{} {} {} {}",
            indent,
            marker,
            format!("{:>4}", entry.line).dimmed(),
            entry.text,
            format!("[{}]", entry.convention).cyan()
        );
    }
    println!();
}
