//! Tree traversal: discover markdown files, augment them, mirror the output

use crate::config::Config;
use crate::error::AugmentError;
use crate::filename::relative_path;
use crate::rewrite::Rewriter;
use log::{info, warn};
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::{DirEntry, WalkDir};

/// Where to read from and write to
#[derive(Debug, Clone)]
pub struct BatchOptions {
    pub input_root: PathBuf,
    pub output_root: PathBuf,
    /// Augment but write nothing
    pub dry_run: bool,
}

/// What happened to one successfully processed file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileOutcome {
    pub rel_path: String,
    /// Output differs from input
    pub changed: bool,
    pub headings: usize,
}

/// A file that could not be processed
#[derive(Debug)]
pub struct FileFailure {
    pub path: PathBuf,
    pub error: AugmentError,
}

#[derive(Debug, Default)]
pub struct BatchReport {
    pub processed: Vec<FileOutcome>,
    pub failures: Vec<FileFailure>,
}

impl BatchReport {
    pub fn changed(&self) -> usize {
        self.processed.iter().filter(|o| o.changed).count()
    }

    pub fn unchanged(&self) -> usize {
        self.processed.len() - self.changed()
    }

    pub fn has_failures(&self) -> bool {
        !self.failures.is_empty()
    }
}

/// Collect candidate files under `root`, sorted by path.
///
/// Hidden entries and anything under `exclude` are skipped. Entries that
/// cannot be read are returned as failures instead of aborting the walk.
pub fn discover(
    root: &Path,
    config: &Config,
    exclude: Option<&Path>,
) -> Result<(Vec<PathBuf>, Vec<FileFailure>), AugmentError> {
    if !root.is_dir() {
        return Err(AugmentError::MissingInput(root.to_path_buf()));
    }

    let mut files = Vec::new();
    let mut failures = Vec::new();

    let walker = WalkDir::new(root)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|e| e.depth() == 0 || (!is_hidden(e) && !is_excluded(e, exclude)));

    for entry in walker {
        match entry {
            Ok(entry) => {
                let path = entry.path();
                let wanted = entry.file_type().is_file()
                    && path
                        .extension()
                        .and_then(|e| e.to_str())
                        .is_some_and(|e| config.accepts_extension(e));
                if wanted {
                    files.push(path.to_path_buf());
                }
            }
            Err(err) => {
                let path = err.path().map_or_else(|| root.to_path_buf(), Path::to_path_buf);
                warn!("Skipping {}: {}", path.display(), err);
                failures.push(FileFailure {
                    path: path.clone(),
                    error: AugmentError::Walk { path, source: err },
                });
            }
        }
    }

    Ok((files, failures))
}

/// Augment every discovered file, continuing past per-file failures
pub fn run(
    rewriter: &Rewriter,
    config: &Config,
    options: &BatchOptions,
) -> Result<BatchReport, AugmentError> {
    let exclude = output_inside_input(options);
    let (files, failures) = discover(&options.input_root, config, exclude.as_deref())?;

    let mut report = BatchReport { processed: Vec::new(), failures };

    for path in files {
        match process_file(rewriter, options, &path) {
            Ok(outcome) => {
                info!("Augmented: {}", outcome.rel_path);
                report.processed.push(outcome);
            }
            Err(error) => {
                warn!("Failed: {}: {}", path.display(), error);
                report.failures.push(FileFailure { path, error });
            }
        }
    }

    Ok(report)
}

/// Augment one file and write it to its mirrored location
pub fn process_file(
    rewriter: &Rewriter,
    options: &BatchOptions,
    path: &Path,
) -> Result<FileOutcome, AugmentError> {
    let rel_path = relative_path(&options.input_root, path)?;

    let text = fs::read_to_string(path)
        .map_err(|source| AugmentError::Read { path: path.to_path_buf(), source })?;
    let result = rewriter.process(&rel_path, &text);

    if !options.dry_run {
        let dest = options.output_root.join(&rel_path);
        if let Some(parent) = dest.parent() {
            fs::create_dir_all(parent)
                .map_err(|source| AugmentError::Write { path: parent.to_path_buf(), source })?;
        }
        fs::write(&dest, &result.text)
            .map_err(|source| AugmentError::Write { path: dest.clone(), source })?;
    }

    Ok(FileOutcome { changed: result.text != text, headings: result.outline.len(), rel_path })
}

fn is_hidden(entry: &DirEntry) -> bool {
    entry.file_name().to_str().is_some_and(|name| name.starts_with('.'))
}

fn is_excluded(entry: &DirEntry, exclude: Option<&Path>) -> bool {
    exclude.is_some_and(|ex| entry.path() == ex)
}

/// The output directory, when it sits strictly inside the input tree
fn output_inside_input(options: &BatchOptions) -> Option<PathBuf> {
    let input = options.input_root.canonicalize().ok()?;
    let output = options.output_root.canonicalize().ok()?;
    if output != input && output.starts_with(&input) {
        // Express it under the walk root so entry paths compare equal
        let rel = output.strip_prefix(&input).ok()?;
        Some(options.input_root.join(rel))
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write(root: &Path, rel: &str, content: &str) {
        let path = root.join(rel);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, content).unwrap();
    }

    fn options(input: &Path, output: &Path) -> BatchOptions {
        BatchOptions {
            input_root: input.to_path_buf(),
            output_root: output.to_path_buf(),
            dry_run: false,
        }
    }

    #[test]
    fn test_discover_filters_and_sorts() {
        let temp = TempDir::new().unwrap();
        write(temp.path(), "b.md", "# B");
        write(temp.path(), "a/nested.md", "# N");
        write(temp.path(), "notes.txt", "text");
        write(temp.path(), ".hidden/secret.md", "# S");

        let (files, failures) = discover(temp.path(), &Config::default(), None).unwrap();
        assert!(failures.is_empty());
        let rel: Vec<String> =
            files.iter().map(|p| relative_path(temp.path(), p).unwrap()).collect();
        assert_eq!(rel, vec!["a/nested.md", "b.md"]);
    }

    #[test]
    fn test_discover_missing_root() {
        let temp = TempDir::new().unwrap();
        let missing = temp.path().join("nope");
        let result = discover(&missing, &Config::default(), None);
        assert!(matches!(result, Err(AugmentError::MissingInput(_))));
    }

    #[test]
    fn test_run_mirrors_tree() {
        let input = TempDir::new().unwrap();
        let output = TempDir::new().unwrap();
        write(input.path(), "team/sync.md", "**Weekly Sync**\n\nAgenda:\n- one\n");

        let rewriter = Rewriter::with_defaults().unwrap();
        let opts = options(input.path(), output.path());
        let report = run(&rewriter, &Config::default(), &opts).unwrap();

        assert_eq!(report.processed.len(), 1);
        assert_eq!(report.changed(), 1);
        assert_eq!(report.processed[0].headings, 2);
        let written = fs::read_to_string(output.path().join("team/sync.md")).unwrap();
        assert!(written
            .starts_with("# Weekly Sync\n[DocTitle: Weekly Sync]\n[Path: team/sync.md]\n"));
        assert!(written.contains("## Agenda\n"));
    }

    #[test]
    fn test_run_continues_after_bad_file() {
        let input = TempDir::new().unwrap();
        let output = TempDir::new().unwrap();
        fs::write(input.path().join("bad.md"), [0xff, 0xfe, 0x00, 0x41]).unwrap();
        write(input.path(), "good.md", "# Good\n");

        let rewriter = Rewriter::with_defaults().unwrap();
        let opts = options(input.path(), output.path());
        let report = run(&rewriter, &Config::default(), &opts).unwrap();

        assert_eq!(report.failures.len(), 1);
        assert!(matches!(report.failures[0].error, AugmentError::Read { .. }));
        assert_eq!(report.processed.len(), 1);
        assert!(output.path().join("good.md").exists());
        assert!(!output.path().join("bad.md").exists());
    }

    #[test]
    fn test_dry_run_writes_nothing() {
        let input = TempDir::new().unwrap();
        let output = TempDir::new().unwrap();
        write(input.path(), "a.md", "# A\n");

        let rewriter = Rewriter::with_defaults().unwrap();
        let opts = BatchOptions { dry_run: true, ..options(input.path(), output.path()) };
        let report = run(&rewriter, &Config::default(), &opts).unwrap();

        assert_eq!(report.changed(), 1);
        assert!(!output.path().join("a.md").exists());
    }

    #[test]
    fn test_output_inside_input_is_skipped() {
        let input = TempDir::new().unwrap();
        write(input.path(), "a.md", "# A\n");
        let output = input.path().join("out");
        fs::create_dir_all(&output).unwrap();

        let rewriter = Rewriter::with_defaults().unwrap();
        run(&rewriter, &Config::default(), &options(input.path(), &output)).unwrap();
        // Second run must not pick up out/a.md as a new input
        let report = run(&rewriter, &Config::default(), &options(input.path(), &output)).unwrap();
        assert_eq!(report.processed.len(), 1);
        assert!(!output.join("out").exists());
    }

    #[test]
    fn test_rerun_on_output_is_unchanged() {
        let input = TempDir::new().unwrap();
        let first = TempDir::new().unwrap();
        let second = TempDir::new().unwrap();
        write(input.path(), "journal.md", "2025 07 15\n1. Jeremy Myers\nnotes\n");

        let rewriter = Rewriter::with_defaults().unwrap();
        run(&rewriter, &Config::default(), &options(input.path(), first.path())).unwrap();
        let opts = options(first.path(), second.path());
        let report = run(&rewriter, &Config::default(), &opts).unwrap();

        assert_eq!(report.changed(), 0);
        assert_eq!(report.unchanged(), 1);
    }
}
