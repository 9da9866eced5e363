// Test infrastructure and utilities for augment crate tests

#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Sample journal-style note mixing several heading conventions
pub fn sample_journal() -> &'static str {
    "**Team Journal**\n\
     \n\
     2025 07 15\n\
     1. Jeremy Myers\n\
     Talked about the release.\n\
     \n\
     Action Items:\n\
     - ship it\n\
     \n\
     2025 07 16\n\
     NEXT STEPS\n\
     More notes.\n"
}

/// Sample guide with a fenced block that must stay untouched
pub fn sample_guide() -> &'static str {
    "**Installation Guide**\n\
     \n\
     Prerequisites:\n\
     \n\
     - git\n\
     \n\
     ```bash\n\
     # not a heading\n\
     CONFIG:\n\
     ```\n"
}

/// Extract the value of a `[Key: value]` line following the `nth` occurrence of `heading`
pub fn block_field(output: &str, heading: &str, key: &str) -> Option<String> {
    let lines: Vec<&str> = output.lines().collect();
    let start = lines.iter().position(|l| *l == heading)?;
    let prefix = format!("[{}: ", key);
    lines[start + 1..]
        .iter()
        .take_while(|l| l.starts_with('['))
        .find_map(|l| l.strip_prefix(prefix.as_str()))
        .and_then(|rest| rest.strip_suffix(']'))
        .map(str::to_string)
}

/// Temporary input/output directory pair
pub struct TestProject {
    pub root: TempDir,
}

impl TestProject {
    /// Create a new test project with temporary directory
    pub fn new() -> std::io::Result<Self> {
        let root = TempDir::new()?;
        fs::create_dir_all(root.path().join("in"))?;
        Ok(Self { root })
    }

    pub fn input_dir(&self) -> PathBuf {
        self.root.path().join("in")
    }

    pub fn output_dir(&self) -> PathBuf {
        self.root.path().join("out")
    }

    /// Create a markdown file under the input directory
    pub fn create_note(&self, rel: &str, content: &str) -> std::io::Result<PathBuf> {
        write_file(&self.input_dir().join(rel), content)
    }

    /// Write a raw file anywhere under the project root
    pub fn create_file(&self, rel: &str, content: &[u8]) -> std::io::Result<PathBuf> {
        let path = self.root.path().join(rel);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, content)?;
        Ok(path)
    }

    /// Read a file from the output directory
    pub fn read_output(&self, rel: &str) -> std::io::Result<String> {
        fs::read_to_string(self.output_dir().join(rel))
    }

    pub fn output_exists(&self, rel: &str) -> bool {
        self.output_dir().join(rel).exists()
    }
}

impl Default for TestProject {
    fn default() -> Self {
        Self::new().expect("Failed to create test project")
    }
}

fn write_file(path: &Path, content: &str) -> std::io::Result<PathBuf> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, content)?;
    Ok(path.to_path_buf())
}
