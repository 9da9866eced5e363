//! Command implementations

pub mod config;
pub mod outline;
pub mod preview;
pub mod run;

pub use config::show_config;
pub use outline::outline_file;
pub use preview::preview_file;
pub use run::run_tree;

use anyhow::{Context, Result};
use augment::config::Config;
use augment::filename::relative_path;
use augment::rewrite::Rewriter;
use std::path::{Path, PathBuf};

/// A single file loaded for preview or outline
pub(crate) struct LoadedFile {
    pub rel_path: String,
    pub text: String,
    pub rewriter: Rewriter,
}

/// Read `path`, resolve its root-relative path and build a rewriter for its tree
pub(crate) fn load_file(
    path: &Path,
    root: Option<&Path>,
    config_path: Option<&Path>,
) -> Result<LoadedFile> {
    if !path.is_file() {
        anyhow::bail!("File not found: {}", path.display());
    }

    let root: PathBuf = match root {
        Some(root) => root.to_path_buf(),
        None => path.parent().map(Path::to_path_buf).unwrap_or_default(),
    };

    let config = Config::load(&root, config_path)?;
    let rewriter = Rewriter::new(&config)?;
    let rel_path = relative_path(&root, path)?;
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;

    Ok(LoadedFile { rel_path, text, rewriter })
}
