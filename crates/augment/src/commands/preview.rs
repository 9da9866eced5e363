//! Preview command implementation

use super::load_file;
use anyhow::Result;
use std::path::Path;

/// Print the augmented form of a single file to stdout
pub fn preview_file(path: &Path, root: Option<&Path>, config_path: Option<&Path>) -> Result<()> {
    let file = load_file(path, root, config_path)?;
    print!("{}", file.rewriter.augment(&file.rel_path, &file.text));
    Ok(())
}
