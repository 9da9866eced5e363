//! File name humanization and relative path rendering

use crate::error::AugmentError;
use std::path::{Component, Path};

/// Capitalize the first letter of every whitespace-separated word
pub fn capitalize_words(text: &str) -> String {
    text.split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                None => String::new(),
                Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Title-case text that arrived in all capitals: `GETTING STARTED` -> `Getting Started`
pub fn title_case(text: &str) -> String {
    capitalize_words(&text.to_lowercase())
}

/// Derive a readable title from a file path: `notes/install_guide.md` -> `Install Guide`
pub fn title_from_path(path: &str) -> String {
    let name = path.rsplit(['/', '\\']).next().unwrap_or(path);

    // Remove extension; a leading dot is not one
    let stem = match name.rfind('.') {
        Some(pos) if pos > 0 => &name[..pos],
        _ => name,
    };

    let with_spaces = stem.replace(['-', '_', '.'], " ");
    let title = capitalize_words(&with_spaces);

    if title.is_empty() {
        "Untitled".to_string()
    } else {
        title
    }
}

/// Render `path` relative to `root` with forward slashes
pub fn relative_path(root: &Path, path: &Path) -> Result<String, AugmentError> {
    let rel = path.strip_prefix(root).map_err(|_| AugmentError::OutsideRoot {
        path: path.to_path_buf(),
        root: root.to_path_buf(),
    })?;

    let parts: Vec<String> = rel
        .components()
        .filter_map(|c| match c {
            Component::Normal(part) => Some(part.to_string_lossy().into_owned()),
            _ => None,
        })
        .collect();

    Ok(parts.join("/"))
}
