//! Metadata block rendering and detection

use crate::aliases::{ALIASES_PREFIX, ALIASES_SUFFIX, ALIAS_SEPARATOR};

/// First characters of every metadata block; used to detect existing blocks
pub const BLOCK_MARKER: &str = "[DocTitle:";

/// Context lines injected after a heading
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetadataBlock {
    pub doc_title: String,
    pub path: String,
    pub section: String,
    pub aliases: Vec<String>,
}

impl MetadataBlock {
    /// Block lines, without the trailing blank line.
    ///
    /// The Aliases line is left out when there are no aliases.
    pub fn lines(&self) -> Vec<String> {
        let mut lines = vec![
            format!("[DocTitle: {}]", self.doc_title),
            format!("[Path: {}]", self.path),
            format!("[Section: {}]", self.section),
        ];
        if !self.aliases.is_empty() {
            lines.push(format!(
                "{}{}{}",
                ALIASES_PREFIX,
                self.aliases.join(ALIAS_SEPARATOR),
                ALIASES_SUFFIX
            ));
        }
        lines
    }

    pub fn render(&self) -> String {
        self.lines().join("\n")
    }
}

/// Whether `line` opens a metadata block
pub fn is_block_start(line: &str) -> bool {
    line.trim_start().starts_with(BLOCK_MARKER)
}
