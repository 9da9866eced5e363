//! Breadcrumb stack tracking the active heading path of a document

use crate::heading::{Convention, MAX_LEVEL};
use serde::Serialize;

/// Separator between breadcrumb texts in a Section line
pub const SECTION_SEPARATOR: &str = " > ";

/// One active heading
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Crumb {
    pub level: u8,
    pub text: String,
    pub convention: Convention,
}

/// Path from the top-level heading to the current one.
///
/// Levels strictly increase from first to last entry. Pushing a heading of
/// level `L` first discards every entry with level `>= L`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Breadcrumbs {
    entries: Vec<Crumb>,
}

impl Breadcrumbs {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn entries(&self) -> &[Crumb] {
        &self.entries
    }

    /// Outermost active heading
    pub fn root(&self) -> Option<&Crumb> {
        self.entries.first()
    }

    pub fn deepest_level(&self) -> Option<u8> {
        self.entries.last().map(|c| c.level)
    }

    /// One level below the deepest active heading, or 1 when nothing is active
    pub fn next_level(&self) -> u8 {
        self.deepest_level().map_or(1, |level| (level + 1).min(MAX_LEVEL))
    }

    /// Truncate to entries above `level`, then append the new heading
    pub fn push(&mut self, level: u8, text: impl Into<String>, convention: Convention) {
        self.entries.retain(|c| c.level < level);
        self.entries.push(Crumb { level, text: text.into(), convention });
    }

    /// Breadcrumb texts joined for the Section line
    pub fn section(&self) -> String {
        self.entries.iter().map(|c| c.text.as_str()).collect::<Vec<_>>().join(SECTION_SEPARATOR)
    }
}
