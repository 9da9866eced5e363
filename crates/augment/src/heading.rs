//! Heading conventions, classifier output and line context

use crate::breadcrumb::Breadcrumbs;
use serde::Serialize;
use std::fmt;

/// Deepest markdown heading level
pub const MAX_LEVEL: u8 = 6;

/// Textual convention a heading was written in before normalization
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Convention {
    Canonical,
    Bold,
    Colon,
    Date,
    Numbered,
    AllCaps,
}

impl Convention {
    /// All conventions in classification priority order
    pub const PRIORITY: [Convention; 6] = [
        Convention::Canonical,
        Convention::Bold,
        Convention::Colon,
        Convention::Date,
        Convention::Numbered,
        Convention::AllCaps,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Convention::Canonical => "canonical",
            Convention::Bold => "bold",
            Convention::Colon => "colon",
            Convention::Date => "date",
            Convention::Numbered => "numbered",
            Convention::AllCaps => "all-caps",
        }
    }
}

impl fmt::Display for Convention {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A line the classifier accepted as a heading
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HeadingCandidate {
    /// Heading content with markup stripped; empty only for bare `#` lines
    pub text: String,
    pub level: u8,
    pub convention: Convention,
}

impl HeadingCandidate {
    pub fn new(text: impl Into<String>, level: u8, convention: Convention) -> Self {
        Self { text: text.into(), level: level.clamp(1, MAX_LEVEL), convention }
    }

    /// Canonical `#` form of this heading
    pub fn to_markdown(&self) -> String {
        format!("{} {}", "#".repeat(self.level as usize), self.text)
    }
}

/// What the classifier may know about a line besides its text
#[derive(Debug, Clone, Copy)]
pub struct LineContext<'a> {
    /// Line emitted just before this one, if any
    pub previous: Option<&'a str>,

    /// Next non-blank input line after this one
    pub next_non_blank: Option<&'a str>,

    pub in_code_block: bool,

    /// Headings active above this line
    pub outline: &'a Breadcrumbs,
}

impl<'a> LineContext<'a> {
    pub fn new(outline: &'a Breadcrumbs) -> Self {
        Self { previous: None, next_non_blank: None, in_code_block: false, outline }
    }

    pub fn with_previous(mut self, previous: &'a str) -> Self {
        self.previous = Some(previous);
        self
    }

    pub fn with_next(mut self, next: &'a str) -> Self {
        self.next_non_blank = Some(next);
        self
    }

    pub fn in_code(mut self) -> Self {
        self.in_code_block = true;
        self
    }

    /// The line is not glued to a preceding paragraph line
    pub fn stands_alone(&self) -> bool {
        self.previous.map_or(true, |prev| {
            let prev = prev.trim();
            prev.is_empty() || is_atx_heading(prev) || is_thematic_break(prev)
        })
    }

    /// The next content is a list item or indented block
    pub fn followed_by_list(&self) -> bool {
        self.next_non_blank.is_some_and(|next| {
            let trimmed = next.trim_start();
            trimmed.starts_with("- ")
                || trimmed.starts_with("* ")
                || trimmed.starts_with("+ ")
                || next.starts_with("  ")
                || next.starts_with('\t')
        })
    }
}

/// Whitespace-only or empty
pub fn is_blank(line: &str) -> bool {
    line.trim().is_empty()
}

/// `#` to `######` followed by whitespace or nothing; `#hashtag` is prose
pub fn is_atx_heading(line: &str) -> bool {
    let line = line.trim();
    let rest = line.trim_start_matches('#');
    let hashes = line.len() - rest.len();
    (1..=MAX_LEVEL as usize).contains(&hashes) && (rest.is_empty() || rest.starts_with([' ', '\t']))
}

/// `---`, `***` or `___`, optionally spaced
pub fn is_thematic_break(line: &str) -> bool {
    let marks: Vec<char> = line.chars().filter(|c| !c.is_whitespace()).collect();
    marks.len() >= 3 && matches!(marks[0], '-' | '*' | '_') && marks.iter().all(|c| *c == marks[0])
}

/// Opening or closing fence of a code block
pub fn is_fence(line: &str) -> bool {
    let trimmed = line.trim_start();
    trimmed.starts_with("```") || trimmed.starts_with("~~~")
}
