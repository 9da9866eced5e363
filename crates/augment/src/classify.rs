//! Heading classifier
//!
//! Decides whether a single line is a heading, under which convention and at
//! which level. Rules are tried in [`Convention::PRIORITY`] order and the
//! first rule that produces a candidate wins. The classifier is immutable;
//! everything it knows about the document comes in through [`LineContext`].

use crate::config::HeuristicConfig;
use crate::error::AugmentError;
use crate::filename::title_case;
use crate::heading::{is_blank, is_fence, Convention, HeadingCandidate, LineContext};
use regex::Regex;
use std::collections::HashSet;

type Rule = fn(&Classifier, &str, &LineContext<'_>) -> Option<HeadingCandidate>;

const RULES: [(Convention, Rule); 6] = [
    (Convention::Canonical, Classifier::canonical),
    (Convention::Bold, Classifier::bold),
    (Convention::Colon, Classifier::colon),
    (Convention::Date, Classifier::date),
    (Convention::Numbered, Classifier::numbered),
    (Convention::AllCaps, Classifier::all_caps),
];

/// Lowercase words that open a sentence continuing the previous one
const CONTINUATION_WORDS: &[&str] = &[
    "and", "but", "or", "nor", "so", "yet", "then", "because", "which", "that", "where", "when",
    "while", "if", "including", "such", "also", "plus", "as", "for", "with", "e.g", "i.e",
];

/// Characters that mark a colon line as prose rather than a label
const COLON_REJECT_CHARS: &[char] =
    &['.', ',', ';', ':', '!', '?', '*', '`', '[', ']', '|', '<', '>', '=', '"'];

/// Leading characters of list items, quotes, tables and headings
const BLOCK_MARKERS: &[char] = &['-', '+', '*', '>', '|', '#'];

pub struct Classifier {
    config: HeuristicConfig,
    exclusions: HashSet<String>,
    canonical_re: Regex,
    bold_re: Regex,
    date_re: Regex,
    numbered_re: Regex,
}

impl Classifier {
    pub fn new(config: &HeuristicConfig) -> Result<Self, AugmentError> {
        let exclusions = config
            .allcaps_exclusions
            .iter()
            .map(|word| collapse_spaces(word).to_uppercase())
            .collect();

        Ok(Self {
            config: config.clone(),
            exclusions,
            canonical_re: Regex::new(r"^(#{1,6})(?:[ \t]+(.*))?$")?,
            bold_re: Regex::new(r"^\*\*([^*]+)\*\*$")?,
            date_re: Regex::new(
                r"^(?:\d{4}[ \-]\d{1,2}[ \-]\d{1,2}|\d{1,2}[ \-]\d{1,2}[ \-]\d{4})$",
            )?,
            numbered_re: Regex::new(r"^(\d{1,3})\.[ \t]+(.+)$")?,
        })
    }

    /// Classify `line`, trying every convention in priority order
    pub fn classify(&self, line: &str, ctx: &LineContext<'_>) -> Option<HeadingCandidate> {
        if !Self::eligible(line, ctx) {
            return None;
        }
        RULES.iter().find_map(|(_, rule)| rule(self, line, ctx))
    }

    /// Classify `line` against a single convention only
    pub fn classify_as(
        &self,
        convention: Convention,
        line: &str,
        ctx: &LineContext<'_>,
    ) -> Option<HeadingCandidate> {
        if !Self::eligible(line, ctx) {
            return None;
        }
        RULES.iter().find(|(c, _)| *c == convention).and_then(|(_, rule)| rule(self, line, ctx))
    }

    fn eligible(line: &str, ctx: &LineContext<'_>) -> bool {
        !ctx.in_code_block && !is_blank(line) && !is_fence(line)
    }

    fn canonical(&self, line: &str, _ctx: &LineContext<'_>) -> Option<HeadingCandidate> {
        let caps = self.canonical_re.captures(line.trim())?;
        let level = caps[1].len() as u8;
        let text = caps.get(2).map_or("", |m| strip_closing_hashes(m.as_str()));
        Some(HeadingCandidate::new(text, level, Convention::Canonical))
    }

    fn bold(&self, line: &str, ctx: &LineContext<'_>) -> Option<HeadingCandidate> {
        let caps = self.bold_re.captures(line.trim())?;
        let text = caps[1].trim();

        // `**Note:**` and `**Do not do this.**` are emphasis, not structure
        if text.is_empty() || text.ends_with(':') || text.ends_with('.') || !ctx.stands_alone() {
            return None;
        }

        let level = match ctx.outline.deepest_level() {
            None => 1,
            Some(deepest) if ctx.followed_by_list() => (deepest + 1).clamp(2, 3),
            Some(_) => 2,
        };
        Some(HeadingCandidate::new(text, level, Convention::Bold))
    }

    fn colon(&self, line: &str, ctx: &LineContext<'_>) -> Option<HeadingCandidate> {
        let text = line.trim().strip_suffix(':')?.trim_end();

        let len = text.chars().count();
        if len < self.config.colon_min_chars || len > self.config.colon_max_chars {
            return None;
        }
        if text.contains(COLON_REJECT_CHARS) || text.starts_with(BLOCK_MARKERS) {
            return None;
        }
        if text.split_whitespace().count() > self.config.colon_max_words {
            return None;
        }
        if starts_with_continuation(text) || !ctx.stands_alone() {
            return None;
        }

        Some(HeadingCandidate::new(text, ctx.outline.next_level(), Convention::Colon))
    }

    fn date(&self, line: &str, ctx: &LineContext<'_>) -> Option<HeadingCandidate> {
        let text = line.trim();
        if !self.date_re.is_match(text) {
            return None;
        }

        // Dates open top-level sections unless a bold or numbered title is active
        let under_title = ctx.outline.root().is_some_and(|c| {
            c.level == 1 && matches!(c.convention, Convention::Bold | Convention::Numbered)
        });
        let level = if under_title { 2 } else { 1 };
        Some(HeadingCandidate::new(text, level, Convention::Date))
    }

    fn numbered(&self, line: &str, ctx: &LineContext<'_>) -> Option<HeadingCandidate> {
        let caps = self.numbered_re.captures(line.trim())?;
        let number = &caps[1];
        let rest = caps[2].trim();

        if !rest.chars().next().is_some_and(char::is_uppercase) {
            return None;
        }
        if rest.chars().count() > self.config.numbered_max_chars {
            return None;
        }
        if rest.ends_with(['.', '!', '?', ':', ';', ',']) {
            return None;
        }

        let level = if ctx.outline.is_empty() { 1 } else { 2 };
        Some(HeadingCandidate::new(format!("{}. {}", number, rest), level, Convention::Numbered))
    }

    fn all_caps(&self, line: &str, ctx: &LineContext<'_>) -> Option<HeadingCandidate> {
        let text = collapse_spaces(line.trim());

        let len = text.chars().count();
        if len < self.config.allcaps_min_chars || len > self.config.allcaps_max_chars {
            return None;
        }
        let shape_ok = text.chars().all(|c| c.is_uppercase() || c.is_ascii_digit() || c == ' ');
        if !shape_ok || !text.chars().any(char::is_alphabetic) {
            return None;
        }
        if self.exclusions.contains(&text) || !ctx.stands_alone() {
            return None;
        }

        let level = ctx.outline.next_level();
        Some(HeadingCandidate::new(title_case(&text), level, Convention::AllCaps))
    }
}

/// Drop an optional closing `#` sequence: `Setup ##` -> `Setup`, but `C#` stays
fn strip_closing_hashes(text: &str) -> &str {
    let text = text.trim();
    let without = text.trim_end_matches('#');
    if without.len() == text.len() {
        return text;
    }
    if without.is_empty() || without.ends_with([' ', '\t']) {
        without.trim_end()
    } else {
        text
    }
}

fn collapse_spaces(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn starts_with_continuation(text: &str) -> bool {
    let Some(first) = text.split_whitespace().next() else {
        return false;
    };
    first.chars().next().is_some_and(char::is_lowercase) && CONTINUATION_WORDS.contains(&first)
}
