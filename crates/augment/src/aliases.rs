//! Keyword aliases derived from heading text
//!
//! Alias guessing is pluggable through [`AliasStrategy`]; any
//! `Fn(&str) -> Vec<String>` closure works as a strategy. Whatever a strategy
//! returns is clamped by [`clamp_aliases`] so every Aliases line respects the
//! same count and length bounds.

use crate::config::AliasConfig;
use crate::stopwords::Stopwords;
use std::collections::HashSet;

/// Prefix and suffix around the joined aliases in a metadata block
pub const ALIASES_PREFIX: &str = "[Aliases: ";
pub const ALIASES_SUFFIX: &str = "]";

/// Separator between aliases
pub const ALIAS_SEPARATOR: &str = ", ";

/// Characters that split heading text into tokens, besides whitespace
const SEPARATORS: &[char] = &[
    '(', ')', '[', ']', '{', '}', ':', ',', '.', ';', '"', '\'', '*', '_', '`', '/', '\\', '|',
    '!', '?', '-', '&', '+', '=', '<', '>', '#', '~',
];

/// Turns heading text into candidate keywords
pub trait AliasStrategy: Send + Sync {
    fn aliases(&self, heading: &str) -> Vec<String>;
}

impl<F> AliasStrategy for F
where
    F: Fn(&str) -> Vec<String> + Send + Sync,
{
    fn aliases(&self, heading: &str) -> Vec<String> {
        self(heading)
    }
}

/// Default strategy: heading tokens minus stop-words and short numbers
#[derive(Debug, Clone)]
pub struct KeywordAliases {
    stopwords: Stopwords,
    min_token_chars: usize,
}

impl Default for KeywordAliases {
    fn default() -> Self {
        Self::from_config(&AliasConfig::default())
    }
}

impl KeywordAliases {
    pub fn from_config(config: &AliasConfig) -> Self {
        Self {
            stopwords: Stopwords::with_extra(&config.extra_stop_words),
            min_token_chars: config.min_token_chars,
        }
    }

    fn keep(&self, token: &str) -> bool {
        let len = token.chars().count();
        if token.chars().all(|c| c.is_ascii_digit()) {
            // Page and item numbers go, years stay
            return len >= 4;
        }
        len >= self.min_token_chars && !self.stopwords.contains(token)
    }
}

impl AliasStrategy for KeywordAliases {
    fn aliases(&self, heading: &str) -> Vec<String> {
        let mut seen = HashSet::new();
        heading
            .split(|c: char| c.is_whitespace() || SEPARATORS.contains(&c))
            .filter(|token| !token.is_empty() && self.keep(token))
            .filter(|token| seen.insert(token.to_lowercase()))
            .map(str::to_string)
            .collect()
    }
}

/// Bound `aliases` to `max_aliases` entries and a rendered line of `max_line_chars`.
///
/// Empty and case-insensitive duplicate entries are dropped first. Whole
/// aliases are removed from the end until the line fits; aliases are never
/// cut mid-token.
pub fn clamp_aliases(
    aliases: Vec<String>,
    max_aliases: usize,
    max_line_chars: usize,
) -> Vec<String> {
    let overhead = ALIASES_PREFIX.chars().count() + ALIASES_SUFFIX.chars().count();
    let budget = max_line_chars.saturating_sub(overhead);

    let mut seen = HashSet::new();
    let mut kept = Vec::new();
    let mut used = 0;

    for alias in aliases {
        let alias = alias.trim().to_string();
        if alias.is_empty() || !seen.insert(alias.to_lowercase()) {
            continue;
        }
        if kept.len() == max_aliases {
            break;
        }
        let sep = if kept.is_empty() { 0 } else { ALIAS_SEPARATOR.len() };
        let cost = sep + alias.chars().count();
        if used + cost > budget {
            break;
        }
        used += cost;
        kept.push(alias);
    }

    kept
}

/// Default alias guess for a heading, already clamped to the default bounds
pub fn guess_aliases_from_heading(text: &str) -> Vec<String> {
    let config = AliasConfig::default();
    let guessed = KeywordAliases::default().aliases(text);
    clamp_aliases(guessed, config.max_aliases, config.max_line_chars)
}
