//! Stop-word filtering for alias extraction
//!
//! The English list comes from the `stop-words` crate (Stopwords ISO).
//! Configured extra words are layered on top.

use std::collections::HashSet;

use stop_words::LANGUAGE;

/// A case-insensitive stop-word set
#[derive(Debug, Clone)]
pub struct Stopwords {
    words: HashSet<String>,
}

impl Default for Stopwords {
    fn default() -> Self {
        Self::new()
    }
}

impl Stopwords {
    /// English stop-words only
    pub fn new() -> Self {
        Self::with_extra(std::iter::empty::<&str>())
    }

    /// Built-in words plus `extra`
    pub fn with_extra<I, S>(extra: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut words: HashSet<String> =
            stop_words::get(LANGUAGE::English).iter().map(|w| w.to_lowercase()).collect();
        words.extend(extra.into_iter().map(|w| w.as_ref().trim().to_lowercase()));
        Self { words }
    }

    pub fn contains(&self, term: &str) -> bool {
        self.words.contains(&term.to_lowercase())
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_words() {
        let stop = Stopwords::new();
        assert!(stop.contains("the"));
        assert!(stop.contains("The"));
        assert!(stop.contains("between"));
        assert!(stop.contains("AND"));
        assert!(!stop.contains("installation"));
        assert!(!stop.contains("kubernetes"));
    }

    #[test]
    fn test_extra_words() {
        let stop = Stopwords::with_extra(["Standup", " retro "]);
        assert!(stop.contains("standup"));
        assert!(stop.contains("RETRO"));
        assert_eq!(stop.len(), Stopwords::new().len() + 2);
        assert!(!stop.is_empty());
    }
}
