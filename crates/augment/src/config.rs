//! Tunable heuristics with layered defaults

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Name of the per-tree configuration file looked up in the input root
pub const CONFIG_FILENAME: &str = ".mdaug.toml";

/// Thresholds used by the heading classifier
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeuristicConfig {
    /// Shortest accepted colon header text, in characters
    pub colon_min_chars: usize,

    /// Longest accepted colon header text, in characters
    pub colon_max_chars: usize,

    /// Colon header texts with more words read as sentences
    pub colon_max_words: usize,

    /// Longest accepted text after the number of a numbered header
    pub numbered_max_chars: usize,

    pub allcaps_min_chars: usize,
    pub allcaps_max_chars: usize,

    /// All-caps lines that are never headings on their own
    pub allcaps_exclusions: Vec<String>,
}

impl Default for HeuristicConfig {
    fn default() -> Self {
        Self {
            colon_min_chars: 3,
            colon_max_chars: 60,
            colon_max_words: 8,
            numbered_max_chars: 80,
            allcaps_min_chars: 3,
            allcaps_max_chars: 80,
            allcaps_exclusions: [
                "OK", "TODO", "FIXME", "TBD", "WIP", "NOTE", "NB", "XXX", "HACK", "DONE", "FYI",
                "ASAP", "NA",
            ]
            .iter()
            .map(|s| s.to_string())
            .collect(),
        }
    }
}

/// Limits and vocabulary for alias extraction
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AliasConfig {
    /// Maximum number of aliases per block
    pub max_aliases: usize,

    /// Maximum length of the rendered `[Aliases: ...]` line
    pub max_line_chars: usize,

    /// Non-numeric tokens shorter than this are dropped
    pub min_token_chars: usize,

    /// Words ignored in addition to the built-in stop-word list
    pub extra_stop_words: Vec<String>,
}

impl Default for AliasConfig {
    fn default() -> Self {
        Self {
            max_aliases: 5,
            max_line_chars: 120,
            min_token_chars: 2,
            extra_stop_words: Vec::new(),
        }
    }
}

/// Application configuration with layered defaults
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// File extensions processed during a tree run
    pub extensions: Vec<String>,

    pub heuristics: HeuristicConfig,

    pub aliases: AliasConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            extensions: vec!["md".to_string()],
            heuristics: HeuristicConfig::default(),
            aliases: AliasConfig::default(),
        }
    }
}

impl Config {
    /// Load configuration: defaults, then `explicit` or `<root>/.mdaug.toml` on top
    pub fn load(root: &Path, explicit: Option<&Path>) -> Result<Self> {
        let mut config = Config::default();

        let path = match explicit {
            Some(path) => path.to_path_buf(),
            None => root.join(CONFIG_FILENAME),
        };

        if explicit.is_some() || path.exists() {
            config.merge(Self::load_from_file(&path)?);
        }

        Ok(config)
    }

    fn load_from_file(path: &Path) -> Result<PartialConfig> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;

        Self::parse_partial(&contents)
            .with_context(|| format!("Failed to parse {}", path.display()))
    }

    fn parse_partial(contents: &str) -> Result<PartialConfig> {
        Ok(toml::from_str(contents)?)
    }

    /// Merge partial config into this one (partial takes precedence for specified fields)
    fn merge(&mut self, other: PartialConfig) {
        if let Some(val) = other.extensions {
            self.extensions = val;
        }
        if let Some(h) = other.heuristics {
            let target = &mut self.heuristics;
            if let Some(val) = h.colon_min_chars {
                target.colon_min_chars = val;
            }
            if let Some(val) = h.colon_max_chars {
                target.colon_max_chars = val;
            }
            if let Some(val) = h.colon_max_words {
                target.colon_max_words = val;
            }
            if let Some(val) = h.numbered_max_chars {
                target.numbered_max_chars = val;
            }
            if let Some(val) = h.allcaps_min_chars {
                target.allcaps_min_chars = val;
            }
            if let Some(val) = h.allcaps_max_chars {
                target.allcaps_max_chars = val;
            }
            if let Some(val) = h.allcaps_exclusions {
                target.allcaps_exclusions = val;
            }
        }
        if let Some(a) = other.aliases {
            let target = &mut self.aliases;
            if let Some(val) = a.max_aliases {
                target.max_aliases = val;
            }
            if let Some(val) = a.max_line_chars {
                target.max_line_chars = val;
            }
            if let Some(val) = a.min_token_chars {
                target.min_token_chars = val;
            }
            if let Some(val) = a.extra_stop_words {
                target.extra_stop_words = val;
            }
        }
    }

    /// Whether a file with this extension takes part in a tree run
    pub fn accepts_extension(&self, ext: &str) -> bool {
        self.extensions.iter().any(|e| e.trim_start_matches('.').eq_ignore_ascii_case(ext))
    }
}

/// Partial configuration for deserializing from TOML with optional fields
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct PartialConfig {
    extensions: Option<Vec<String>>,
    heuristics: Option<PartialHeuristics>,
    aliases: Option<PartialAliases>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct PartialHeuristics {
    colon_min_chars: Option<usize>,
    colon_max_chars: Option<usize>,
    colon_max_words: Option<usize>,
    numbered_max_chars: Option<usize>,
    allcaps_min_chars: Option<usize>,
    allcaps_max_chars: Option<usize>,
    allcaps_exclusions: Option<Vec<String>>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct PartialAliases {
    max_aliases: Option<usize>,
    max_line_chars: Option<usize>,
    min_token_chars: Option<usize>,
    extra_stop_words: Option<Vec<String>>,
}
