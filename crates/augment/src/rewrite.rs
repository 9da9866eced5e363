//! Document rewriter
//!
//! One pass over a file: every line goes through the [`Classifier`], accepted
//! headings are normalized to `#` form, and a [`MetadataBlock`] is injected
//! after each heading that does not already carry one. All per-file state
//! lives in a [`FileContext`] created for the pass, so a single [`Rewriter`]
//! can serve many files, including from several threads at once.

use crate::aliases::{clamp_aliases, AliasStrategy, KeywordAliases};
use crate::breadcrumb::Breadcrumbs;
use crate::classify::Classifier;
use crate::config::{AliasConfig, Config};
use crate::error::AugmentError;
use crate::filename::title_from_path;
use crate::frontmatter::frontmatter_len;
use crate::heading::{is_blank, is_fence, Convention, HeadingCandidate, LineContext};
use crate::metadata::{is_block_start, MetadataBlock};
use log::debug;
use serde::Serialize;

/// A heading accepted during a pass
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OutlineEntry {
    /// 1-based line number in the input
    pub line: usize,
    pub level: u8,
    pub convention: Convention,
    pub text: String,
    pub section: String,
    /// A metadata block was added for this heading
    pub injected: bool,
}

/// Result of augmenting one file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Augmented {
    pub text: String,
    pub outline: Vec<OutlineEntry>,
}

/// Per-file state for a single rewriting pass
#[derive(Debug)]
pub struct FileContext {
    rel_path: String,
    fallback_title: String,
    doc_title: Option<String>,
    breadcrumbs: Breadcrumbs,
    in_code_block: bool,
    skip_blank: bool,
    out: Vec<String>,
    outline: Vec<OutlineEntry>,
}

impl FileContext {
    pub fn new(rel_path: &str) -> Self {
        Self {
            rel_path: rel_path.to_string(),
            fallback_title: title_from_path(rel_path),
            doc_title: None,
            breadcrumbs: Breadcrumbs::new(),
            in_code_block: false,
            skip_blank: false,
            out: Vec::new(),
            outline: Vec::new(),
        }
    }

    /// Title for a block emitted now: the first level-1 heading, else the file name
    pub fn doc_title(&self) -> &str {
        self.doc_title.as_deref().unwrap_or(&self.fallback_title)
    }

    pub fn breadcrumbs(&self) -> &Breadcrumbs {
        &self.breadcrumbs
    }

    fn emit(&mut self, line: impl Into<String>) {
        self.out.push(line.into());
    }

    fn last_emitted(&self) -> Option<&str> {
        self.out.last().map(String::as_str)
    }

    fn finish(self) -> Augmented {
        let text = if self.out.is_empty() { String::new() } else { self.out.join("\n") + "\n" };
        Augmented { text, outline: self.outline }
    }
}

/// Heading normalizer and metadata injector
pub struct Rewriter {
    classifier: Classifier,
    aliases: Box<dyn AliasStrategy>,
    alias_limits: AliasConfig,
}

impl Rewriter {
    pub fn new(config: &Config) -> Result<Self, AugmentError> {
        Ok(Self {
            classifier: Classifier::new(&config.heuristics)?,
            aliases: Box::new(KeywordAliases::from_config(&config.aliases)),
            alias_limits: config.aliases.clone(),
        })
    }

    /// Rewriter with built-in thresholds
    pub fn with_defaults() -> Result<Self, AugmentError> {
        Self::new(&Config::default())
    }

    /// Replace the alias guessing strategy
    pub fn with_alias_strategy(mut self, strategy: impl AliasStrategy + 'static) -> Self {
        self.aliases = Box::new(strategy);
        self
    }

    /// Rewrite `text`; `rel_path` is the file's path relative to the input root
    pub fn augment(&self, rel_path: &str, text: &str) -> String {
        self.process(rel_path, text).text
    }

    /// Rewrite `text` and report every accepted heading
    pub fn process(&self, rel_path: &str, text: &str) -> Augmented {
        let lines = split_lines(text);
        let mut file = FileContext::new(rel_path);

        let body_start = frontmatter_len(&lines);
        for line in &lines[..body_start] {
            file.emit(*line);
        }
        for idx in body_start..lines.len() {
            self.step(&mut file, &lines, idx);
        }

        file.finish()
    }

    /// Feed line `idx` of `lines` through the pass
    pub fn step(&self, file: &mut FileContext, lines: &[&str], idx: usize) {
        let line = lines[idx];

        if file.skip_blank {
            if is_blank(line) {
                return;
            }
            file.skip_blank = false;
        }

        if is_fence(line) {
            file.in_code_block = !file.in_code_block;
            file.emit(line);
            return;
        }
        if file.in_code_block {
            file.emit(line);
            return;
        }

        let ctx = LineContext {
            previous: file.last_emitted(),
            next_non_blank: next_non_blank(lines, idx),
            in_code_block: false,
            outline: &file.breadcrumbs,
        };

        match self.classifier.classify(line, &ctx) {
            Some(candidate) => self.accept(file, lines, idx, candidate),
            None => file.emit(line),
        }
    }

    fn accept(
        &self,
        file: &mut FileContext,
        lines: &[&str],
        idx: usize,
        candidate: HeadingCandidate,
    ) {
        let line = lines[idx];
        let HeadingCandidate { text, level, convention } = candidate;
        let text = if text.is_empty() { file.fallback_title.clone() } else { text };

        if level == 1 && file.doc_title.is_none() {
            file.doc_title = Some(text.clone());
        }
        file.breadcrumbs.push(level, text.clone(), convention);

        let header = match convention {
            Convention::Canonical => line.to_string(),
            _ => HeadingCandidate::new(text.clone(), level, convention).to_markdown(),
        };

        let has_block = next_non_blank(lines, idx).is_some_and(is_block_start);
        let section = file.breadcrumbs.section();

        debug!(
            "{}:{}: {} heading at level {}: {}{}",
            file.rel_path,
            idx + 1,
            convention,
            level,
            text,
            if has_block { " (block present)" } else { "" }
        );

        if has_block {
            file.emit(header);
        } else {
            if file.last_emitted().is_some_and(|prev| !is_blank(prev)) {
                file.emit("");
            }
            file.emit(header);

            let block = MetadataBlock {
                doc_title: file.doc_title().to_string(),
                path: file.rel_path.clone(),
                section: section.clone(),
                aliases: clamp_aliases(
                    self.aliases.aliases(&text),
                    self.alias_limits.max_aliases,
                    self.alias_limits.max_line_chars,
                ),
            };
            for block_line in block.lines() {
                file.emit(block_line);
            }
            file.emit("");
            file.skip_blank = true;
        }

        file.outline.push(OutlineEntry {
            line: idx + 1,
            level,
            convention,
            text,
            section,
            injected: !has_block,
        });
    }
}

/// Split on `\n`, dropping every trailing `\r` from each line
fn split_lines(text: &str) -> Vec<&str> {
    if text.is_empty() {
        return Vec::new();
    }
    text.strip_suffix('\n')
        .unwrap_or(text)
        .split('\n')
        .map(|line| line.trim_end_matches('\r'))
        .collect()
}

fn next_non_blank<'a>(lines: &[&'a str], idx: usize) -> Option<&'a str> {
    lines.iter().skip(idx + 1).find(|line| !is_blank(line)).copied()
}
