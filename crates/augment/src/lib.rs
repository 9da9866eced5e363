//! Markdown heading normalization for retrieval pipelines
//!
//! Rewrites markdown notes so that every heading, whatever pseudo-header
//! convention it was written in, becomes a canonical `#` header followed by a
//! metadata block naming the document, its path, the section breadcrumb and
//! a few keyword aliases.

pub mod aliases;
pub mod batch;
pub mod breadcrumb;
pub mod classify;
pub mod config;
pub mod error;
pub mod filename;
pub mod frontmatter;
pub mod heading;
pub mod metadata;
pub mod rewrite;
pub mod stopwords;

pub use aliases::{guess_aliases_from_heading, AliasStrategy, KeywordAliases};
pub use breadcrumb::Breadcrumbs;
pub use classify::Classifier;
pub use config::Config;
pub use error::AugmentError;
pub use heading::{Convention, HeadingCandidate, LineContext};
pub use metadata::MetadataBlock;
pub use rewrite::{Augmented, OutlineEntry, Rewriter};

/// Re-export common error types
pub use anyhow::{Error, Result};
