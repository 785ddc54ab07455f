//! Boilerplate extractors.
//!
//! An extractor labels every block of a [`TextDocument`] as content or
//! boilerplate. Six named strategies share one [`Extractor`] interface; the
//! classifier runs each of them over its own copy of the segmented page.
//!
//! # Module Structure
//!
//! - `classifiers`: per-block decision rules over (previous, current, next)
//! - `filters`: document-level passes (terminating blocks, region selection)
//!
//! # Usage
//!
//! ```rust
//! use rs_page_classifier::document::parse;
//! use rs_page_classifier::extractor::{BoilerplateExtractor, Extractor, ExtractorKind};
//!
//! let mut doc = parse("<p>Only one paragraph of text.</p>");
//! let extractor = BoilerplateExtractor::new(ExtractorKind::KeepEverything);
//! assert!(extractor.process(&mut doc).unwrap());
//! assert_eq!(doc.content_blocks(), 1);
//! ```

pub mod classifiers;
pub mod filters;

use tracing::trace;

use crate::document::TextDocument;
use crate::error::{Error, Result};
use crate::result::ExtractorId;

/// Default upper bound on the number of blocks an extractor accepts.
pub const DEFAULT_MAX_BLOCKS: usize = 100_000;

/// Minimum number of words a clause needs under [`ExtractorKind::ArticleSentences`].
pub const MIN_CLAUSE_WORDS: usize = 5;

/// A boilerplate-labelling strategy.
pub trait Extractor: Send + Sync {
    /// Evidence-source identifier recorded for this extractor's vote.
    fn id(&self) -> ExtractorId;

    /// Label every block of `doc`. Returns whether any label changed.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Extraction`] when the document cannot be labelled.
    fn process(&self, doc: &mut TextDocument) -> Result<bool>;
}

/// The six built-in strategies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExtractorKind {
    /// Full-text article: terminating blocks, word-count rules, and the
    /// largest region of nearby content blocks.
    Article,
    /// Text-density rules.
    Default,
    /// Rules tuned for short, link-heavy content.
    Canola,
    /// `Article` plus removal of blocks without a sentence-length clause.
    ArticleSentences,
    /// Word-count rules, then only the single largest content block.
    LargestContent,
    /// Every block is content.
    KeepEverything,
}

impl ExtractorKind {
    /// All strategies in vote order.
    pub const ALL: [Self; 6] = [
        Self::Article,
        Self::Default,
        Self::Canola,
        Self::ArticleSentences,
        Self::LargestContent,
        Self::KeepEverything,
    ];

    #[must_use]
    pub fn id(self) -> ExtractorId {
        match self {
            Self::Article => ExtractorId::Article,
            Self::Default => ExtractorId::Default,
            Self::Canola => ExtractorId::Canola,
            Self::ArticleSentences => ExtractorId::ArticleSentences,
            Self::LargestContent => ExtractorId::LargestContent,
            Self::KeepEverything => ExtractorId::KeepEverything,
        }
    }
}

/// Built-in extractor driving one [`ExtractorKind`] pipeline.
#[derive(Debug, Clone)]
pub struct BoilerplateExtractor {
    kind: ExtractorKind,
    max_blocks: usize,
}

impl BoilerplateExtractor {
    #[must_use]
    pub fn new(kind: ExtractorKind) -> Self {
        Self {
            kind,
            max_blocks: DEFAULT_MAX_BLOCKS,
        }
    }

    /// Fail on documents with more than `max_blocks` blocks.
    #[must_use]
    pub fn with_max_blocks(mut self, max_blocks: usize) -> Self {
        self.max_blocks = max_blocks;
        self
    }

    #[must_use]
    pub fn kind(&self) -> ExtractorKind {
        self.kind
    }

    fn run_article(doc: &mut TextDocument) -> bool {
        let mut changed = filters::mark_terminating_blocks(doc);
        changed |= classifiers::apply_num_words_rules(doc);
        changed |= filters::ignore_blocks_after_content(doc);
        changed |= filters::keep_largest_region(doc);
        changed
    }
}

impl Extractor for BoilerplateExtractor {
    fn id(&self) -> ExtractorId {
        self.kind.id()
    }

    fn process(&self, doc: &mut TextDocument) -> Result<bool> {
        if doc.blocks.len() > self.max_blocks {
            return Err(Error::Extraction {
                extractor: self.id(),
                message: format!(
                    "document has {} blocks, limit is {}",
                    doc.blocks.len(),
                    self.max_blocks
                ),
            });
        }

        let changed = match self.kind {
            ExtractorKind::Article => Self::run_article(doc),
            ExtractorKind::Default => classifiers::apply_density_rules(doc),
            ExtractorKind::Canola => classifiers::apply_canola_rules(doc),
            ExtractorKind::ArticleSentences => {
                let changed = Self::run_article(doc);
                changed | filters::min_clause_words(doc, MIN_CLAUSE_WORDS)
            }
            ExtractorKind::LargestContent => {
                let changed = classifiers::apply_num_words_rules(doc);
                changed | filters::keep_largest_block(doc)
            }
            ExtractorKind::KeepEverything => filters::mark_everything_content(doc),
        };

        trace!(
            extractor = %self.id(),
            content_blocks = doc.content_blocks(),
            total_blocks = doc.blocks.len(),
            "document labelled"
        );
        Ok(changed)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::document::parse;

    #[test]
    fn kinds_map_to_distinct_ids() {
        let ids: Vec<ExtractorId> = ExtractorKind::ALL.iter().map(|k| k.id()).collect();
        assert_eq!(
            ids,
            [
                ExtractorId::Article,
                ExtractorId::Default,
                ExtractorId::Canola,
                ExtractorId::ArticleSentences,
                ExtractorId::LargestContent,
                ExtractorId::KeepEverything,
            ]
        );
    }

    #[test]
    fn too_many_blocks_is_an_extraction_error() {
        let mut doc = parse("<p>one</p><p>two</p><p>three</p>");
        let extractor = BoilerplateExtractor::new(ExtractorKind::Default).with_max_blocks(2);
        let err = extractor.process(&mut doc).unwrap_err();
        assert!(matches!(
            err,
            Error::Extraction {
                extractor: ExtractorId::Default,
                ..
            }
        ));
    }

    #[test]
    fn extractors_never_change_block_count() {
        let html = "<h1>Title</h1><p>Intro words here.</p><ul><li><a href='/'>Home</a></li></ul>";
        for kind in ExtractorKind::ALL {
            let mut doc = parse(html);
            let before = doc.blocks.len();
            BoilerplateExtractor::new(kind).process(&mut doc).unwrap();
            assert_eq!(doc.blocks.len(), before, "{kind:?}");
        }
    }
}
