//! Per-block content rules.
//!
//! Each rule looks at a block together with its previous and next neighbour
//! (an empty block stands in past either end of the document) and decides
//! whether the block is content. The decision trees are shallow and fixed;
//! their thresholds are link density, word count and text density.

use crate::document::{TextBlock, TextDocument};

// =============================================================================
// Rule Inputs
// =============================================================================

/// The features a rule reads from one block.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct BlockFeatures {
    pub num_words: usize,
    pub link_density: f64,
    pub text_density: f64,
}

impl From<&TextBlock> for BlockFeatures {
    fn from(block: &TextBlock) -> Self {
        Self {
            num_words: block.num_words,
            link_density: block.link_density,
            text_density: block.text_density(),
        }
    }
}

/// Apply `rule` to every block with its neighbours and store the verdicts.
///
/// Returns whether any block changed its content flag.
fn apply_rule<F>(doc: &mut TextDocument, rule: F) -> bool
where
    F: Fn(BlockFeatures, BlockFeatures, BlockFeatures) -> bool,
{
    let features: Vec<BlockFeatures> = doc.blocks.iter().map(BlockFeatures::from).collect();
    let at = |i: Option<usize>| i.and_then(|i| features.get(i)).copied().unwrap_or_default();

    let mut changed = false;
    for (i, block) in doc.blocks.iter_mut().enumerate() {
        let is_content = rule(at(i.checked_sub(1)), features[i], at(Some(i + 1)));
        changed |= block.is_content != is_content;
        block.is_content = is_content;
    }
    changed
}

// =============================================================================
// Decision Trees
// =============================================================================

/// Text-density rule used by the default extractor.
#[must_use]
pub fn density_rule(prev: BlockFeatures, curr: BlockFeatures, next: BlockFeatures) -> bool {
    if curr.link_density > 0.333_333 {
        return false;
    }
    if prev.link_density <= 0.555_556 {
        if curr.text_density <= 9.0 {
            if next.text_density <= 10.0 {
                prev.text_density > 4.0
            } else {
                true
            }
        } else {
            next.text_density != 0.0
        }
    } else {
        next.text_density > 11.0
    }
}

/// Word-count rule used by the article-family extractors.
#[must_use]
pub fn num_words_rule(prev: BlockFeatures, curr: BlockFeatures, next: BlockFeatures) -> bool {
    if curr.link_density > 0.333_333 {
        return false;
    }
    if prev.link_density <= 0.555_556 {
        if curr.num_words <= 16 && next.num_words <= 15 {
            prev.num_words > 4
        } else {
            true
        }
    } else if curr.num_words <= 40 {
        next.num_words > 17
    } else {
        true
    }
}

/// Rule tuned for short link-heavy content (news tickers, listings).
#[must_use]
pub fn canola_rule(_prev: BlockFeatures, curr: BlockFeatures, next: BlockFeatures) -> bool {
    (curr.link_density > 0.0 && next.num_words > 11)
        || (curr.num_words > 12 && next.num_words > 6)
        || (curr.link_density == 0.0 && curr.num_words > 20)
}

pub fn apply_density_rules(doc: &mut TextDocument) -> bool {
    apply_rule(doc, density_rule)
}

pub fn apply_num_words_rules(doc: &mut TextDocument) -> bool {
    apply_rule(doc, num_words_rule)
}

pub fn apply_canola_rules(doc: &mut TextDocument) -> bool {
    apply_rule(doc, canola_rule)
}
