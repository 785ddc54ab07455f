//! Document-level labelling passes.
//!
//! These run after (or before) the per-block rules and look at the document
//! as a whole: where the main text ends, which region of content blocks is
//! the main one, and which blocks lack real sentences.

use crate::document::{count_words, BlockLabel, TextDocument};
use crate::patterns::CLAUSE_DELIMITER;

/// Lowercased prefixes that mark the end of the main text.
const TERMINATING_PREFIXES: &[&str] = &[
    "comments",
    "© reuters",
    "please rate this",
    "post a comment",
    "add your comment",
    "add comment",
    "reader views",
    "have your say",
    "reader comments",
];

/// Lowercased fragments that mark the end of the main text anywhere in a block.
const TERMINATING_FRAGMENTS: &[&str] = &["what you think", "no comments"];

/// Terminating blocks must be shorter than this.
const MAX_TERMINATING_WORDS: usize = 15;

/// Content words required before a terminating block ends the article.
const MIN_WORDS_BEFORE_END: usize = 60;

/// Largest index gap between two content blocks of the same region.
const MAX_REGION_GAP: usize = 1;

/// Label short blocks that announce comment sections or bylines as
/// [`BlockLabel::EndOfText`].
pub fn mark_terminating_blocks(doc: &mut TextDocument) -> bool {
    let mut changed = false;
    for block in &mut doc.blocks {
        if block.num_words >= MAX_TERMINATING_WORDS || block.has_label(BlockLabel::EndOfText) {
            continue;
        }
        let text = block.text.trim().to_lowercase();
        let terminates = TERMINATING_PREFIXES.iter().any(|p| text.starts_with(p))
            || TERMINATING_FRAGMENTS.iter().any(|f| text.contains(f));
        if terminates {
            block.add_label(BlockLabel::EndOfText);
            changed = true;
        }
    }
    changed
}

/// Once enough content words have been seen, the first end-of-text block and
/// everything after it become boilerplate.
pub fn ignore_blocks_after_content(doc: &mut TextDocument) -> bool {
    let mut words = 0;
    let mut end = None;
    for (i, block) in doc.blocks.iter().enumerate() {
        if words >= MIN_WORDS_BEFORE_END && block.has_label(BlockLabel::EndOfText) {
            end = Some(i);
            break;
        }
        if block.is_content {
            words += block.num_words;
        }
    }

    let Some(end) = end else {
        return false;
    };

    let mut changed = false;
    for block in &mut doc.blocks[end..] {
        changed |= block.is_content;
        block.is_content = false;
    }
    changed
}

/// Keep only the region of nearby content blocks holding the most words.
///
/// Two content blocks belong to the same region when at most
/// one non-content block separates them. Ties go to the earliest region.
pub fn keep_largest_region(doc: &mut TextDocument) -> bool {
    let mut regions: Vec<(usize, usize, usize)> = Vec::new(); // (start, end, words)
    let mut last_content: Option<usize> = None;

    for (i, block) in doc.blocks.iter().enumerate() {
        if !block.is_content {
            continue;
        }
        match (last_content, regions.last_mut()) {
            (Some(prev), Some(region)) if i - prev <= MAX_REGION_GAP + 1 => {
                region.1 = i;
                region.2 += block.num_words;
            }
            _ => regions.push((i, i, block.num_words)),
        }
        last_content = Some(i);
    }

    if regions.len() < 2 {
        return false;
    }

    let mut best = regions[0];
    for region in &regions[1..] {
        if region.2 > best.2 {
            best = *region;
        }
    }

    let mut changed = false;
    for (i, block) in doc.blocks.iter_mut().enumerate() {
        if block.is_content && (i < best.0 || i > best.1) {
            block.is_content = false;
            changed = true;
        }
    }
    changed
}

/// Keep only the content block with the most words (earliest on ties).
pub fn keep_largest_block(doc: &mut TextDocument) -> bool {
    let mut largest: Option<(usize, usize)> = None;
    for (i, block) in doc.blocks.iter().enumerate() {
        if block.is_content && largest.is_none_or(|(_, words)| block.num_words > words) {
            largest = Some((i, block.num_words));
        }
    }

    let Some((keep, _)) = largest else {
        return false;
    };

    let mut changed = false;
    for (i, block) in doc.blocks.iter_mut().enumerate() {
        if i != keep && block.is_content {
            block.is_content = false;
            changed = true;
        }
    }
    changed
}

/// Demote content blocks in which no clause reaches `min_words` words.
pub fn min_clause_words(doc: &mut TextDocument, min_words: usize) -> bool {
    let mut changed = false;
    for block in doc.blocks.iter_mut().filter(|b| b.is_content) {
        let has_clause = CLAUSE_DELIMITER
            .split(&block.text)
            .any(|clause| count_words(clause) >= min_words);
        if !has_clause {
            block.is_content = false;
            changed = true;
        }
    }
    changed
}

/// Label every block as content.
pub fn mark_everything_content(doc: &mut TextDocument) -> bool {
    let mut changed = false;
    for block in &mut doc.blocks {
        changed |= !block.is_content;
        block.is_content = true;
    }
    changed
}
