//! Segmented text documents.
//!
//! A [`TextDocument`] is the ordered sequence of [`TextBlock`]s produced by
//! [`parse`]. Extractors label each block as content or boilerplate; the
//! feature aggregator then reads the labelled blocks in document order.
//!
//! # Module Structure
//!
//! - `parser`: HTML → `TextDocument` segmentation
//! - `images`: image references enclosed by the extracted content

pub mod images;
pub mod parser;

pub use images::extract_images;
pub use parser::parse;

use crate::media::Image;

/// Column width used to compute wrapped lines for text density.
pub const WRAP_WIDTH: usize = 80;

/// Structural label attached to a block by the segmenter or by an extractor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BlockLabel {
    /// Block comes from a `<h1>`…`<h6>` element.
    Heading,
    /// Block comes from a `<li>` element.
    ListItem,
    /// Block text signals the end of the main text ("Comments", "© Reuters" …).
    EndOfText,
}

/// A contiguous region of page text.
#[derive(Debug, Clone, PartialEq)]
pub struct TextBlock {
    pub text: String,
    pub num_words: usize,
    pub num_words_in_anchor_text: usize,
    pub num_words_in_wrapped_lines: usize,
    pub num_wrapped_lines: usize,
    /// Fraction of the block's words that lie inside hyperlinks, in `[0, 1]`.
    pub link_density: f64,
    pub is_content: bool,
    pub labels: Vec<BlockLabel>,
    /// Images encountered while this block was open.
    pub images: Vec<Image>,
}

impl TextBlock {
    /// Build a block from its text and the text found inside `<a>` elements.
    #[must_use]
    pub fn new(text: &str, anchor_text: &str) -> Self {
        let text = normalize_whitespace(text);
        let num_words = count_words(&text);
        let num_words_in_anchor_text = count_words(anchor_text).min(num_words);
        let (num_words_in_wrapped_lines, num_wrapped_lines) = wrap_statistics(&text);

        let link_density = if num_words == 0 {
            0.0
        } else {
            num_words_in_anchor_text as f64 / num_words as f64
        };

        Self {
            text,
            num_words,
            num_words_in_anchor_text,
            num_words_in_wrapped_lines,
            num_wrapped_lines,
            link_density,
            is_content: false,
            labels: Vec::new(),
            images: Vec::new(),
        }
    }

    /// Words per wrapped line (the last line is excluded when the text wraps).
    #[must_use]
    pub fn text_density(&self) -> f64 {
        if self.num_wrapped_lines == 0 {
            0.0
        } else {
            self.num_words_in_wrapped_lines as f64 / self.num_wrapped_lines as f64
        }
    }

    #[must_use]
    pub fn has_label(&self, label: BlockLabel) -> bool {
        self.labels.contains(&label)
    }

    pub fn add_label(&mut self, label: BlockLabel) {
        if !self.has_label(label) {
            self.labels.push(label);
        }
    }
}

/// Ordered sequence of text blocks of one page.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TextDocument {
    pub title: Option<String>,
    pub blocks: Vec<TextBlock>,
}

impl TextDocument {
    #[must_use]
    pub fn new(title: Option<String>, blocks: Vec<TextBlock>) -> Self {
        Self { title, blocks }
    }

    /// Text of all content blocks, one block per line.
    #[must_use]
    pub fn content(&self) -> String {
        self.blocks
            .iter()
            .filter(|b| b.is_content)
            .map(|b| b.text.as_str())
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[must_use]
    pub fn content_blocks(&self) -> usize {
        self.blocks.iter().filter(|b| b.is_content).count()
    }
}

/// Count whitespace-separated tokens containing at least one alphanumeric char.
#[must_use]
pub fn count_words(text: &str) -> usize {
    text.split_whitespace()
        .filter(|token| token.chars().any(char::is_alphanumeric))
        .count()
}

fn normalize_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Simulate wrapping at [`WRAP_WIDTH`] columns.
///
/// Returns `(words in wrapped lines, wrapped lines)`. When the text spans more
/// than one line the last, partial line is left out of both counts.
fn wrap_statistics(text: &str) -> (usize, usize) {
    let mut lines = 0;
    let mut line_len = 0;
    let mut words_in_line = 0;
    let mut words_in_wrapped = 0;
    let mut total_words = 0;

    for token in text.split_whitespace() {
        let len = token.chars().count();
        if lines == 0 {
            lines = 1;
        } else if line_len + len > WRAP_WIDTH {
            lines += 1;
            words_in_wrapped += words_in_line;
            line_len = 0;
            words_in_line = 0;
        }
        line_len += len + 1;
        if token.chars().any(char::is_alphanumeric) {
            words_in_line += 1;
            total_words += 1;
        }
    }

    match lines {
        0 => (0, 0),
        1 => (total_words, 1),
        n => (words_in_wrapped, n - 1),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn word_count_ignores_punctuation_tokens() {
        assert_eq!(count_words("Hello, world | — 42"), 3);
        assert_eq!(count_words("  "), 0);
        assert_eq!(count_words("· | ·"), 0);
    }

    #[test]
    fn link_density_is_anchor_share() {
        let block = TextBlock::new("one two three four", "three four");
        assert_eq!(block.num_words, 4);
        assert!((block.link_density - 0.5).abs() < f64::EPSILON);

        let empty = TextBlock::new("|", "|");
        assert_eq!(empty.num_words, 0);
        assert!(empty.link_density.abs() < f64::EPSILON);
    }

    #[test]
    fn anchor_words_never_exceed_block_words() {
        let block = TextBlock::new("short", "much longer anchor text");
        assert!((block.link_density - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn short_text_has_one_line_density() {
        let block = TextBlock::new("a few words here", "");
        assert_eq!(block.num_wrapped_lines, 1);
        assert!((block.text_density() - 4.0).abs() < f64::EPSILON);
    }

    #[test]
    fn long_text_excludes_last_line() {
        // 40 words of 9 chars + space = 8 words per 80-column line, 5 lines.
        let text = vec!["abcdefghi"; 40].join(" ");
        let block = TextBlock::new(&text, "");
        assert_eq!(block.num_wrapped_lines, 4);
        assert_eq!(block.num_words_in_wrapped_lines, 32);
        assert!((block.text_density() - 8.0).abs() < f64::EPSILON);
    }

    #[test]
    fn labels_are_not_duplicated() {
        let mut block = TextBlock::new("Comments", "");
        block.add_label(BlockLabel::EndOfText);
        block.add_label(BlockLabel::EndOfText);
        assert_eq!(block.labels.len(), 1);
    }
}
