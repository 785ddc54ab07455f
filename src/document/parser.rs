//! HTML → `TextDocument` segmentation.
//!
//! The `<body>` is walked depth-first. Block-level elements close the block
//! being accumulated before and after their content; inline elements only
//! contribute text. Text inside `<a>` is additionally counted as anchor text
//! so every block carries its link density.

use std::collections::HashSet;
use std::sync::LazyLock;

use crate::dom::{self, Document, NodeRef};
use crate::media::Image;

use super::{BlockLabel, TextBlock, TextDocument};

/// Elements whose subtree never contributes text.
static IGNORED_TAGS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    [
        "script", "style", "noscript", "template", "svg", "head", "select", "option", "textarea",
        "button", "canvas", "map", "object", "embed", "iframe",
    ]
    .into_iter()
    .collect()
});

/// Elements that start and end a text block.
static BLOCK_TAGS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    [
        "address", "article", "aside", "blockquote", "body", "caption", "center", "dd", "details",
        "dialog", "dir", "div", "dl", "dt", "fieldset", "figcaption", "figure", "footer", "form",
        "h1", "h2", "h3", "h4", "h5", "h6", "header", "hgroup", "hr", "li", "main", "menu", "nav",
        "ol", "p", "pre", "section", "summary", "table", "tbody", "td", "tfoot", "th", "thead",
        "tr", "ul",
    ]
    .into_iter()
    .collect()
});

/// Segment raw HTML into text blocks.
///
/// Blocks without any non-whitespace text are dropped unless images were
/// encountered while they were open. Parsing never fails: malformed markup
/// is repaired by the HTML5 parser and an empty body yields no blocks.
///
/// # Example
///
/// ```
/// use rs_page_classifier::document::parse;
///
/// let doc = parse("<html><body><h1>Title</h1><p>Some <a href='/x'>linked</a> text</p></body></html>");
/// assert_eq!(doc.blocks.len(), 2);
/// assert_eq!(doc.blocks[1].num_words, 3);
/// ```
#[must_use]
pub fn parse(html: &str) -> TextDocument {
    let document = Document::from(html);

    let title = Some(dom::text_content(&document.select("title")).trim().to_string())
        .filter(|t| !t.is_empty());

    let mut segmenter = Segmenter::default();
    let body = document.select("body");
    if let Some(body_node) = body.nodes().first() {
        segmenter.walk(body_node);
    }
    segmenter.flush();

    TextDocument::new(title, segmenter.blocks)
}

#[derive(Default)]
struct Segmenter {
    blocks: Vec<TextBlock>,
    text: String,
    anchor_text: String,
    images: Vec<Image>,
    labels: Vec<BlockLabel>,
    anchor_depth: usize,
}

impl Segmenter {
    fn walk(&mut self, node: &NodeRef) {
        for child in node.children() {
            if child.is_text() {
                self.push_text(&dom::node_text(&child));
                continue;
            }

            let Some(tag) = dom::node_tag_name(&child) else {
                continue;
            };
            let tag = tag.as_str();

            if IGNORED_TAGS.contains(tag) {
                continue;
            }

            match tag {
                "img" => self.push_image(&child),
                "br" => self.push_text(" "),
                "a" => {
                    self.anchor_depth += 1;
                    self.walk(&child);
                    self.anchor_depth -= 1;
                }
                _ if BLOCK_TAGS.contains(tag) => {
                    self.flush();
                    if let Some(label) = label_for(tag) {
                        self.labels.push(label);
                    }
                    self.walk(&child);
                    self.flush();
                    self.labels.clear();
                }
                _ => self.walk(&child),
            }
        }
    }

    fn push_text(&mut self, text: &str) {
        // Adjacent text nodes are separated so inline tags never glue words.
        self.text.push_str(text);
        self.text.push(' ');
        if self.anchor_depth > 0 {
            self.anchor_text.push_str(text);
            self.anchor_text.push(' ');
        }
    }

    fn push_image(&mut self, node: &NodeRef) {
        let src = dom::node_attribute(node, "src")
            .filter(|s| !s.trim().is_empty())
            .or_else(|| dom::node_attribute(node, "data-src"));
        let Some(src) = src.map(|s| s.trim().to_string()).filter(|s| !s.is_empty()) else {
            return;
        };

        let width = dom::node_attribute(node, "width");
        let height = dom::node_attribute(node, "height");
        let alt = dom::node_attribute(node, "alt");
        self.images.push(Image::new(
            &src,
            width.as_deref(),
            height.as_deref(),
            alt.as_deref(),
        ));
    }

    /// Close the current block.
    fn flush(&mut self) {
        let has_text = self.text.chars().any(|c| !c.is_whitespace());
        if has_text || !self.images.is_empty() {
            let mut block = TextBlock::new(&self.text, &self.anchor_text);
            for label in &self.labels {
                block.add_label(*label);
            }
            block.images = std::mem::take(&mut self.images);
            self.blocks.push(block);
        }
        self.text.clear();
        self.anchor_text.clear();
    }
}

fn label_for(tag: &str) -> Option<BlockLabel> {
    match tag {
        "h1" | "h2" | "h3" | "h4" | "h5" | "h6" => Some(BlockLabel::Heading),
        "li" => Some(BlockLabel::ListItem),
        _ => None,
    }
}
