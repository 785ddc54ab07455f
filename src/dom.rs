//! DOM Operations Adapter
//!
//! Thin helpers over the `dom_query` crate used by the text segmenter.

// Re-export core types for external use
pub use dom_query::{Document, NodeRef, Selection};

pub use tendril::StrTendril;

/// Get any attribute value of the first node in the selection.
#[inline]
#[must_use]
pub fn get_attribute(sel: &Selection, name: &str) -> Option<String> {
    sel.attr(name).map(|s| s.to_string())
}

/// Get an attribute value of a node.
#[inline]
#[must_use]
pub fn node_attribute(node: &NodeRef, name: &str) -> Option<String> {
    get_attribute(&Selection::from(*node), name)
}

/// Get tag name (lowercase) of an element node.
#[must_use]
pub fn node_tag_name(node: &NodeRef) -> Option<String> {
    if !node.is_element() {
        return None;
    }
    node.node_name().map(|t| t.to_ascii_lowercase())
}

/// Get the text of a text node.
///
/// Returns `StrTendril` for zero-copy passing.
#[inline]
#[must_use]
pub fn node_text(node: &NodeRef) -> StrTendril {
    node.text()
}

/// Get all text content of the selection and its descendants.
#[inline]
#[must_use]
pub fn text_content(sel: &Selection) -> StrTendril {
    sel.text()
}
