//! Image references enclosed by the extracted content.

use crate::media::Image;

use super::TextDocument;

/// Collect the images attached to blocks between the first and the last
/// content block (inclusive), in document order.
/// Boilerplate blocks inside that range contribute their images too.
#[must_use]
pub fn extract_images(doc: &TextDocument) -> Vec<Image> {
    let first = doc.blocks.iter().position(|b| b.is_content);
    let last = doc.blocks.iter().rposition(|b| b.is_content);

    let (Some(first), Some(last)) = (first, last) else {
        return Vec::new();
    };

    doc.blocks[first..=last]
        .iter()
        .flat_map(|b| b.images.iter().cloned())
        .collect()
}
