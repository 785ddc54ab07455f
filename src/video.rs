//! Video detection by tag scanning.
//!
//! The raw HTML is scanned with regular expressions for `<video>`,
//! `<iframe>` and `<object>`/`<embed>` elements. The scan is greedy over the
//! whole document and does not deduplicate: an `<object>` wrapping an
//! `<embed>` yields two records.

use regex::Regex;

use crate::media::Video;
use crate::patterns::{
    HEIGHT_ATTR, IFRAME_ELEMENT, OBJECT_EMBED_ELEMENT, SOURCE_SRC, SRC_ATTR, VIDEO_ELEMENT,
    WIDTH_ATTR,
};

/// Extract all video records from raw HTML.
///
/// Videos are returned grouped by element shape: `<video>` first, then
/// `<iframe>`, then `<object>`/`<embed>`, each group in document order.
///
/// # Example
///
/// ```
/// use rs_page_classifier::video::scan_videos;
///
/// let html = r#"<iframe src="https://youtube.com/embed/x" width="640" height="360"></iframe>"#;
/// let videos = scan_videos(html);
/// assert_eq!(videos.len(), 1);
/// assert_eq!(videos[0].area, Some(640 * 360));
/// ```
#[must_use]
pub fn scan_videos(html: &str) -> Vec<Video> {
    let mut videos = Vec::new();
    scan_video_elements(html, &mut videos);
    scan_simple_elements(html, &IFRAME_ELEMENT, &mut videos);
    scan_simple_elements(html, &OBJECT_EMBED_ELEMENT, &mut videos);
    videos
}

/// `<video>` elements: the element-level `src` wins over a child `<source>`.
fn scan_video_elements(html: &str, videos: &mut Vec<Video>) {
    for caps in VIDEO_ELEMENT.captures_iter(html) {
        let attrs = caps.get(1).map_or("", |m| m.as_str());
        let body = caps.get(2).map_or("", |m| m.as_str());

        let src = SRC_ATTR
            .captures(attrs)
            .or_else(|| SOURCE_SRC.captures(body))
            .and_then(|c| c.get(1))
            .map(|m| m.as_str());

        if let Some(src) = src.filter(|s| !s.is_empty()) {
            let element = caps.get(0).map_or("", |m| m.as_str());
            videos.push(video_from_element(src, element));
        }
    }
}

fn scan_simple_elements(html: &str, pattern: &Regex, videos: &mut Vec<Video>) {
    for caps in pattern.captures_iter(html) {
        let Some(src) = caps.get(1).map(|m| m.as_str()).filter(|s| !s.is_empty()) else {
            continue;
        };
        let element = caps.get(0).map_or("", |m| m.as_str());
        videos.push(video_from_element(src, element));
    }
}

fn video_from_element(src: &str, element: &str) -> Video {
    Video::new(
        src,
        extract_attribute(&WIDTH_ATTR, element),
        extract_attribute(&HEIGHT_ATTR, element),
    )
}

fn extract_attribute<'a>(pattern: &Regex, element: &'a str) -> Option<&'a str> {
    pattern
        .captures(element)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str())
}
