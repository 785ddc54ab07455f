//! # rs-page-classifier
//!
//! Web page type classification from URL patterns and page structure.
//!
//! A page is classified as an article, homepage, forum, photo gallery, comic
//! or video player (or left unknown) by combining two kinds of evidence:
//! category-specific URL patterns, and scores computed over text-block,
//! image and video statistics. The statistics are gathered once per
//! boilerplate extractor, so every extractor casts its own vote.
//!
//! ## Quick Start
//!
//! ```rust
//! use rs_page_classifier::{classify_with_options, Options, PageCategory, ExtractorId};
//!
//! let html = "<html><body></body></html>";
//! let options = Options { download_images: false, ..Options::default() };
//!
//! let result = classify_with_options("https://www.example.com/", html, &options)?;
//! assert_eq!(result.sources(PageCategory::Homepage), [ExtractorId::UrlMatch]);
//! assert_eq!(result.sources(PageCategory::Unknown).len(), 6);
//! # Ok::<(), rs_page_classifier::Error>(())
//! ```
//!
//! ## Pipeline
//!
//! - **URL matching**: every category pattern that matches adds a `URL_MATCH` vote
//! - **Video scanning**: `<video>`, `<iframe>`, `<object>`/`<embed>` elements
//! - **Per extractor**: label blocks, resolve image sizes (URL hints, then
//!   downloads), aggregate [`Metrics`], score all categories, vote for the
//!   best one above the confidence threshold

mod error;
mod options;
mod patterns;
mod result;

/// DOM helpers over `dom_query`.
pub mod dom;

/// Segmented text documents and the HTML segmenter.
pub mod document;

/// Boilerplate extractors.
pub mod extractor;

/// Image and video records.
pub mod media;

/// URL helpers for image sources.
pub mod url_utils;

/// Image dimension resolution.
pub mod dimensions;

/// Video detection by tag scanning.
pub mod video;

/// URL pattern matching.
pub mod url_match;

/// Page feature aggregation.
pub mod metrics;

/// Scoring thresholds per category.
pub mod thresholds;

/// Category scorers.
pub mod scoring;

/// Classification orchestration.
pub mod classify;

/// Character encoding detection and transcoding.
pub mod encoding;

/// Page fetching.
pub mod fetch;

/// Metrics report file.
pub mod report;

// Public API - re-exports
pub use classify::{classify, classify_with_options, Classifier};
pub use error::{Error, Result};
pub use metrics::Metrics;
pub use options::{Options, DEFAULT_USER_AGENT};
pub use result::{Classification, ExtractorId, PageCategory, ReportEntry, Verdict};

/// Classifies a page given as raw bytes, detecting its character encoding.
///
/// `content_type` is the `Content-Type` header the page was served with,
/// if known; its charset takes precedence over `<meta>` declarations.
///
/// # Example
///
/// ```rust
/// use rs_page_classifier::{classify_bytes, Options};
///
/// let html = b"<html><head><meta charset=\"ISO-8859-1\"></head><body><p>Caf\xE9</p></body></html>";
/// let options = Options { download_images: false, ..Options::default() };
/// let result = classify_bytes("https://example.com/", html, None, &options)?;
/// assert_eq!(result.metrics.len(), 6);
/// # Ok::<(), rs_page_classifier::Error>(())
/// ```
#[allow(clippy::missing_errors_doc)]
pub fn classify_bytes(
    url: &str,
    html: &[u8],
    content_type: Option<&str>,
    options: &Options,
) -> Result<Classification> {
    let html = encoding::decode_html(html, content_type);
    classify_with_options(url, &html, options)
}
