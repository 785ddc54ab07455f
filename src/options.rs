//! Configuration options for page classification.
//!
//! The `Options` struct controls the confidence threshold, which extractors
//! run, and how image dimensions are resolved over the network.

use std::path::PathBuf;
use std::time::Duration;

use crate::extractor::ExtractorKind;

/// Browser-like User-Agent sent by the page fetcher and the image downloader.
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/130.0.0.0 Safari/537.36";

/// Configuration options for classification.
///
/// All fields are public for easy configuration. Use `Default::default()`
/// for standard settings.
///
/// # Example
///
/// ```rust
/// use rs_page_classifier::Options;
///
/// let options = Options {
///     download_images: false,
///     confidence_threshold: 0.7,
///     ..Options::default()
/// };
/// assert_eq!(options.extractors.len(), 6);
/// ```
#[derive(Debug, Clone)]
pub struct Options {
    /// Minimum score the best category needs to be accepted.
    ///
    /// The comparison is strict: a best score equal to the threshold yields
    /// `UNKNOWN`.
    ///
    /// Default: `0.6`
    pub confidence_threshold: f64,

    /// Extractor strategies to run, in vote order.
    ///
    /// Default: all six, in the order Article, Default, Canola,
    /// ArticleSentences, LargestContent, KeepEverything.
    pub extractors: Vec<ExtractorKind>,

    /// Scratch directory for downloaded images.
    ///
    /// The directory is purged before each download batch, so concurrent
    /// classifications must not share it. When `None`, every classification
    /// gets its own temporary directory that is removed afterwards.
    ///
    /// Default: `None`
    pub scratch_dir: Option<PathBuf>,

    /// Download images whose dimensions are not encoded in their URL.
    ///
    /// When disabled, such images keep whatever dimensions their `width` and
    /// `height` attributes declared.
    ///
    /// Default: `true`
    pub download_images: bool,

    /// Per-image download timeout. A timed-out image keeps unknown dimensions.
    ///
    /// Default: 10 seconds
    pub download_timeout: Duration,

    /// Timeout for fetching the page itself.
    ///
    /// Default: 30 seconds
    pub fetch_timeout: Duration,

    /// User-Agent header for page and image requests.
    ///
    /// Default: [`DEFAULT_USER_AGENT`]
    pub user_agent: String,

    /// Maximum number of text blocks an extractor accepts.
    ///
    /// Larger documents make every extractor fail, which the classifier
    /// logs and skips.
    ///
    /// Default: `100000`
    pub max_blocks: usize,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            confidence_threshold: 0.6,
            extractors: ExtractorKind::ALL.to_vec(),
            scratch_dir: None,
            download_images: true,
            download_timeout: Duration::from_secs(10),
            fetch_timeout: Duration::from_secs(30),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            max_blocks: 100_000,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_run_all_extractors_in_order() {
        let options = Options::default();
        assert_eq!(options.extractors, ExtractorKind::ALL.to_vec());
        assert!((options.confidence_threshold - 0.6).abs() < f64::EPSILON);
        assert!(options.download_images);
        assert!(options.scratch_dir.is_none());
    }
}
