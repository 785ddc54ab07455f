//! Classification orchestration.
//!
//! One classification runs the URL matcher and the video scanner once, then
//! every configured extractor over its own copy of the segmented page:
//! label blocks, collect and size images, aggregate metrics, score and vote.

use std::path::PathBuf;

use reqwest::blocking::Client;
use tempfile::TempDir;
use tracing::{debug, instrument, warn};

use crate::dimensions::{retain_supported, DimensionResolver};
use crate::document::{self, extract_images};
use crate::error::{Error, Result};
use crate::extractor::{BoilerplateExtractor, Extractor};
use crate::fetch::build_client;
use crate::metrics::Metrics;
use crate::options::Options;
use crate::result::{Classification, ExtractorId};
use crate::scoring;
use crate::url_match::match_url;
use crate::video::scan_videos;

/// Page classifier holding its configuration, extractors and HTTP client.
///
/// Build once and reuse across pages. Concurrent calls must not share a
/// configured `scratch_dir`.
pub struct Classifier {
    options: Options,
    extractors: Vec<Box<dyn Extractor>>,
    client: Client,
}

impl Classifier {
    /// Create a classifier running the extractors named in `options`.
    pub fn new(options: Options) -> Result<Self> {
        let extractors = options
            .extractors
            .iter()
            .map(|kind| {
                Box::new(BoilerplateExtractor::new(*kind).with_max_blocks(options.max_blocks))
                    as Box<dyn Extractor>
            })
            .collect();
        Self::with_extractors(options, extractors)
    }

    /// Create a classifier with caller-supplied extractors.
    ///
    /// `options.extractors` is ignored; votes are cast in the order of
    /// `extractors`.
    pub fn with_extractors(options: Options, extractors: Vec<Box<dyn Extractor>>) -> Result<Self> {
        let client = build_client(&options)?;
        Ok(Self {
            options,
            extractors,
            client,
        })
    }

    #[must_use]
    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Classify one page.
    ///
    /// Extractor failures are logged and skipped; image download failures
    /// leave dimensions unknown.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ScratchDir`] when the image scratch directory cannot
    /// be created or purged.
    #[instrument(skip(self, html), fields(html_len = html.len()))]
    pub fn classify(&self, url: &str, html: &str) -> Result<Classification> {
        let mut classification = Classification::new(url);

        for category in match_url(url) {
            classification.add_vote(category, ExtractorId::UrlMatch);
        }

        let videos = scan_videos(html);
        let parsed = document::parse(html);
        debug!(
            blocks = parsed.blocks.len(),
            videos = videos.len(),
            "page segmented"
        );

        let (_scratch_guard, scratch_dir) = self.scratch_dir()?;
        let resolver = DimensionResolver::new(url, scratch_dir, self.client.clone())
            .with_downloads(self.options.download_images)
            .with_timeout(self.options.download_timeout);

        for extractor in &self.extractors {
            let id = extractor.id();
            let mut doc = parsed.clone();

            if let Err(e) = extractor.process(&mut doc) {
                warn!(extractor = %id, error = %e, "extractor failed, skipping");
                continue;
            }

            let mut images = retain_supported(extract_images(&doc));
            resolver.resolve(&mut images)?;

            let metrics = Metrics::compute(&doc, images, &videos);
            let verdict = scoring::label(&metrics, self.options.confidence_threshold);
            debug!(
                extractor = %id,
                label = %verdict.label,
                content_blocks = metrics.content_blocks,
                "extractor voted"
            );

            classification.add_vote(verdict.label, id);
            classification.metrics.insert(id, metrics);
            classification.verdicts.insert(id, verdict);
        }

        Ok(classification)
    }

    /// Scratch directory for this run, plus the guard of a temporary one.
    fn scratch_dir(&self) -> Result<(Option<TempDir>, PathBuf)> {
        if let Some(dir) = &self.options.scratch_dir {
            return Ok((None, dir.clone()));
        }
        if !self.options.download_images {
            // Never touched when downloads are off.
            return Ok((None, std::env::temp_dir()));
        }

        let temp = tempfile::Builder::new()
            .prefix("page-classifier-")
            .tempdir()
            .map_err(|source| Error::ScratchDir {
                path: std::env::temp_dir(),
                source,
            })?;
        let path = temp.path().to_path_buf();
        Ok((Some(temp), path))
    }
}

/// Classify a page with default options.
///
/// # Example
///
/// ```no_run
/// use rs_page_classifier::classify;
///
/// let html = std::fs::read_to_string("page.html")?;
/// let result = classify("https://example.com/blog/post", &html)?;
/// println!("{result}");
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub fn classify(url: &str, html: &str) -> Result<Classification> {
    classify_with_options(url, html, &Options::default())
}

/// Classify a page with custom options.
pub fn classify_with_options(url: &str, html: &str, options: &Options) -> Result<Classification> {
    Classifier::new(options.clone())?.classify(url, html)
}
