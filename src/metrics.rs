//! Page feature aggregation.
//!
//! [`Metrics`] summarises one labelled [`TextDocument`] together with the
//! page's images and videos. It is built in a single pass over the blocks in
//! document order and is immutable afterwards.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::document::TextDocument;
use crate::media::{Image, Video};

/// Content blocks with more words than this are "large".
pub const LARGE_BLOCK_WORDS: usize = 60;

/// Content blocks with at least this many words (and not large) are "medium".
pub const MEDIUM_BLOCK_WORDS: usize = 15;

/// Blocks with fewer words than this (but more than zero) are "very small".
pub const VERY_SMALL_BLOCK_WORDS: usize = 5;

/// Images with a larger area (700 × 700) are "large".
pub const LARGE_IMAGE_AREA: u64 = 700 * 700;

/// Aggregated features of one (page, extractor) pair.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Metrics {
    pub total_blocks: usize,
    pub content_blocks: usize,
    pub total_words: usize,
    pub content_words: usize,
    pub large_content_blocks: usize,
    pub medium_content_blocks: usize,
    pub small_content_blocks: usize,
    pub largest_block_words: usize,
    pub very_small_blocks: usize,
    pub empty_blocks: usize,
    /// Longest run of adjacent large content blocks.
    pub consecutive_large_blocks: usize,
    /// Sum of link densities over content blocks.
    pub total_link_density: f64,
    pub avg_link_density: f64,
    pub avg_words_per_content_block: f64,
    /// Population variance of word counts over all blocks.
    pub block_size_variance: f64,
    pub total_images: usize,
    pub large_images: usize,
    /// Videos with both a positive width and height.
    pub total_videos: usize,
    pub content_ratio: f64,
    pub image_to_text_ratio: f64,
    pub large_block_ratio: f64,
    pub media_to_text_ratio: f64,
    pub content_quality_score: f64,
    /// Images the metrics were computed from.
    pub images: Vec<Image>,
    /// Videos counted in `total_videos`.
    pub videos: Vec<Video>,
}

impl Metrics {
    /// Aggregate a labelled document and its media.
    ///
    /// # Example
    ///
    /// ```
    /// use rs_page_classifier::document::{TextBlock, TextDocument};
    /// use rs_page_classifier::metrics::Metrics;
    ///
    /// let mut block = TextBlock::new(&vec!["word"; 80].join(" "), "");
    /// block.is_content = true;
    /// let doc = TextDocument::new(None, vec![block]);
    ///
    /// let metrics = Metrics::compute(&doc, Vec::new(), &[]);
    /// assert_eq!(metrics.large_content_blocks, 1);
    /// assert_eq!(metrics.consecutive_large_blocks, 1);
    /// ```
    #[must_use]
    pub fn compute(doc: &TextDocument, images: Vec<Image>, videos: &[Video]) -> Self {
        let mut m = Self::default();
        let mut sizes = Vec::with_capacity(doc.blocks.len());
        let mut run = 0;

        for block in &doc.blocks {
            let words = block.num_words;

            if words == 0 {
                m.empty_blocks += 1;
                run = 0;
            } else if words < VERY_SMALL_BLOCK_WORDS {
                m.very_small_blocks += 1;
                run = 0;
            }

            if block.is_content {
                m.content_blocks += 1;
                m.content_words += words;
                if words > LARGE_BLOCK_WORDS {
                    m.large_content_blocks += 1;
                } else if words >= MEDIUM_BLOCK_WORDS {
                    m.medium_content_blocks += 1;
                } else if words > 0 {
                    m.small_content_blocks += 1;
                }
                m.largest_block_words = m.largest_block_words.max(words);
                m.total_link_density += block.link_density;

                if words > LARGE_BLOCK_WORDS {
                    run += 1;
                    m.consecutive_large_blocks = m.consecutive_large_blocks.max(run);
                } else {
                    run = 0;
                }
            } else {
                run = 0;
            }

            m.total_words += words;
            sizes.push(words as f64);
        }

        m.total_blocks = doc.blocks.len();
        m.block_size_variance = population_variance(&sizes);

        m.total_images = images.len();
        m.large_images = images
            .iter()
            .filter(|image| image.area.is_some_and(|area| area > LARGE_IMAGE_AREA))
            .count();
        m.images = images;

        m.videos = videos.iter().filter(|v| v.has_visible_size()).cloned().collect();
        m.total_videos = m.videos.len();

        m.calculate_derived_metrics();
        m
    }

    fn calculate_derived_metrics(&mut self) {
        let content_blocks = self.content_blocks as f64;
        let content_words = self.content_words as f64;

        self.avg_link_density = ratio(self.total_link_density, content_blocks);
        self.avg_words_per_content_block = ratio(content_words, content_blocks);
        self.content_ratio = ratio(content_blocks, self.total_blocks as f64);
        self.image_to_text_ratio = ratio(self.total_images as f64, content_words);
        self.large_block_ratio = ratio(self.large_content_blocks as f64, content_blocks);
        self.media_to_text_ratio =
            ratio((self.total_images + self.total_videos) as f64, content_words);
        self.content_quality_score = self.content_quality();
    }

    /// Composite quality of the extracted text in `[0, 1]`.
    fn content_quality(&self) -> f64 {
        let mut score: f64 = 0.0;

        if self.large_content_blocks > 0 {
            score += 0.3;
        }
        if self.avg_words_per_content_block > 30.0 {
            score += 0.2;
        }
        if self.avg_link_density < 0.3 {
            score += 0.2;
        }
        if self.content_ratio > 0.3 {
            score += 0.2;
        }
        if self.consecutive_large_blocks > 0 {
            score += 0.1;
        }

        if self.avg_link_density > 0.7 {
            score -= 0.3;
        }
        if self.very_small_blocks as f64 > 0.5 * self.content_blocks as f64 {
            score -= 0.2;
        }
        if self.empty_blocks > 0 {
            score -= 0.1;
        }

        score.clamp(0.0, 1.0)
    }

    /// Whether any image has at least `area` pixels.
    #[must_use]
    pub fn has_image_with_area(&self, area: u64) -> bool {
        self.images.iter().any(|image| image.area.is_some_and(|a| a >= area))
    }
}

impl fmt::Display for Metrics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Metrics{{blocks={}/{}, words={}/{}, large={}, medium={}, small={}, verySmall={}, empty={}, \
             consecutiveLarge={}, largest={}, avgLinkDensity={:.3}, avgWords={:.1}, variance={:.1}, \
             images={} (large={}), videos={}, contentRatio={:.3}, quality={:.2}}}",
            self.content_blocks,
            self.total_blocks,
            self.content_words,
            self.total_words,
            self.large_content_blocks,
            self.medium_content_blocks,
            self.small_content_blocks,
            self.very_small_blocks,
            self.empty_blocks,
            self.consecutive_large_blocks,
            self.largest_block_words,
            self.avg_link_density,
            self.avg_words_per_content_block,
            self.block_size_variance,
            self.total_images,
            self.large_images,
            self.total_videos,
            self.content_ratio,
            self.content_quality_score,
        )
    }
}

/// `numerator / denominator`, or 0 when the denominator is 0.
fn ratio(numerator: f64, denominator: f64) -> f64 {
    if denominator == 0.0 {
        0.0
    } else {
        numerator / denominator
    }
}

fn population_variance(values: &[f64]) -> f64 {
    if values.len() < 2 {
        return 0.0;
    }
    let n = values.len() as f64;
    let mean = values.iter().sum::<f64>() / n;
    values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / n
}
