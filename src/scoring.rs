//! Category scoring.
//!
//! Six independent scorers map a [`Metrics`] record to a score in `[0, 1]`.
//! Each scorer checks a hard gate first (a failed gate scores 0), then adds
//! the weight of every condition that holds and clamps the sum.

use serde::{Deserialize, Serialize};

use crate::metrics::Metrics;
use crate::result::{PageCategory, Verdict};
use crate::thresholds::{article, comic, forum, homepage, photo_gallery, video_player};

/// Scores of all six categories for one metrics record.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryScores {
    pub photo_gallery: f64,
    pub comic: f64,
    pub video_player: f64,
    pub forum: f64,
    pub article: f64,
    pub homepage: f64,
}

impl CategoryScores {
    /// Scores in tie-break order: the earlier category wins equal scores.
    #[must_use]
    pub fn in_priority_order(&self) -> [(PageCategory, f64); 6] {
        [
            (PageCategory::PhotoGallery, self.photo_gallery),
            (PageCategory::Comic, self.comic),
            (PageCategory::VideoPlayer, self.video_player),
            (PageCategory::Forum, self.forum),
            (PageCategory::Article, self.article),
            (PageCategory::Homepage, self.homepage),
        ]
    }

    /// Highest-scoring category, earliest in priority order on ties.
    #[must_use]
    pub fn best(&self) -> (PageCategory, f64) {
        let scores = self.in_priority_order();
        let mut best = scores[0];
        for candidate in &scores[1..] {
            if candidate.1 > best.1 {
                best = *candidate;
            }
        }
        best
    }

    #[must_use]
    pub fn get(&self, category: PageCategory) -> Option<f64> {
        self.in_priority_order()
            .into_iter()
            .find(|(c, _)| *c == category)
            .map(|(_, score)| score)
    }
}

/// Run all six scorers.
#[must_use]
pub fn score_all(m: &Metrics) -> CategoryScores {
    CategoryScores {
        photo_gallery: photo_gallery_score(m),
        comic: comic_score(m),
        video_player: video_player_score(m),
        forum: forum_score(m),
        article: article_score(m),
        homepage: homepage_score(m),
    }
}

/// Label one metrics record.
///
/// A document without content blocks is `UNKNOWN` and carries no scores.
/// Otherwise the best category is accepted only if its score is strictly
/// above `threshold`.
///
/// # Example
///
/// ```
/// use rs_page_classifier::metrics::Metrics;
/// use rs_page_classifier::scoring::label;
/// use rs_page_classifier::PageCategory;
///
/// let verdict = label(&Metrics::default(), 0.6);
/// assert_eq!(verdict.label, PageCategory::Unknown);
/// assert!(verdict.scores.is_none());
/// ```
#[must_use]
pub fn label(m: &Metrics, threshold: f64) -> Verdict {
    if m.content_blocks == 0 {
        return Verdict {
            label: PageCategory::Unknown,
            scores: None,
        };
    }

    let scores = score_all(m);
    let (best, max) = scores.best();
    Verdict {
        label: if max > threshold { best } else { PageCategory::Unknown },
        scores: Some(scores),
    }
}

/// Weighted sum of the conditions that hold.
fn weighted(terms: &[(bool, f64)]) -> f64 {
    terms
        .iter()
        .filter(|(holds, _)| *holds)
        .map(|(_, weight)| weight)
        .sum()
}

fn clamp_unit(score: f64) -> f64 {
    score.clamp(0.0, 1.0)
}

// =============================================================================
// Scorers
// =============================================================================

#[must_use]
pub fn photo_gallery_score(m: &Metrics) -> f64 {
    if m.total_images == 0 {
        return 0.0;
    }

    clamp_unit(weighted(&[
        (m.total_images >= photo_gallery::MIN_IMAGES, 0.3),
        (m.large_images >= photo_gallery::MIN_LARGE_IMAGES, 0.2),
        (m.total_images >= photo_gallery::MANY_IMAGES, 0.1),
        (
            (photo_gallery::MIN_IMAGE_TO_TEXT_RATIO..=photo_gallery::MAX_IMAGE_TO_TEXT_RATIO).contains(&m.image_to_text_ratio),
            0.2,
        ),
        // Large images count twice.
        (m.large_images >= photo_gallery::MIN_LARGE_IMAGES, 0.1),
        (m.content_blocks <= photo_gallery::MAX_CONTENT_BLOCKS, 0.1),
        (m.total_blocks <= photo_gallery::MAX_TOTAL_BLOCKS, 0.1),
        (m.avg_words_per_content_block < photo_gallery::MAX_AVG_WORDS_PER_BLOCK, 0.1),
        (m.avg_link_density < photo_gallery::MAX_AVG_LINK_DENSITY, 0.1),
        (m.content_ratio >= photo_gallery::MIN_CONTENT_RATIO, 0.1),
    ]))
}

#[must_use]
pub fn comic_score(m: &Metrics) -> f64 {
    if m.total_images == 0 {
        return 0.0;
    }

    let large_share = m.large_images as f64 / m.total_images as f64;

    clamp_unit(weighted(&[
        (m.has_image_with_area(comic::MIN_PANEL_AREA), 0.2),
        ((comic::MIN_IMAGES..=comic::MAX_IMAGES).contains(&m.total_images), 0.2),
        (m.content_words < comic::MAX_CONTENT_WORDS, 0.2),
        (m.total_blocks < comic::MAX_TOTAL_BLOCKS, 0.1),
        (m.content_blocks < comic::MAX_CONTENT_BLOCKS, 0.1),
        (m.avg_words_per_content_block < comic::MAX_AVG_WORDS_PER_BLOCK, 0.1),
        (m.image_to_text_ratio >= comic::MIN_IMAGE_TO_TEXT_RATIO, 0.1),
        (m.avg_link_density < comic::MAX_AVG_LINK_DENSITY, 0.1),
        (large_share >= comic::MIN_LARGE_IMAGE_SHARE, 0.1),
    ]))
}

#[must_use]
pub fn video_player_score(m: &Metrics) -> f64 {
    if m.total_videos == 0 {
        return 0.0;
    }

    clamp_unit(weighted(&[
        (true, 0.3),
        (m.content_ratio <= video_player::MAX_CONTENT_RATIO, 0.1),
        (m.content_words < video_player::MAX_CONTENT_WORDS, 0.2),
        (
            (video_player::MIN_AVG_LINK_DENSITY..=video_player::MAX_AVG_LINK_DENSITY).contains(&m.avg_link_density),
            0.1,
        ),
        (m.large_block_ratio < video_player::MAX_LARGE_BLOCK_RATIO, 0.1),
        (m.media_to_text_ratio >= video_player::MIN_MEDIA_TO_TEXT_RATIO, 0.2),
        (m.large_content_blocks <= video_player::MAX_LARGE_CONTENT_BLOCKS, 0.1),
    ]))
}

#[must_use]
pub fn forum_score(m: &Metrics) -> f64 {
    if m.total_words < forum::MIN_TOTAL_WORDS {
        return 0.0;
    }

    let image_term = if m.total_images <= forum::MAX_IMAGES { 0.2 } else { -0.2 };

    clamp_unit(
        weighted(&[
            ((forum::MIN_CONTENT_BLOCKS..=forum::MAX_CONTENT_BLOCKS).contains(&m.content_blocks), 0.15),
            (m.total_blocks >= forum::MIN_TOTAL_BLOCKS, 0.1),
            ((forum::MIN_CONTENT_RATIO..=forum::MAX_CONTENT_RATIO).contains(&m.content_ratio), 0.25),
            (m.medium_content_blocks >= forum::MIN_MEDIUM_BLOCKS, 0.1),
            (m.large_block_ratio < forum::MAX_LARGE_BLOCK_RATIO, 0.1),
            (
                (forum::MIN_AVG_LINK_DENSITY..=forum::MAX_AVG_LINK_DENSITY).contains(&m.avg_link_density),
                0.1,
            ),
            (m.avg_words_per_content_block < forum::MAX_AVG_WORDS_PER_BLOCK, 0.05),
            (
                (forum::MIN_BLOCK_SIZE_VARIANCE..=forum::MAX_BLOCK_SIZE_VARIANCE).contains(&m.block_size_variance),
                0.05,
            ),
        ]) + image_term,
    )
}

#[must_use]
pub fn article_score(m: &Metrics) -> f64 {
    if m.total_words < article::MIN_TOTAL_WORDS {
        return 0.0;
    }

    clamp_unit(weighted(&[
        (m.content_quality_score >= article::MIN_QUALITY_SCORE, 0.2),
        (m.large_content_blocks >= article::MIN_LARGE_BLOCKS, 0.2),
        (m.large_block_ratio >= article::MIN_LARGE_BLOCK_RATIO, 0.2),
        (m.content_ratio >= article::MIN_CONTENT_RATIO, 0.2),
        (m.avg_link_density <= article::MAX_AVG_LINK_DENSITY, 0.1),
        (m.largest_block_words >= article::MIN_LARGEST_BLOCK_WORDS, 0.1),
        (m.avg_words_per_content_block >= article::MIN_AVG_WORDS_PER_BLOCK, 0.1),
        (m.content_words >= article::MIN_CONTENT_WORDS, 0.1),
        (m.consecutive_large_blocks >= article::MIN_CONSECUTIVE_LARGE_BLOCKS, 0.1),
    ]))
}

#[must_use]
pub fn homepage_score(m: &Metrics) -> f64 {
    clamp_unit(weighted(&[
        ((homepage::MIN_CONTENT_BLOCKS..=homepage::MAX_CONTENT_BLOCKS).contains(&m.content_blocks), 0.3),
        (m.total_blocks >= homepage::MIN_TOTAL_BLOCKS, 0.2),
        ((homepage::MIN_CONTENT_RATIO..=homepage::MAX_CONTENT_RATIO).contains(&m.content_ratio), 0.2),
        ((homepage::MIN_IMAGES..=homepage::MAX_IMAGES).contains(&m.total_images), 0.1),
        (m.small_content_blocks >= homepage::MIN_SMALL_BLOCKS, 0.1),
        (m.medium_content_blocks >= homepage::MIN_MEDIUM_BLOCKS, 0.1),
        (
            (homepage::MIN_AVG_LINK_DENSITY..=homepage::MAX_AVG_LINK_DENSITY).contains(&m.avg_link_density),
            0.1,
        ),
        (m.large_block_ratio <= homepage::MAX_LARGE_BLOCK_RATIO, 0.1),
    ]))
}
