//! Result types for classification output.
//!
//! This module defines the category and evidence-source identifiers and the
//! structured output of one classification run.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::metrics::Metrics;
use crate::scoring::CategoryScores;

/// Semantic category of a web page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PageCategory {
    Article,
    Homepage,
    Forum,
    PhotoGallery,
    Comic,
    VideoPlayer,
    Unknown,
}

impl PageCategory {
    /// Identifier used in reports (`PHOTO_GALLERY`, ...).
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Article => "ARTICLE",
            Self::Homepage => "HOMEPAGE",
            Self::Forum => "FORUM",
            Self::PhotoGallery => "PHOTO_GALLERY",
            Self::Comic => "COMIC",
            Self::VideoPlayer => "VIDEO_PLAYER",
            Self::Unknown => "UNKNOWN",
        }
    }
}

impl fmt::Display for PageCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// Evidence source of a category vote: a URL pattern match or one extractor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ExtractorId {
    Article,
    Default,
    Canola,
    ArticleSentences,
    LargestContent,
    KeepEverything,
    UrlMatch,
}

impl ExtractorId {
    /// Identifier used in reports (`ARTICLE_SENTENCES`, ...).
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Article => "ARTICLE",
            Self::Default => "DEFAULT",
            Self::Canola => "CANOLA",
            Self::ArticleSentences => "ARTICLE_SENTENCES",
            Self::LargestContent => "LARGEST_CONTENT",
            Self::KeepEverything => "KEEP_EVERYTHING",
            Self::UrlMatch => "URL_MATCH",
        }
    }
}

impl fmt::Display for ExtractorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// Label assigned by one extractor pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Verdict {
    /// Winning category, or `Unknown` below the confidence threshold.
    pub label: PageCategory,

    /// Score vector. `None` when the document had no content blocks and the
    /// scorers were not run.
    pub scores: Option<CategoryScores>,
}

/// Metrics of one page keyed by extractor, as persisted in the report file.
pub type ReportEntry = BTreeMap<String, BTreeMap<ExtractorId, Metrics>>;

/// Result of classifying one page.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Classification {
    /// Page URL as passed to the classifier.
    pub url: String,

    /// Category → evidence sources, in the order the votes were cast
    /// (URL match first, then extractors in their configured order).
    pub categories: BTreeMap<PageCategory, Vec<ExtractorId>>,

    /// Metrics computed by each extractor that ran successfully.
    pub metrics: BTreeMap<ExtractorId, Metrics>,

    /// Label and score vector of each extractor that ran successfully.
    pub verdicts: BTreeMap<ExtractorId, Verdict>,
}

impl Classification {
    pub(crate) fn new(url: &str) -> Self {
        Self {
            url: url.to_string(),
            ..Self::default()
        }
    }

    pub(crate) fn add_vote(&mut self, category: PageCategory, source: ExtractorId) {
        self.categories.entry(category).or_default().push(source);
    }

    /// Evidence sources that voted for `category` (empty if none).
    #[must_use]
    pub fn sources(&self, category: PageCategory) -> &[ExtractorId] {
        self.categories.get(&category).map_or(&[], Vec::as_slice)
    }

    /// Category with the most votes. Ties go to the category listed first.
    #[must_use]
    pub fn dominant(&self) -> Option<PageCategory> {
        let mut best: Option<(PageCategory, usize)> = None;
        for (category, sources) in &self.categories {
            if best.is_none_or(|(_, n)| sources.len() > n) {
                best = Some((*category, sources.len()));
            }
        }
        best.map(|(category, _)| category)
    }

    /// Metrics keyed by URL, the layout of one report-file element.
    #[must_use]
    pub fn report_entry(&self) -> ReportEntry {
        let mut entry = BTreeMap::new();
        entry.insert(self.url.clone(), self.metrics.clone());
        entry
    }
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (i, (category, sources)) in self.categories.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            let names: Vec<&str> = sources.iter().map(|s| s.as_str()).collect();
            write!(f, "{category}=[{}]", names.join(", "))?;
        }
        f.write_str("}")
    }
}
