//! Image and video records.
//!
//! Both carry optional pixel dimensions and an `area` that is only known when
//! both dimensions are. Ordering is by descending area, then by source URL.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

/// An image referenced by the page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Image {
    pub src: String,
    pub width: Option<u32>,
    pub height: Option<u32>,
    pub alt: Option<String>,
    /// `width * height`, or `None` while either dimension is unknown.
    pub area: Option<u64>,
}

impl Image {
    /// Create an image from its `src` and optional raw attribute values.
    ///
    /// Attribute values are trimmed; empty or non-numeric dimensions are
    /// treated as absent.
    #[must_use]
    pub fn new(src: &str, width: Option<&str>, height: Option<&str>, alt: Option<&str>) -> Self {
        let width = parse_dimension(width);
        let height = parse_dimension(height);
        Self {
            src: src.to_string(),
            width,
            height,
            alt: non_empty(alt),
            area: area_of(width, height),
        }
    }

    /// Set both dimensions and recompute the area.
    pub fn set_dimensions(&mut self, width: u32, height: u32) {
        self.width = Some(width);
        self.height = Some(height);
        self.area = area_of(self.width, self.height);
    }
}

impl Ord for Image {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .area
            .cmp(&self.area)
            .then_with(|| self.src.cmp(&other.src))
    }
}

impl PartialOrd for Image {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// A video element found in the raw HTML.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Video {
    pub src: String,
    pub width: Option<u32>,
    pub height: Option<u32>,
    pub area: Option<u64>,
}

impl Video {
    #[must_use]
    pub fn new(src: &str, width: Option<&str>, height: Option<&str>) -> Self {
        let width = parse_dimension(width);
        let height = parse_dimension(height);
        Self {
            src: src.to_string(),
            width,
            height,
            area: area_of(width, height),
        }
    }

    /// Whether both dimensions are known and positive.
    #[must_use]
    pub fn has_visible_size(&self) -> bool {
        matches!((self.width, self.height), (Some(w), Some(h)) if w > 0 && h > 0)
    }
}

impl Ord for Video {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .area
            .cmp(&self.area)
            .then_with(|| self.src.cmp(&other.src))
    }
}

impl PartialOrd for Video {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

fn parse_dimension(raw: Option<&str>) -> Option<u32> {
    raw.map(str::trim).and_then(|s| s.parse().ok())
}

fn non_empty(raw: Option<&str>) -> Option<String> {
    raw.map(str::trim)
        .filter(|s| !s.is_empty())
        .map(ToString::to_string)
}

fn area_of(width: Option<u32>, height: Option<u32>) -> Option<u64> {
    Some(u64::from(width?) * u64::from(height?))
}
