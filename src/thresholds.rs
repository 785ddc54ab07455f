//! Scoring thresholds per page category.

/// Photo gallery pages: many images, little text per block.
pub mod photo_gallery {
    pub const MIN_IMAGES: usize = 6;
    pub const MANY_IMAGES: usize = 12;
    pub const MIN_LARGE_IMAGES: usize = 1;
    pub const MIN_IMAGE_TO_TEXT_RATIO: f64 = 0.05;
    pub const MAX_IMAGE_TO_TEXT_RATIO: f64 = 4.0;
    pub const MAX_CONTENT_BLOCKS: usize = 50;
    pub const MAX_TOTAL_BLOCKS: usize = 100;
    pub const MAX_AVG_WORDS_PER_BLOCK: f64 = 25.0;
    pub const MAX_AVG_LINK_DENSITY: f64 = 0.3;
    pub const MIN_CONTENT_RATIO: f64 = 0.1;
}

/// Comic pages: one or a few big images and almost no text.
pub mod comic {
    /// 500 × 500 pixels.
    pub const MIN_PANEL_AREA: u64 = 500 * 500;
    pub const MIN_IMAGES: usize = 1;
    pub const MAX_IMAGES: usize = 30;
    pub const MAX_CONTENT_WORDS: usize = 200;
    pub const MAX_TOTAL_BLOCKS: usize = 30;
    pub const MAX_CONTENT_BLOCKS: usize = 10;
    pub const MAX_AVG_WORDS_PER_BLOCK: f64 = 20.0;
    pub const MIN_IMAGE_TO_TEXT_RATIO: f64 = 0.02;
    pub const MAX_AVG_LINK_DENSITY: f64 = 0.2;
    pub const MIN_LARGE_IMAGE_SHARE: f64 = 0.3;
}

/// Video player pages.
pub mod video_player {
    pub const MAX_CONTENT_RATIO: f64 = 0.3;
    pub const MAX_CONTENT_WORDS: usize = 200;
    pub const MIN_AVG_LINK_DENSITY: f64 = 0.1;
    pub const MAX_AVG_LINK_DENSITY: f64 = 0.7;
    pub const MAX_LARGE_BLOCK_RATIO: f64 = 0.3;
    pub const MIN_MEDIA_TO_TEXT_RATIO: f64 = 0.01;
    pub const MAX_LARGE_CONTENT_BLOCKS: usize = 2;
}

/// Forum threads: many medium-sized posts.
pub mod forum {
    pub const MIN_TOTAL_WORDS: usize = 100;
    pub const MIN_CONTENT_BLOCKS: usize = 6;
    pub const MAX_CONTENT_BLOCKS: usize = 80;
    pub const MIN_TOTAL_BLOCKS: usize = 15;
    pub const MIN_CONTENT_RATIO: f64 = 0.1;
    pub const MAX_CONTENT_RATIO: f64 = 0.4;
    pub const MIN_MEDIUM_BLOCKS: usize = 3;
    pub const MAX_LARGE_BLOCK_RATIO: f64 = 0.3;
    pub const MIN_AVG_LINK_DENSITY: f64 = 0.0;
    pub const MAX_AVG_LINK_DENSITY: f64 = 0.4;
    pub const MAX_AVG_WORDS_PER_BLOCK: f64 = 40.0;
    pub const MIN_BLOCK_SIZE_VARIANCE: f64 = 25.0;
    pub const MAX_BLOCK_SIZE_VARIANCE: f64 = 150.0;
    pub const MAX_IMAGES: usize = 10;
}

/// Articles: long, link-poor running text.
pub mod article {
    pub const MIN_TOTAL_WORDS: usize = 100;
    pub const MIN_QUALITY_SCORE: f64 = 0.4;
    pub const MIN_LARGE_BLOCKS: usize = 1;
    pub const MIN_LARGE_BLOCK_RATIO: f64 = 0.2;
    pub const MIN_CONTENT_RATIO: f64 = 0.3;
    pub const MAX_AVG_LINK_DENSITY: f64 = 0.2;
    pub const MIN_LARGEST_BLOCK_WORDS: usize = 60;
    pub const MIN_AVG_WORDS_PER_BLOCK: f64 = 25.0;
    pub const MIN_CONTENT_WORDS: usize = 100;
    pub const MIN_CONSECUTIVE_LARGE_BLOCKS: usize = 1;
}

/// Homepages: many short, link-heavy teaser blocks.
pub mod homepage {
    pub const MIN_CONTENT_BLOCKS: usize = 10;
    pub const MAX_CONTENT_BLOCKS: usize = 300;
    pub const MIN_TOTAL_BLOCKS: usize = 40;
    pub const MIN_CONTENT_RATIO: f64 = 0.02;
    pub const MAX_CONTENT_RATIO: f64 = 0.3;
    pub const MIN_IMAGES: usize = 1;
    pub const MAX_IMAGES: usize = 50;
    pub const MIN_SMALL_BLOCKS: usize = 5;
    pub const MIN_MEDIUM_BLOCKS: usize = 5;
    pub const MIN_AVG_LINK_DENSITY: f64 = 0.1;
    pub const MAX_AVG_LINK_DENSITY: f64 = 1.0;
    pub const MAX_LARGE_BLOCK_RATIO: f64 = 0.2;
}
