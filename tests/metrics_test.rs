//! Metrics and scoring on hand-built documents.

#![allow(clippy::expect_used)]

use reqwest::blocking::Client;
use rs_page_classifier::dimensions::DimensionResolver;
use rs_page_classifier::document::{TextBlock, TextDocument};
use rs_page_classifier::media::Image;
use rs_page_classifier::metrics::Metrics;
use rs_page_classifier::scoring::{forum_score, homepage_score, label};
use rs_page_classifier::PageCategory;

const THRESHOLD: f64 = 0.6;

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

fn block(words: usize, link_density: f64, is_content: bool) -> TextBlock {
    let mut block = TextBlock::new(&vec!["word"; words].join(" "), "");
    block.link_density = link_density;
    block.is_content = is_content;
    block
}

fn doc(blocks: Vec<TextBlock>) -> TextDocument {
    TextDocument::new(None, blocks)
}

fn images(count: usize, src: &str) -> Vec<Image> {
    (0..count).map(|_| Image::new(src, None, None, None)).collect()
}

#[test]
fn single_long_block_is_article() {
    let d = doc(vec![block(500, 0.05, true)]);
    let m = Metrics::compute(&d, Vec::new(), &[]);

    assert_eq!(m.content_words, 500);
    assert_eq!(m.large_content_blocks, 1);
    assert!(close(m.large_block_ratio, 1.0));
    assert!(close(m.content_ratio, 1.0));
    assert!(close(m.avg_link_density, 0.05));

    let verdict = label(&m, THRESHOLD);
    assert_eq!(verdict.label, PageCategory::Article);
    let scores = verdict.scores.expect("scores");
    assert!(close(scores.article, 1.0));
}

#[test]
fn many_small_blocks_score_forum_but_homepage_wins() {
    let mut blocks: Vec<TextBlock> = (0..60).map(|_| block(10, 0.2, true)).collect();
    blocks.extend((0..20).map(|_| block(10, 0.0, false)));
    let m = Metrics::compute(&doc(blocks), images(5, "/thumb.jpg"), &[]);

    assert_eq!(m.total_words, 800);
    assert_eq!(m.total_blocks, 80);
    assert_eq!(m.small_content_blocks, 60);
    // Content ratio 0.75 is outside the forum band, small blocks earn no medium bonus.
    assert!(close(forum_score(&m), 0.7));
    assert!(close(homepage_score(&m), 0.9));
    assert_eq!(label(&m, THRESHOLD).label, PageCategory::Homepage);
}

#[test]
fn thread_of_medium_posts_is_forum() {
    let mut blocks = Vec::new();
    for _ in 0..20 {
        blocks.push(block(30, 0.125, true));
        blocks.push(block(5, 0.0, false));
        blocks.push(block(5, 0.0, false));
    }
    let m = Metrics::compute(&doc(blocks), images(5, "/avatar.png"), &[]);

    assert_eq!(m.content_blocks, 20);
    assert_eq!(m.medium_content_blocks, 20);
    assert!(m.block_size_variance > 25.0 && m.block_size_variance < 150.0);

    let verdict = label(&m, THRESHOLD);
    assert_eq!(verdict.label, PageCategory::Forum);
    let scores = verdict.scores.expect("scores");
    assert!(close(scores.forum, 1.0));
    assert!(close(scores.homepage, 0.9));
}

#[test]
fn sized_gallery_needs_no_downloads() {
    // Nothing is ever created here: every image carries its size in the URL.
    let scratch = std::env::temp_dir().join("page-classifier-never-created");
    let resolver = DimensionResolver::new("https://photos.example.net/set/1", &scratch, Client::new());

    let mut gallery = images(15, "/full/shot.jpg?w=800&h=800");
    let stats = resolver.resolve(&mut gallery).expect("resolve");
    assert_eq!(stats.from_url, 15);
    assert_eq!(stats.downloaded, 0);
    assert!(!scratch.exists());

    let d = doc((0..3).map(|_| block(5, 0.0, true)).collect());
    let m = Metrics::compute(&d, gallery, &[]);

    assert_eq!(m.large_images, 15);
    assert_eq!(m.content_words, 15);
    assert!(close(m.image_to_text_ratio, 1.0));

    let verdict = label(&m, THRESHOLD);
    let scores = verdict.scores.expect("scores");
    assert!(close(scores.photo_gallery, 1.0));
    assert!(close(scores.comic, 1.0));
    // Equal scores go to the gallery.
    assert_eq!(verdict.label, PageCategory::PhotoGallery);
}

#[test]
fn weak_evidence_is_unknown_with_scores() {
    let d = doc(vec![block(2, 0.0, true), block(2, 0.0, true)]);
    let m = Metrics::compute(&d, Vec::new(), &[]);

    let verdict = label(&m, THRESHOLD);
    assert_eq!(verdict.label, PageCategory::Unknown);
    let scores = verdict.scores.expect("scores");
    assert!(scores.in_priority_order().iter().all(|(_, s)| *s < THRESHOLD));
}

#[test]
fn link_density_is_averaged_over_content_blocks() {
    let d = doc(vec![
        block(20, 0.4, true),
        block(20, 0.9, false),
        block(20, 0.2, true),
    ]);
    let m = Metrics::compute(&d, Vec::new(), &[]);

    assert!(close(m.total_link_density, 0.6));
    assert!(close(m.avg_link_density, 0.3));
}

#[test]
fn large_run_is_broken_by_other_blocks() {
    let d = doc(vec![
        block(80, 0.0, true),
        block(80, 0.0, true),
        block(3, 0.0, false),
        block(80, 0.0, true),
        block(0, 0.0, true),
        block(90, 0.0, true),
    ]);
    let m = Metrics::compute(&d, Vec::new(), &[]);

    assert_eq!(m.large_content_blocks, 4);
    assert_eq!(m.consecutive_large_blocks, 2);
    assert_eq!(m.empty_blocks, 1);
    assert_eq!(m.very_small_blocks, 1);
    assert_eq!(m.largest_block_words, 90);
}

#[test]
fn metrics_serialize_in_camel_case() {
    let m = Metrics::compute(&doc(vec![block(10, 0.0, true)]), Vec::new(), &[]);
    let json = serde_json::to_value(&m).expect("serialize");

    assert_eq!(json["contentBlocks"], 1);
    assert_eq!(json["contentWords"], 10);
    assert!(json["avgLinkDensity"].is_number());
    assert!(json["images"].is_array());
}
