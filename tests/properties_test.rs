//! Property tests for metrics, scoring and URL handling.

#![allow(clippy::expect_used)]

use proptest::prelude::*;
use reqwest::blocking::Client;
use rs_page_classifier::dimensions::DimensionResolver;
use rs_page_classifier::document::{TextBlock, TextDocument};
use rs_page_classifier::media::{Image, Video};
use rs_page_classifier::metrics::Metrics;
use rs_page_classifier::scoring::score_all;
use rs_page_classifier::url_match::match_url;

fn arb_block() -> impl Strategy<Value = TextBlock> {
    (0_usize..120, 0.0_f64..=1.0, any::<bool>()).prop_map(|(words, link_density, is_content)| {
        let mut block = TextBlock::new(&vec!["w"; words].join(" "), "");
        block.link_density = link_density;
        block.is_content = is_content;
        block
    })
}

fn arb_doc() -> impl Strategy<Value = TextDocument> {
    prop::collection::vec(arb_block(), 0..60).prop_map(|blocks| TextDocument::new(None, blocks))
}

fn arb_images() -> impl Strategy<Value = Vec<Image>> {
    prop::collection::vec((1_u32..2000, 1_u32..2000, any::<bool>()), 0..20).prop_map(|dims| {
        dims.into_iter()
            .map(|(w, h, sized)| {
                let mut image = Image::new("/i.jpg", None, None, None);
                if sized {
                    image.set_dimensions(w, h);
                }
                image
            })
            .collect()
    })
}

fn arb_videos() -> impl Strategy<Value = Vec<Video>> {
    prop::collection::vec((0_u32..1000, 0_u32..1000), 0..4).prop_map(|dims| {
        dims.into_iter()
            .map(|(w, h)| Video::new("/v", Some(&w.to_string()), Some(&h.to_string())))
            .collect()
    })
}

proptest! {
    #[test]
    fn size_buckets_partition_nonempty_content_blocks(doc in arb_doc()) {
        let m = Metrics::compute(&doc, Vec::new(), &[]);
        let buckets = m.large_content_blocks + m.medium_content_blocks + m.small_content_blocks;
        let empty_content = doc.blocks.iter().any(|b| b.is_content && b.num_words == 0);

        prop_assert!(buckets <= m.content_blocks);
        prop_assert_eq!(buckets == m.content_blocks, !empty_content);
    }

    #[test]
    fn average_link_density_stays_in_unit_range(doc in arb_doc()) {
        let m = Metrics::compute(&doc, Vec::new(), &[]);
        prop_assert!((0.0..=1.0).contains(&m.avg_link_density));
    }

    #[test]
    fn every_score_is_in_unit_range(doc in arb_doc(), images in arb_images(), videos in arb_videos()) {
        let m = Metrics::compute(&doc, images, &videos);
        for (_, score) in score_all(&m).in_priority_order() {
            prop_assert!((0.0..=1.0).contains(&score));
        }
        prop_assert!((0.0..=1.0).contains(&m.content_quality_score));
    }

    #[test]
    fn consecutive_large_never_exceeds_large(doc in arb_doc()) {
        let m = Metrics::compute(&doc, Vec::new(), &[]);
        prop_assert!(m.consecutive_large_blocks <= m.large_content_blocks);
    }

    #[test]
    fn metrics_are_deterministic(doc in arb_doc(), images in arb_images(), videos in arb_videos()) {
        let first = Metrics::compute(&doc, images.clone(), &videos);
        let second = Metrics::compute(&doc, images, &videos);
        prop_assert_eq!(first, second);
    }

    #[test]
    fn url_matching_is_deterministic(path in "[a-z/]{0,30}") {
        let url = format!("https://example.com/{path}");
        prop_assert_eq!(match_url(&url), match_url(&url));
    }

    #[test]
    fn url_size_hint_gives_area_without_network(w in 1_u32..5000, h in 1_u32..5000) {
        // Port 9 on localhost: any download attempt would fail and be counted.
        let resolver = DimensionResolver::new("http://127.0.0.1:9/", std::env::temp_dir(), Client::new());
        let mut images = vec![Image::new(&format!("/a.png?w={w}&h={h}"), None, None, None)];

        let stats = resolver.resolve(&mut images).expect("resolve");
        prop_assert_eq!(stats.failed, 0);
        prop_assert_eq!(images[0].area, Some(u64::from(w) * u64::from(h)));
    }
}

#[test]
fn adjacent_large_blocks_make_one_run() {
    let large = |is_content| {
        let mut block = TextBlock::new(&vec!["w"; 70].join(" "), "");
        block.is_content = is_content;
        block
    };
    let doc = TextDocument::new(None, vec![large(true), large(true), large(true)]);
    let m = Metrics::compute(&doc, Vec::new(), &[]);
    assert_eq!(m.consecutive_large_blocks, m.large_content_blocks);

    let split = TextDocument::new(None, vec![large(true), large(false), large(true)]);
    let m = Metrics::compute(&split, Vec::new(), &[]);
    assert!(m.consecutive_large_blocks < m.large_content_blocks);
}
