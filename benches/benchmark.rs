//! Performance benchmarks for rs-page-classifier.
//!
//! Run with: `cargo bench`
//!
//! Image downloads are disabled so only the CPU-bound pipeline is measured:
//! segmentation, extractor labelling, metrics and scoring.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use rs_page_classifier::document::parse;
use rs_page_classifier::extractor::{BoilerplateExtractor, Extractor, ExtractorKind};
use rs_page_classifier::metrics::Metrics;
use rs_page_classifier::scoring::score_all;
use rs_page_classifier::video::scan_videos;
use rs_page_classifier::{Classifier, Options};

const SAMPLE_HTML: &str = r#"
<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <title>Sample Article</title>
</head>
<body>
    <nav>
        <a href="/">Home</a>
        <a href="/about">About</a>
    </nav>
    <article>
        <h1>Sample Article Title</h1>
        <p class="byline">By Jane Doe</p>
        <p>This is the first paragraph of the article. It contains some meaningful
        content that the boilerplate extractors should keep as main text.</p>
        <p>Here is a second paragraph with more content. The classifier should
        see a long run of link-poor text blocks and vote for an article.</p>
        <img src="/images/hero.jpg?w=1200&h=800" alt="Hero">
        <p>A third paragraph ensures we have enough content for meaningful
        benchmarking of the classification pipeline.</p>
    </article>
    <iframe src="https://www.youtube.com/embed/abc" width="560" height="315"></iframe>
    <footer>
        <p>Comments (3)</p>
        <p>Copyright 2024</p>
    </footer>
</body>
</html>
"#;

/// A homepage-like page with `n` teaser blocks.
fn teaser_page(n: usize) -> String {
    let teasers: String = (0..n)
        .map(|i| {
            format!(
                r#"<div class="teaser"><h3><a href="/story/{i}">Headline number {i}</a></h3>
                <p>Short teaser text for story {i} with a handful of words.</p>
                <img src="/thumbs/{i}.jpg?w=320&h=180"></div>"#
            )
        })
        .collect();
    format!("<html><body><nav><a href='/'>Home</a></nav>{teasers}</body></html>")
}

fn options() -> Options {
    Options {
        download_images: false,
        ..Options::default()
    }
}

fn bench_classify(c: &mut Criterion) {
    let Ok(classifier) = Classifier::new(options()) else {
        return;
    };
    c.bench_function("classify_sample", |b| {
        b.iter(|| classifier.classify(black_box("https://example.com/blog/post"), black_box(SAMPLE_HTML)));
    });
}

fn bench_stages(c: &mut Criterion) {
    c.bench_function("parse", |b| b.iter(|| parse(black_box(SAMPLE_HTML))));
    c.bench_function("scan_videos", |b| b.iter(|| scan_videos(black_box(SAMPLE_HTML))));

    let parsed = parse(SAMPLE_HTML);
    let mut group = c.benchmark_group("extractors");
    for kind in ExtractorKind::ALL {
        let extractor = BoilerplateExtractor::new(kind);
        group.bench_with_input(BenchmarkId::from_parameter(format!("{kind:?}")), &parsed, |b, doc| {
            b.iter(|| {
                let mut doc = doc.clone();
                let _ = extractor.process(&mut doc);
                doc
            });
        });
    }
    group.finish();

    let mut labelled = parse(SAMPLE_HTML);
    let _ = BoilerplateExtractor::new(ExtractorKind::Article).process(&mut labelled);
    c.bench_function("metrics_and_scores", |b| {
        b.iter(|| score_all(&Metrics::compute(black_box(&labelled), Vec::new(), &[])));
    });
}

/// Scaling with page size.
fn bench_page_sizes(c: &mut Criterion) {
    let Ok(classifier) = Classifier::new(options()) else {
        return;
    };
    let mut group = c.benchmark_group("page_size");

    for n in [10, 100, 1000] {
        let html = teaser_page(n);
        group.throughput(Throughput::Bytes(html.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(n), &html, |b, html| {
            b.iter(|| classifier.classify("https://example.com/", black_box(html)));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_classify, bench_stages, bench_page_sizes);
criterion_main!(benches);
