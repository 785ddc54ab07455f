//! Classify one web page and append its metrics to a JSON report.
//!
//! The page is read from `--html` when given, otherwise fetched.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

use rs_page_classifier::fetch::fetch_with_client;
use rs_page_classifier::{fetch, report, Classifier, Options};

#[derive(Parser)]
#[command(name = "classify_page")]
#[command(about = "Classify a web page as article, homepage, forum, gallery, comic or video player")]
#[command(version)]
struct Cli {
    /// URL of the page
    url: String,

    /// Read the page from this file instead of fetching it
    #[arg(long)]
    html: Option<PathBuf>,

    /// JSON report the metrics are appended to
    #[arg(long, default_value = "metrics.json")]
    metrics_out: PathBuf,

    /// Directory for downloaded images (a temporary one when omitted)
    #[arg(long)]
    scratch_dir: Option<PathBuf>,

    /// Do not download images to measure them
    #[arg(long)]
    no_downloads: bool,

    /// Debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn init_logging(verbose: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(if verbose { "debug" } else { "warn" }));
    fmt().with_env_filter(filter).with_target(false).init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let options = Options {
        scratch_dir: cli.scratch_dir,
        download_images: !cli.no_downloads,
        ..Options::default()
    };
    let classifier = Classifier::new(options.clone()).context("failed to build classifier")?;

    let html = match &cli.html {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?,
        None => {
            let client = fetch::build_client(&options)?;
            fetch_with_client(&client, &cli.url)
                .with_context(|| format!("failed to fetch {}", cli.url))?
                .html
        }
    };

    let result = classifier
        .classify(&cli.url, &html)
        .with_context(|| format!("failed to classify {}", cli.url))?;

    println!("{}: {result}", cli.url);
    for (extractor, verdict) in &result.verdicts {
        println!("  {extractor:<18} {}", verdict.label);
    }

    let entries = report::append_metrics(&cli.metrics_out, &result.url, &result.metrics)
        .with_context(|| format!("failed to write {}", cli.metrics_out.display()))?;
    info!(path = %cli.metrics_out.display(), entries, "metrics appended");

    Ok(())
}
