//! Reads HTML from stdin, classifies it under the URL given as the first
//! argument, and prints the result as JSON.

use std::collections::BTreeMap;
use std::io::{self, Read};

use anyhow::{bail, Context, Result};
use serde::Serialize;
use tracing_subscriber::EnvFilter;

use rs_page_classifier::{classify, ExtractorId, Metrics, PageCategory};

#[derive(Serialize)]
struct Output {
    url: String,
    categories: BTreeMap<PageCategory, Vec<ExtractorId>>,
    metrics: BTreeMap<ExtractorId, Metrics>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(io::stderr)
        .init();

    let Some(url) = std::env::args().nth(1) else {
        bail!("usage: classify_stdin <URL> < page.html");
    };

    let mut html = String::new();
    io::stdin()
        .read_to_string(&mut html)
        .context("failed to read from stdin")?;

    let result = classify(&url, &html)?;
    let output = Output {
        url: result.url,
        categories: result.categories,
        metrics: result.metrics,
    };

    println!("{}", serde_json::to_string(&output)?);
    Ok(())
}
