//! Metrics report file.
//!
//! The report is a JSON array; each element maps one page URL to the metrics
//! of every extractor that ran on it:
//!
//! ```json
//! [{"https://example.com/": {"ARTICLE": {"totalBlocks": 12, ...}, ...}}]
//! ```

use std::collections::BTreeMap;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use tracing::warn;

use crate::error::Result;
use crate::metrics::Metrics;
use crate::result::{ExtractorId, ReportEntry};

/// Read all entries of a report file.
///
/// A missing or empty file has no entries. A file that is not a JSON array
/// of entries is logged and treated as empty.
pub fn read_report(path: &Path) -> Result<Vec<ReportEntry>> {
    let contents = match fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
        Err(e) => return Err(e.into()),
    };

    if contents.trim().is_empty() {
        return Ok(Vec::new());
    }

    match serde_json::from_str(&contents) {
        Ok(entries) => Ok(entries),
        Err(e) => {
            warn!(path = %path.display(), error = %e, "unreadable report, starting a new one");
            Ok(Vec::new())
        }
    }
}

/// Append the metrics of one page to the report at `path`.
///
/// Existing entries are preserved. Returns the number of entries now in the
/// file.
pub fn append_metrics(
    path: &Path,
    url: &str,
    metrics: &BTreeMap<ExtractorId, Metrics>,
) -> Result<usize> {
    let mut entries = read_report(path)?;

    let mut entry = ReportEntry::new();
    entry.insert(url.to_string(), metrics.clone());
    entries.push(entry);

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, serde_json::to_string_pretty(&entries)?)?;
    Ok(entries.len())
}
