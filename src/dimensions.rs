//! Image dimension resolution.
//!
//! Dimensions come from one of two places: a `w`/`h` size hint in the image
//! URL, or the header of the downloaded file. Downloads land in a scratch
//! directory that is purged before every batch.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use reqwest::blocking::Client;
use tracing::{debug, warn};

use crate::error::{Error, Result};
use crate::media::Image;
use crate::url_utils::{absolutize, base_url, dimensions_from_url, download_extension, has_supported_extension};

/// Drop images whose source does not end in a supported extension.
#[must_use]
pub fn retain_supported(images: Vec<Image>) -> Vec<Image> {
    images
        .into_iter()
        .filter(|image| has_supported_extension(&image.src))
        .collect()
}

/// What one resolver run did.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ResolveStats {
    /// Images sized from their URL query.
    pub from_url: usize,
    /// Images sized from a downloaded header.
    pub downloaded: usize,
    /// Images whose download or decode failed.
    pub failed: usize,
    /// Images left alone because downloads are disabled.
    pub skipped: usize,
}

/// Resolves image dimensions for one page.
#[derive(Debug, Clone)]
pub struct DimensionResolver {
    base_url: String,
    scratch_dir: PathBuf,
    client: Client,
    download: bool,
    timeout: Duration,
}

impl DimensionResolver {
    /// Create a resolver for images of `page_url`.
    ///
    /// Relative sources are resolved against the origin of `page_url`.
    #[must_use]
    pub fn new(page_url: &str, scratch_dir: impl Into<PathBuf>, client: Client) -> Self {
        Self {
            base_url: base_url(page_url),
            scratch_dir: scratch_dir.into(),
            client,
            download: true,
            timeout: Duration::from_secs(10),
        }
    }

    /// Enable or disable the network pass.
    #[must_use]
    pub fn with_downloads(mut self, download: bool) -> Self {
        self.download = download;
        self
    }

    /// Per-image download timeout.
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fill in `width`, `height` and `area` where they can be determined.
    ///
    /// Download and decode failures are logged and leave the image as it
    /// was. The only error is a scratch directory that cannot be prepared.
    pub fn resolve(&self, images: &mut [Image]) -> Result<ResolveStats> {
        let mut stats = ResolveStats::default();
        let mut pending = Vec::new();

        for (i, image) in images.iter_mut().enumerate() {
            if let Some((width, height)) = dimensions_from_url(&image.src) {
                image.set_dimensions(width, height);
                stats.from_url += 1;
            } else {
                pending.push(i);
            }
        }

        if pending.is_empty() {
            return Ok(stats);
        }
        if !self.download {
            stats.skipped = pending.len();
            return Ok(stats);
        }

        purge_dir(&self.scratch_dir)?;

        for (n, i) in pending.into_iter().enumerate() {
            let image = &mut images[i];
            let url = absolutize(&image.src, &self.base_url);
            let path = self
                .scratch_dir
                .join(format!("image_{n}{}", download_extension(&image.src)));

            if let Err(e) = self.download_to(&url, &path) {
                warn!(src = %url, error = %e, "image download failed");
                stats.failed += 1;
                continue;
            }

            match read_dimensions(&path) {
                Ok((width, height)) => {
                    image.set_dimensions(width, height);
                    stats.downloaded += 1;
                }
                Err(e) => {
                    warn!(src = %url, error = %e, "image decode failed");
                    stats.failed += 1;
                }
            }
        }

        debug!(
            from_url = stats.from_url,
            downloaded = stats.downloaded,
            failed = stats.failed,
            "image dimensions resolved"
        );
        Ok(stats)
    }

    fn download_to(&self, url: &str, path: &Path) -> Result<()> {
        let response = self
            .client
            .get(url)
            .timeout(self.timeout)
            .send()?
            .error_for_status()?;
        let bytes = response.bytes()?;
        fs::write(path, &bytes)?;
        Ok(())
    }
}

/// Create `dir` if needed and remove everything inside it.
fn purge_dir(dir: &Path) -> Result<()> {
    let scratch_err = |source| Error::ScratchDir {
        path: dir.to_path_buf(),
        source,
    };

    fs::create_dir_all(dir).map_err(scratch_err)?;
    for entry in fs::read_dir(dir).map_err(scratch_err)? {
        let path = entry.map_err(scratch_err)?.path();
        let removed = if path.is_dir() {
            fs::remove_dir_all(&path)
        } else {
            fs::remove_file(&path)
        };
        removed.map_err(scratch_err)?;
    }
    Ok(())
}

/// Decode only the image header.
fn read_dimensions(path: &Path) -> image::ImageResult<(u32, u32)> {
    image::ImageReader::open(path)?
        .with_guessed_format()?
        .into_dimensions()
}
