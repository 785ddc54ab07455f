//! Error types for rs-page-classifier.
//!
//! This module defines the error types returned by classification and by the
//! fetching and reporting helpers around it.

use std::path::PathBuf;

use crate::result::ExtractorId;

/// Error type for classification operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A boilerplate extractor could not label the document.
    ///
    /// The classifier logs this and skips the extractor; it is only returned
    /// to callers that drive an [`Extractor`](crate::extractor::Extractor) directly.
    #[error("Extractor {extractor} failed: {message}")]
    Extraction {
        /// Extractor that failed.
        extractor: ExtractorId,
        /// Failure description.
        message: String,
    },

    /// The scratch directory used for image downloads could not be prepared.
    #[error("Could not prepare scratch directory {}: {source}", path.display())]
    ScratchDir {
        /// Directory that could not be created or purged.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The server answered with HTTP 429.
    #[error("Error 429: Too Many Requests for {0}")]
    TooManyRequests(String),

    /// The fetched resource is not `text/html`.
    #[error("Unsupported content type: {}", .0.as_deref().unwrap_or("<none>"))]
    UnsupportedContentType(Option<String>),

    /// HTTP transport failure.
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Filesystem failure outside the scratch directory.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Metrics report (de)serialization failure.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for classification operations.
pub type Result<T> = std::result::Result<T, Error>;
