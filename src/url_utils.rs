//! URL Utility Functions
//!
//! Helpers for image sources: extension filtering, size hints encoded in
//! query strings, absolutisation against the page URL, and download file
//! naming.

use url::{form_urlencoded, Url};

/// Image extensions whose dimensions can be resolved.
pub const SUPPORTED_EXTENSIONS: &[&str] = &[".jpg", ".jpeg", ".png", ".svg", ".webp", ".bmp"];

/// Extension given to downloads whose source path has none.
pub const DEFAULT_DOWNLOAD_EXTENSION: &str = ".jpg";

/// Strip the query string and fragment of a URL-ish string.
#[must_use]
pub fn strip_query(src: &str) -> &str {
    let end = src.find(['?', '#']).unwrap_or(src.len());
    &src[..end]
}

/// Whether `src` (query ignored, case-insensitive) ends in a supported
/// image extension.
#[must_use]
pub fn has_supported_extension(src: &str) -> bool {
    let path = strip_query(src.trim()).to_ascii_lowercase();
    SUPPORTED_EXTENSIONS.iter().any(|ext| path.ends_with(ext))
}

/// Read a `w|width` and `h|height` pair from the query string of `src`.
///
/// Keys are case-insensitive; both values must parse as unsigned integers.
///
/// # Example
///
/// ```
/// use rs_page_classifier::url_utils::dimensions_from_url;
///
/// assert_eq!(dimensions_from_url("/img/a.jpg?w=800&h=600"), Some((800, 600)));
/// assert_eq!(dimensions_from_url("/img/a.jpg?Width=80&q=75"), None);
/// ```
#[must_use]
pub fn dimensions_from_url(src: &str) -> Option<(u32, u32)> {
    let (_, query) = src.split_once('?')?;
    let query = query.split('#').next().unwrap_or_default();

    let mut width = None;
    let mut height = None;
    for (key, value) in form_urlencoded::parse(query.as_bytes()) {
        let key = key.to_ascii_lowercase();
        let slot = match key.as_str() {
            "w" | "width" => &mut width,
            "h" | "height" => &mut height,
            _ => continue,
        };
        if slot.is_none() {
            *slot = value.trim().parse::<u32>().ok();
        }
    }

    Some((width?, height?))
}

/// Base URL images are resolved against: the origin (`scheme://host[:port]`)
/// of the page URL, with the scheme defaulted to `https`.
///
/// An unparseable page URL is used as-is (after defaulting its scheme).
#[must_use]
pub fn base_url(page_url: &str) -> String {
    let page_url = page_url.trim();
    let with_scheme = if page_url.contains("://") {
        page_url.to_string()
    } else {
        format!("https://{page_url}")
    };

    match Url::parse(&with_scheme) {
        Ok(url) if url.host().is_some() => url.origin().ascii_serialization(),
        _ => with_scheme,
    }
}

/// Resolve an image `src` against `base`.
///
/// Absolute `http(s)` sources are kept, protocol-relative ones get `https:`,
/// and everything else is joined to `base` with exactly one `/`.
#[must_use]
pub fn absolutize(src: &str, base: &str) -> String {
    let src = src.trim();
    if src.starts_with("//") {
        return format!("https:{src}");
    }
    if src.starts_with("http") {
        return src.to_string();
    }
    format!(
        "{}/{}",
        base.trim_end_matches('/'),
        src.trim_start_matches('/')
    )
}

/// File extension for a downloaded image: the lowercased extension of the
/// source path, or [`DEFAULT_DOWNLOAD_EXTENSION`].
#[must_use]
pub fn download_extension(src: &str) -> String {
    let path = strip_query(src);
    let file = path.rsplit('/').next().unwrap_or(path);
    match file.rfind('.') {
        Some(dot) if dot + 1 < file.len() => file[dot..].to_ascii_lowercase(),
        _ => DEFAULT_DOWNLOAD_EXTENSION.to_string(),
    }
}
