//! Character encoding detection and transcoding for fetched pages.
//!
//! The charset is taken from the `Content-Type` header when present, then
//! from a `<meta>` declaration in the first kilobyte of the document. Bytes
//! without a declaration are read as UTF-8 when valid and as Windows-1252
//! otherwise.

use std::sync::LazyLock;

use encoding_rs::{Encoding, UTF_8, WINDOWS_1252};
use regex::Regex;

use crate::patterns::CONTENT_TYPE_CHARSET;

/// Match `<meta charset="...">` and the `charset=` inside
/// `<meta http-equiv="Content-Type" content="...">`.
#[allow(clippy::expect_used)]
static META_CHARSET: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)<meta[^>]+charset\s*=\s*["']?([^"';\s>]+)"#).expect("valid regex")
});

/// Number of leading bytes searched for a `<meta>` declaration.
const META_SCAN_BYTES: usize = 1024;

/// Encoding named by the `charset` parameter of a `Content-Type` header.
#[must_use]
pub fn charset_from_content_type(content_type: &str) -> Option<&'static Encoding> {
    let label = CONTENT_TYPE_CHARSET.captures(content_type)?.get(1)?.as_str();
    Encoding::for_label(label.as_bytes())
}

/// Encoding declared by a `<meta>` tag near the start of the document.
#[must_use]
pub fn declared_encoding(html: &[u8]) -> Option<&'static Encoding> {
    let head = String::from_utf8_lossy(&html[..html.len().min(META_SCAN_BYTES)]);
    let label = META_CHARSET.captures(&head)?.get(1)?.as_str().to_string();
    Encoding::for_label(label.as_bytes())
}

/// Pick the encoding of a fetched page.
#[must_use]
pub fn detect_encoding(html: &[u8], content_type: Option<&str>) -> &'static Encoding {
    content_type
        .and_then(charset_from_content_type)
        .or_else(|| declared_encoding(html))
        .unwrap_or_else(|| {
            if std::str::from_utf8(html).is_ok() {
                UTF_8
            } else {
                WINDOWS_1252
            }
        })
}

/// Decode page bytes to a UTF-8 string.
///
/// Invalid sequences are replaced with U+FFFD.
///
/// # Examples
///
/// ```
/// use rs_page_classifier::encoding::decode_html;
///
/// let page = decode_html(b"<p>Caf\xE9</p>", Some("text/html; charset=ISO-8859-1"));
/// assert_eq!(page, "<p>Caf\u{e9}</p>");
/// ```
#[must_use]
pub fn decode_html(html: &[u8], content_type: Option<&str>) -> String {
    let encoding = detect_encoding(html, content_type);
    let (decoded, _, _) = encoding.decode(html);
    decoded.into_owned()
}
