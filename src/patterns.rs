//! Compiled regex patterns for URL matching and video scanning.
//!
//! All patterns are compiled once at startup using `LazyLock` for efficiency.
//! Patterns are organized by their purpose in the classification pipeline.

#![allow(clippy::expect_used)]

use std::sync::LazyLock;

use regex::Regex;

// =============================================================================
// URL Category Patterns
// =============================================================================
//
// Each category pattern has two alternatives: a path-segment form, matched
// against the path of the URL only (a segment name followed by `/`, `?`, `#`,
// `.` or the end of the URL), and a host-list form naming well-known sites.

/// Path segment prefix shared by the path-segment alternatives: scheme and
/// host (or a scheme-less host with optional port), then any leading path
/// segments.
const PATH_PREFIX: &str = r"^(?:[a-z][a-z0-9+.\-]*://[^/?#]+|[^:/?#]+(?::\d+)?)/(?:[^?#]*/)?";

/// Boundary after a matched path segment.
const SEGMENT_END: &str = r"(?:[/?#.]|$)";

fn category_pattern(segments: &str, hosts: &str) -> Regex {
    Regex::new(&format!(
        r"(?i){PATH_PREFIX}(?:{segments}){SEGMENT_END}|^(?:[a-z][a-z0-9+.\-]*://)?(?:[^/?#]*\.)?(?:{hosts})(?::\d+)?/.+$"
    ))
    .expect("category URL regex")
}

/// Article pages: `/article/…`, `/blog/…` or well-known publishing platforms.
pub static ARTICLE_URL: LazyLock<Regex> = LazyLock::new(|| {
    category_pattern(
        "article|articles|art|blog|blogs",
        r"quora\.com|medium\.com|substack\.com|huffpost\.com|ezinearticles\.com|hubpages\.com|businessinsider\.com|vocal\.media",
    )
});

/// Forum and discussion pages.
pub static FORUM_URL: LazyLock<Regex> = LazyLock::new(|| {
    category_pattern(
        "forum|forums|community|board|boards|discussion|discuss|thread|threads|topic|topics|viewtopic|post|reply|comment|comments",
        r"reddit\.com|stackoverflow\.com|stackexchange\.com|discourse\.org|phpbb\.com|vbulletin\.com|xenforo\.com|invisioncommunity\.com",
    )
});

/// Photo galleries and image hosts.
pub static PHOTO_GALLERY_URL: LazyLock<Regex> = LazyLock::new(|| {
    category_pattern(
        "gallery|galleries|photo|photos|photography|album|albums|pictures|slideshow",
        r"flickr\.com|imgur\.com|500px\.com|smugmug\.com|pinterest\.com|unsplash\.com|deviantart\.com",
    )
});

/// Web comics.
pub static COMIC_URL: LazyLock<Regex> = LazyLock::new(|| {
    category_pattern(
        "comic|comics|webcomic|webcomics|manga|strip|strips",
        r"xkcd\.com|smbc-comics\.com|webtoons\.com|gocomics\.com|explosm\.net|tapas\.io|questionablecontent\.net",
    )
});

/// Video players and video hosts.
pub static VIDEO_PLAYER_URL: LazyLock<Regex> = LazyLock::new(|| {
    category_pattern(
        "video|videos|watch|embed|player|clip|clips",
        r"youtube\.com|youtu\.be|vimeo\.com|dailymotion\.com|twitch\.tv|tiktok\.com|rumble\.com",
    )
});

/// Bare domains: optional scheme and `www.`, a dotted host, optional
/// trailing slash, and no path.
pub static HOMEPAGE_URL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^(?:https?://)?(?:www\.)?(?:[^/\s]+\.)+[^/\s]+/?$").expect("HOMEPAGE_URL regex")
});

// =============================================================================
// Video Element Patterns
// =============================================================================

/// `<video …>…</video>`, capturing the opening-tag attributes and the body.
pub static VIDEO_ELEMENT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?is)<video\b([^>]*)>(.*?)</video\s*>").expect("VIDEO_ELEMENT regex")
});

/// `<source … src="…">` inside a video body.
pub static SOURCE_SRC: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?is)<source\b[^>]*?\ssrc\s*=\s*["']([^"']+)["']"#).expect("SOURCE_SRC regex")
});

/// `src="…"` inside an attribute list.
pub static SRC_ATTR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)(?:^|\s)src\s*=\s*["']([^"']+)["']"#).expect("SRC_ATTR regex")
});

/// `<iframe … src="…" …>`.
pub static IFRAME_ELEMENT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?is)<iframe\b[^>]*?\ssrc\s*=\s*["']([^"']+)["'][^>]*>"#).expect("IFRAME_ELEMENT regex")
});

/// `<object … data="…">` or `<embed … src="…">`.
pub static OBJECT_EMBED_ELEMENT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?is)<(?:object|embed)\b[^>]*?\s(?:data|src)\s*=\s*["']([^"']+)["'][^>]*>"#)
        .expect("OBJECT_EMBED_ELEMENT regex")
});

/// `width="…"` attribute.
pub static WIDTH_ATTR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)\swidth\s*=\s*["']([^"']*)["']"#).expect("WIDTH_ATTR regex")
});

/// `height="…"` attribute.
pub static HEIGHT_ATTR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)\sheight\s*=\s*["']([^"']*)["']"#).expect("HEIGHT_ATTR regex")
});

// =============================================================================
// Text Patterns
// =============================================================================

/// Clause delimiters used by the minimum-clause-words filter.
pub static CLAUSE_DELIMITER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[,;:.!?\u{2014}\u{2013}]").expect("CLAUSE_DELIMITER regex")
});

/// `charset=` parameter of a `Content-Type` header.
pub static CONTENT_TYPE_CHARSET: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)charset\s*=\s*"?([^";\s]+)"#).expect("CONTENT_TYPE_CHARSET regex")
});
