//! URL pattern matching.
//!
//! Every category pattern is tested independently against the page URL;
//! each match is one URL-source vote. A malformed URL simply matches nothing.

use crate::patterns::{
    ARTICLE_URL, COMIC_URL, FORUM_URL, HOMEPAGE_URL, PHOTO_GALLERY_URL, VIDEO_PLAYER_URL,
};
use crate::result::PageCategory;

/// Return every category whose URL pattern matches `url`, in the order
/// Video Player, Forum, Photo Gallery, Comic, Homepage, Article.
#[must_use]
pub fn match_url(url: &str) -> Vec<PageCategory> {
    let url = url.trim();
    if url.is_empty() {
        return Vec::new();
    }

    let checks = [
        (PageCategory::VideoPlayer, &*VIDEO_PLAYER_URL),
        (PageCategory::Forum, &*FORUM_URL),
        (PageCategory::PhotoGallery, &*PHOTO_GALLERY_URL),
        (PageCategory::Comic, &*COMIC_URL),
        (PageCategory::Homepage, &*HOMEPAGE_URL),
        (PageCategory::Article, &*ARTICLE_URL),
    ];

    checks
        .into_iter()
        .filter(|(_, pattern)| pattern.is_match(url))
        .map(|(category, _)| category)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bare_domain_is_homepage() {
        assert_eq!(match_url("https://www.example.com/"), vec![PageCategory::Homepage]);
        assert_eq!(match_url("example.com"), vec![PageCategory::Homepage]);
    }

    #[test]
    fn several_categories_can_match() {
        let matched = match_url("https://www.reddit.com/r/pics/comments/abc/gallery");
        assert!(matched.contains(&PageCategory::Forum));
        assert!(matched.contains(&PageCategory::PhotoGallery));
        assert!(!matched.contains(&PageCategory::Homepage));
    }

    #[test]
    fn malformed_url_matches_nothing() {
        assert!(match_url("").is_empty());
        assert!(match_url("   ").is_empty());
        assert!(match_url("not a url at all").is_empty());
        assert!(match_url("http://").is_empty());
    }

    #[test]
    fn article_paths_and_hosts() {
        assert!(match_url("https://news.example.org/article/2024/05/title").contains(&PageCategory::Article));
        assert!(match_url("https://medium.com/@someone/a-story-1234").contains(&PageCategory::Article));
    }
}
