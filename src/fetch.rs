//! Page fetching.
//!
//! Blocking HTTP client shared by the page fetcher and the image
//! downloader. Pages are requested with a browser-like User-Agent and a
//! bundle of cookies that pre-accept common consent banners.

use reqwest::blocking::Client;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, ACCEPT_LANGUAGE, CONTENT_TYPE, COOKIE};
use reqwest::redirect::Policy;
use reqwest::StatusCode;
use tracing::{debug, instrument};

use crate::encoding::decode_html;
use crate::error::{Error, Result};
use crate::options::Options;

/// Redirects followed before giving up.
pub const MAX_REDIRECTS: usize = 10;

/// Cookies that dismiss the most common consent banners.
pub const CONSENT_COOKIES: &[(&str, &str)] = &[
    ("cookieConsent", "true"),
    ("cookie-consent", "accepted"),
    ("cookiesAccepted", "true"),
    ("acceptCookies", "true"),
    ("gdpr-consent", "accepted"),
    ("privacy-consent", "true"),
    ("cookie_notice_accepted", "true"),
    ("cookies_policy", "accepted"),
    (
        "CookieConsent",
        "{necessary:true,preferences:true,statistics:true,marketing:false}",
    ),
    ("CookieConsentBulkTicket", "accepted"),
];

/// A fetched and decoded page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchedPage {
    /// Final URL after redirects.
    pub url: String,
    /// Decoded HTML.
    pub html: String,
}

/// `Cookie` header value carrying [`CONSENT_COOKIES`].
#[must_use]
pub fn consent_cookie_header() -> String {
    CONSENT_COOKIES
        .iter()
        .map(|(name, value)| format!("{name}={value}"))
        .collect::<Vec<_>>()
        .join("; ")
}

/// Build the blocking client used for pages and images.
pub fn build_client(options: &Options) -> Result<Client> {
    let mut headers = HeaderMap::new();
    headers.insert(
        ACCEPT,
        HeaderValue::from_static("text/html,application/xhtml+xml,application/xml;q=0.9,*/*;q=0.8"),
    );
    headers.insert(ACCEPT_LANGUAGE, HeaderValue::from_static("en-US,en;q=0.9"));

    let client = Client::builder()
        .user_agent(options.user_agent.as_str())
        .default_headers(headers)
        .redirect(Policy::limited(MAX_REDIRECTS))
        .timeout(options.fetch_timeout)
        .gzip(true)
        .deflate(true)
        .build()?;
    Ok(client)
}

/// Whether a `Content-Type` value denotes HTML.
#[must_use]
pub fn is_html_content_type(content_type: &str) -> bool {
    content_type
        .split(';')
        .next()
        .is_some_and(|mime| mime.trim().eq_ignore_ascii_case("text/html"))
}

/// Fetch `url` with a fresh client built from `options`.
pub fn fetch(url: &str, options: &Options) -> Result<FetchedPage> {
    let client = build_client(options)?;
    fetch_with_client(&client, url)
}

/// Fetch `url` and decode it to UTF-8.
///
/// # Errors
///
/// - [`Error::TooManyRequests`] on HTTP 429
/// - [`Error::UnsupportedContentType`] when the response is not `text/html`
/// - [`Error::Http`] for transport failures and other error statuses
#[instrument(skip(client))]
pub fn fetch_with_client(client: &Client, url: &str) -> Result<FetchedPage> {
    let response = client
        .get(url)
        .header(COOKIE, consent_cookie_header())
        .send()?;

    if response.status() == StatusCode::TOO_MANY_REQUESTS {
        return Err(Error::TooManyRequests(url.to_string()));
    }
    let response = response.error_for_status()?;

    let content_type = response
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .map(ToString::to_string);
    if !content_type.as_deref().is_some_and(is_html_content_type) {
        return Err(Error::UnsupportedContentType(content_type));
    }

    let final_url = response.url().to_string();
    let bytes = response.bytes()?;
    debug!(url = %final_url, bytes = bytes.len(), "page fetched");

    Ok(FetchedPage {
        url: final_url,
        html: decode_html(&bytes, content_type.as_deref()),
    })
}
