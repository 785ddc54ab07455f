//! Page fetching against a local HTTP server.

#![allow(clippy::expect_used)]

mod common;

use rs_page_classifier::fetch::fetch;
use rs_page_classifier::{Error, Options};

use common::{serve, Route};

#[test]
fn html_page_is_fetched_and_decoded() {
    let addr = serve(vec![Route::ok(
        "/story",
        "text/html; charset=ISO-8859-1",
        b"<html><body><p>Caf\xE9</p></body></html>".to_vec(),
    )]);

    let page = fetch(&format!("http://{addr}/story"), &Options::default()).expect("fetch");
    assert!(page.html.contains("Caf\u{e9}"));
    assert!(page.url.ends_with("/story"));
}

#[test]
fn too_many_requests_is_fatal() {
    let addr = serve(vec![Route::status("/busy", 429)]);
    let url = format!("http://{addr}/busy");

    match fetch(&url, &Options::default()) {
        Err(Error::TooManyRequests(u)) => assert_eq!(u, url),
        other => panic!("expected TooManyRequests, got {other:?}"),
    }
}

#[test]
fn non_html_content_is_rejected() {
    let addr = serve(vec![Route::ok("/data", "application/json", "{}")]);

    match fetch(&format!("http://{addr}/data"), &Options::default()) {
        Err(Error::UnsupportedContentType(Some(ct))) => assert_eq!(ct, "application/json"),
        other => panic!("expected UnsupportedContentType, got {other:?}"),
    }
}

#[test]
fn server_errors_surface_as_http_errors() {
    let addr = serve(vec![Route::status("/oops", 500)]);
    let result = fetch(&format!("http://{addr}/oops"), &Options::default());
    assert!(matches!(result, Err(Error::Http(_))));
}
