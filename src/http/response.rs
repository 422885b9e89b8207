//! HTTP response building module
//!
//! Builders for the three response classes the server produces: a
//! resolved asset (200), a missing-everything 404, and a read-failure 500.

use http_body_util::Full;
use hyper::body::Bytes;
use hyper::Response;
use std::io::ErrorKind;

/// Build 200 response carrying asset bytes with the inferred content type
///
/// Also used for the SPA fallback, with `text/html` as the content type.
pub fn build_asset_response(data: Vec<u8>, content_type: &str) -> Response<Full<Bytes>> {
    let content_length = data.len();

    Response::builder()
        .status(200)
        .header("Content-Type", content_type)
        .header("Content-Length", content_length)
        .body(Full::new(Bytes::from(data)))
        .unwrap_or_else(|e| {
            log_build_error("200", &e);
            Response::new(Full::new(Bytes::new()))
        })
}

/// Build 404 Not Found response
///
/// Only reachable when the requested asset and the entry document are
/// both absent.
pub fn build_404_response() -> Response<Full<Bytes>> {
    let body = "File not found";

    Response::builder()
        .status(404)
        .header("Content-Type", "text/plain")
        .header("Content-Length", body.len())
        .body(Full::new(Bytes::from(body)))
        .unwrap_or_else(|e| {
            log_build_error("404", &e);
            Response::new(Full::new(Bytes::from(body)))
        })
}

/// Build 500 response naming the underlying read failure
pub fn build_500_response(kind: ErrorKind) -> Response<Full<Bytes>> {
    let body = format!("Server Error: {kind:?}");
    let content_length = body.len();

    Response::builder()
        .status(500)
        .header("Content-Type", "text/plain")
        .header("Content-Length", content_length)
        .body(Full::new(Bytes::from(body)))
        .unwrap_or_else(|e| {
            log_build_error("500", &e);
            Response::new(Full::new(Bytes::new()))
        })
}

/// Log response build error
fn log_build_error(status: &str, error: &hyper::http::Error) {
    crate::logger::log_error(&format!("Failed to build {status} response: {error}"));
}
