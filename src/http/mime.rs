//! MIME type detection module
//!
//! Returns the corresponding Content-Type based on file extension.
//! The table is fixed: extensions outside it (wasm, pdf, ...) fall back
//! to the generic binary type.

/// Content type served for HTML documents, including the SPA fallback
pub const TEXT_HTML: &str = "text/html";

/// Content type for extensions outside the fixed table
pub const OCTET_STREAM: &str = "application/octet-stream";

/// Get MIME Content-Type based on file extension
///
/// Matching is case-insensitive.
///
/// # Examples
/// ```
/// use spaserve::http::mime::content_type;
/// assert_eq!(content_type(Some("html")), "text/html");
/// assert_eq!(content_type(Some("woff2")), "font/woff2");
/// assert_eq!(content_type(None), "application/octet-stream");
/// ```
pub fn content_type(extension: Option<&str>) -> &'static str {
    let Some(ext) = extension else {
        return OCTET_STREAM;
    };

    match ext.to_ascii_lowercase().as_str() {
        // Documents and code
        "html" => TEXT_HTML,
        "js" => "application/javascript",
        "css" => "text/css",
        "json" => "application/json",

        // Images
        "png" => "image/png",
        "jpg" => "image/jpeg",
        "gif" => "image/gif",
        "svg" => "image/svg+xml",
        "ico" => "image/x-icon",

        // Fonts
        "woff" => "font/woff",
        "woff2" => "font/woff2",
        "ttf" => "font/ttf",
        "eot" => "application/vnd.ms-fontobject",
        "otf" => "font/otf",

        // Default
        _ => OCTET_STREAM,
    }
}
