//! Request entry point module
//!
//! Resolution is purely path-to-file: the HTTP method is not inspected,
//! and query/fragment are left to hyper's URI parsing (only the path is
//! used for lookup).

use crate::config::ServerState;
use crate::handler::static_files;
use crate::logger::{self, AccessLogEntry};
use http_body_util::Full;
use hyper::body::Bytes;
use hyper::{Request, Response};
use std::convert::Infallible;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Instant;

/// Main entry point for HTTP request handling
pub async fn handle_request(
    req: Request<hyper::body::Incoming>,
    peer_addr: SocketAddr,
    state: Arc<ServerState>,
) -> Result<Response<Full<Bytes>>, Infallible> {
    let started = Instant::now();
    let path = req.uri().path().to_string();

    let response = static_files::serve(&state, &path).await;

    if state.config.logging.access_log {
        let mut entry = AccessLogEntry::new(
            peer_addr.to_string(),
            req.method().to_string(),
            path,
        );
        entry.query = req.uri().query().map(ToString::to_string);
        entry.http_version = format_version(req.version());
        entry.referer = header_value(&req, "referer");
        entry.user_agent = header_value(&req, "user-agent");
        entry.status = response.status().as_u16();
        entry.body_bytes = body_bytes(&response);
        entry.request_time_us =
            u64::try_from(started.elapsed().as_micros()).unwrap_or(u64::MAX);

        logger::log_access(&entry, &state.config.logging.access_log_format);
    }

    Ok(response)
}

fn format_version(version: hyper::Version) -> String {
    match version {
        hyper::Version::HTTP_10 => "1.0".to_string(),
        hyper::Version::HTTP_2 => "2".to_string(),
        _ => "1.1".to_string(),
    }
}

fn header_value(req: &Request<hyper::body::Incoming>, name: &str) -> Option<String> {
    req.headers()
        .get(name)
        .and_then(|v| v.to_str().ok())
        .map(ToString::to_string)
}

/// Response body size, read back from the Content-Length the builders set
fn body_bytes(response: &Response<Full<Bytes>>) -> usize {
    response
        .headers()
        .get("content-length")
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.parse().ok())
        .unwrap_or(0)
}
