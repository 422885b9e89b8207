//! Static file serving module
//!
//! Maps request paths to files under the asset root, reads them with
//! async I/O, and falls back to the entry document for anything that
//! does not resolve (SPA fallback).

use crate::config::ServerState;
use crate::http::{self, mime};
use crate::logger;
use http_body_util::Full;
use hyper::body::Bytes;
use hyper::Response;
use std::io::ErrorKind;
use std::path::{Component, Path, PathBuf};
use tokio::fs;

/// Serve the asset addressed by `path`, falling back to the entry document
///
/// Response classes, in order of preference:
/// 1. the file's exact bytes with its inferred content type,
/// 2. the entry document as `text/html` when the file is absent,
/// 3. 404 when the entry document is absent too,
/// 4. 500 naming the failure code for any other read error.
pub async fn serve(state: &ServerState, path: &str) -> Response<Full<Bytes>> {
    let Some(candidate) = resolve_request_path(state, path) else {
        // Unresolvable paths (traversal attempts) take the fallback branch
        logger::log_warning(&format!("Path traversal attempt blocked: {path}"));
        return serve_fallback(state).await;
    };

    match read_asset(&candidate).await {
        Ok(content) => {
            let content_type =
                mime::content_type(candidate.extension().and_then(|e| e.to_str()));
            http::build_asset_response(content, content_type)
        }
        Err(e) if e.kind() == ErrorKind::NotFound => serve_fallback(state).await,
        Err(e) => {
            logger::log_error(&format!(
                "Failed to read '{}': {e}",
                candidate.display()
            ));
            http::build_500_response(e.kind())
        }
    }
}

/// Serve the entry document, or 404 when it is absent as well
async fn serve_fallback(state: &ServerState) -> Response<Full<Bytes>> {
    match read_asset(state.entry_document()).await {
        Ok(content) => http::build_asset_response(content, mime::TEXT_HTML),
        Err(e) if e.kind() == ErrorKind::NotFound => http::build_404_response(),
        Err(e) => {
            logger::log_error(&format!(
                "Failed to read entry document '{}': {e}",
                state.entry_document().display()
            ));
            http::build_500_response(e.kind())
        }
    }
}

/// Map a request path to a candidate filesystem path
///
/// `/` maps to the entry document; any other path joins under the asset
/// root. Returns `None` for paths with `..` components, which must not
/// escape the root.
pub fn resolve_request_path(state: &ServerState, path: &str) -> Option<PathBuf> {
    if path == "/" {
        return Some(state.entry_document().to_path_buf());
    }

    let relative = sanitize_relative(path)?;
    Some(state.root_dir().join(relative))
}

/// Strip the leading slash and reject parent-directory components
fn sanitize_relative(path: &str) -> Option<PathBuf> {
    let trimmed = path.trim_start_matches('/');

    let mut relative = PathBuf::new();
    for component in Path::new(trimmed).components() {
        match component {
            Component::Normal(part) => relative.push(part),
            Component::CurDir => {}
            // ParentDir could escape the root; Prefix/RootDir cannot
            // appear after the leading slash is trimmed
            _ => return None,
        }
    }

    Some(relative)
}

/// Read a candidate file
///
/// Paths naming a directory are reported as not found so that they take
/// the fallback branch instead of a read error.
async fn read_asset(path: &Path) -> std::io::Result<Vec<u8>> {
    let metadata = fs::metadata(path).await?;
    if !metadata.is_file() {
        return Err(std::io::Error::from(ErrorKind::NotFound));
    }
    fs::read(path).await
}
