//! spaserve - static asset server with SPA fallback
//!
//! Serves a built single-page application from a fixed root directory.
//! Requests that resolve to a file get its exact bytes with a content
//! type inferred from the extension; anything else gets the entry HTML
//! document so that client-side routing works on full-page loads.

pub mod config;
pub mod handler;
pub mod http;
pub mod logger;
pub mod server;
