//! Request handler module
//!
//! Request entry point plus the filesystem resolution behind it.

pub mod router;
pub mod static_files;

// Re-export main entry point
pub use router::handle_request;
