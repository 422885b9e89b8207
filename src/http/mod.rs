//! HTTP protocol layer module
//!
//! Content-type inference and response builders, decoupled from the
//! filesystem lookup logic in the handler layer.

pub mod mime;
pub mod response;

// Re-export commonly used builders
pub use response::{build_404_response, build_500_response, build_asset_response};
