// Server state module
// Immutable runtime state shared across request handlers

use std::path::{Path, PathBuf};

use super::types::Config;

/// Runtime server state
///
/// Built once from [`Config`] at startup and shared behind an `Arc`.
/// Requests never mutate it; every lookup goes straight to the
/// filesystem, so there is nothing to lock or invalidate.
pub struct ServerState {
    pub config: Config,
    /// Asset root directory all request paths resolve under
    root_dir: PathBuf,
    /// Entry document path (`root_dir/index_file`), the SPA fallback
    entry_document: PathBuf,
}

impl ServerState {
    pub fn new(config: Config) -> Self {
        let root_dir = PathBuf::from(&config.assets.root_dir);
        let entry_document = root_dir.join(&config.assets.index_file);
        Self {
            config,
            root_dir,
            entry_document,
        }
    }

    pub fn root_dir(&self) -> &Path {
        &self.root_dir
    }

    pub fn entry_document(&self) -> &Path {
        &self.entry_document
    }
}
