//! Error types surfaced by tree construction and the pager.

use std::io;
use std::path::PathBuf;

/// A filesystem failure hit while walking the tree. Aborts the whole build.
#[derive(Debug, thiserror::Error)]
#[error("cannot walk {}", .path.display())]
pub struct TraversalError {
    /// Path of the entry that could not be read (the root if unknown).
    pub path: PathBuf,
    #[source]
    pub source: walkdir::Error,
}

impl TraversalError {
    pub(crate) fn new(root: &std::path::Path, source: walkdir::Error) -> Self {
        let path = source
            .path()
            .map(|p| p.to_path_buf())
            .unwrap_or_else(|| root.to_path_buf());
        Self { path, source }
    }

    /// Underlying I/O error, if the failure was an I/O failure rather than a loop.
    pub fn io_error(&self) -> Option<&io::Error> {
        self.source.io_error()
    }
}

/// Failure to bring up or drive the interactive viewer.
#[derive(Debug, thiserror::Error)]
pub enum DisplayError {
    #[error("stdout is not an interactive terminal")]
    NotATerminal,
    #[error("terminal I/O failed: {0}")]
    Io(#[from] io::Error),
}
