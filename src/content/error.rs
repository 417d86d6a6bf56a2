//! Content loading errors

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while loading content files.
///
/// A missing file is not an error: lookups return `Ok(None)` so callers can
/// render a "not found" page. Everything here is meant to fail the build.
#[derive(Debug, Error)]
pub enum ContentError {
    #[error("Failed to read {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed front-matter in {path:?}: {message}")]
    Frontmatter { path: PathBuf, message: String },

    #[error("Invalid metadata in {path:?}: {message}")]
    InvalidMeta { path: PathBuf, message: String },
}

impl ContentError {
    /// Path of the file that failed to load
    pub fn path(&self) -> &PathBuf {
        match self {
            ContentError::Io { path, .. }
            | ContentError::Frontmatter { path, .. }
            | ContentError::InvalidMeta { path, .. } => path,
        }
    }
}

pub type Result<T> = std::result::Result<T, ContentError>;
