//! Error types.

use std::path::PathBuf;

use thiserror::Error;

/// Outcome of resolving a page that does not exist.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PageError {
    #[error("Service not found: {0}")]
    NotFound(String),
}

#[derive(Debug, Error)]
pub enum SiteError {
    #[error("Failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to parse {path}: {message}")]
    Parse { path: PathBuf, message: String },
    #[error("Invalid content: {0}")]
    InvalidContent(String),
    #[error("Template error: {0}")]
    Template(#[from] askama::Error),
    #[error(transparent)]
    Page(#[from] PageError),
}

pub type Result<T> = std::result::Result<T, SiteError>;
