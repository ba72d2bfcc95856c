//! Error types for stubsync-core
//!
//! Failures split into two kinds with distinct control flow: [`Mismatch`]
//! values are per-line check failures that are tallied while the scan
//! continues, and [`Error`] values are environment failures that abort the
//! whole run.

use std::path::PathBuf;

/// Result type for stubsync-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Fatal errors that abort a run immediately
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("diff is not installed. Quitting.")]
    DiffUnavailable,

    #[error("failed to invoke diff: {source}")]
    DiffInvocation {
        #[source]
        source: std::io::Error,
    },
}

impl Error {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

/// Recoverable check failures, one per offending import line
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Mismatch {
    /// Neither `<base>/__init__.pyi` nor `<base>.pyi` exists for the module
    #[error("{module} does not exist in {root}")]
    MissingModule { module: String, root: PathBuf },

    /// Original and copy resolved, but their contents diverge
    #[error("{original} and {copy} differ.\ndiff says:\n{diff}")]
    FilesDiffer {
        original: PathBuf,
        copy: PathBuf,
        diff: String,
    },
}
