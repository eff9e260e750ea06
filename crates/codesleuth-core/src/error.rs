/// Error types for the scanning API.
///
/// Only conditions that stop a scan from starting are errors. A file that
/// cannot be read mid-scan is degraded to a zero count and a directory that
/// cannot be listed is skipped with a warning message; neither aborts the
/// walk, so neither appears here.
use std::path::PathBuf;

use thiserror::Error;

/// Errors returned when starting a scan.
#[derive(Debug, Error)]
pub enum ScanError {
    /// The requested root path does not exist.
    #[error("directory not found: {path}")]
    NotFound { path: PathBuf },

    /// The requested root path exists but is not a directory.
    #[error("not a directory: {path}")]
    NotADirectory { path: PathBuf },

    /// The root path could not be inspected for another reason.
    #[error("cannot access {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A scan is already running on this controller.
    #[error("a scan is already in progress")]
    ScanInProgress,
}

impl ScanError {
    /// Wrap an I/O failure on `path`, folding the common `NotFound` kind
    /// into its dedicated variant.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let path = path.into();
        match source.kind() {
            std::io::ErrorKind::NotFound => Self::NotFound { path },
            _ => Self::Io { path, source },
        }
    }
}
