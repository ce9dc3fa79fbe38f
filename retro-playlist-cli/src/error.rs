use thiserror::Error;

use retro_playlist_formats::FormatError;
use retro_playlist_lib::{EditError, RewriteError, ScanError, ThumbnailError};

/// Errors that can occur during CLI command execution.
#[derive(Debug, Error)]
pub(crate) enum CliError {
    /// I/O error
    #[error("{0}")]
    Io(#[from] std::io::Error),

    /// Reading or writing a list file failed
    #[error("{0}")]
    Format(#[from] FormatError),

    /// An entry edit was rejected
    #[error("Edit rejected: {0}")]
    Edit(#[from] EditError),

    #[error("{0}")]
    Rewrite(#[from] RewriteError),

    #[error("{0}")]
    Scan(#[from] ScanError),

    #[error("Thumbnail error: {0}")]
    Thumbnail(#[from] ThumbnailError),

    /// Configuration error
    #[error("Config error: {0}")]
    Config(String),

    /// Bad command-line input not caught by argument parsing
    #[error("{0}")]
    Usage(String),
}

impl CliError {
    pub(crate) fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    pub(crate) fn usage(msg: impl Into<String>) -> Self {
        Self::Usage(msg.into())
    }
}
