use std::path::PathBuf;

use thiserror::Error;

use retro_playlist_core::EntryError;

/// Errors from single-entry edits. The list is left unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EditError {
    #[error("Display name must not be empty")]
    EmptyName,

    #[error("ROM filename must not be empty")]
    EmptyGamePath,

    #[error("ROM filename must not contain '/': {0}")]
    GamePathHasSeparator(String),

    /// No entry at the requested position
    #[error("Entry {index} is out of range (list has {len} entries)")]
    IndexOutOfRange { index: usize, len: usize },
}

impl From<EntryError> for EditError {
    fn from(err: EntryError) -> Self {
        match err {
            EntryError::EmptyName => EditError::EmptyName,
            EntryError::EmptyGamePath => EditError::EmptyGamePath,
            EntryError::GamePathHasSeparator(path) => EditError::GamePathHasSeparator(path),
        }
    }
}

/// Errors from batch path rewrites.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RewriteError {
    /// No field was supplied
    #[error(
        "Nothing to change: supply at least one of ROM base path, core path, database name or ROM extension"
    )]
    NothingToChange,

    /// There are no entries to rewrite
    #[error("The game list is empty")]
    EmptyList,
}

/// Errors from building a list out of a ROM folder.
#[derive(Debug, Error)]
pub enum ScanError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The folder contained no candidate ROM files
    #[error("No ROM files found in {}", .0.display())]
    NoRoms(PathBuf),
}

/// Errors from thumbnail folder operations.
#[derive(Debug, Error)]
pub enum ThumbnailError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),

    /// The thumbnail folder does not exist or is not a directory
    #[error("Not a directory: {}", .0.display())]
    NotADirectory(PathBuf),
}
