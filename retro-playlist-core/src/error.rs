use thiserror::Error;

/// Validation failures for a single playlist entry.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EntryError {
    /// Display name is empty (after trimming)
    #[error("Display name must not be empty")]
    EmptyName,

    /// ROM filename is empty (after trimming)
    #[error("ROM filename must not be empty")]
    EmptyGamePath,

    /// ROM filename contains a directory separator
    #[error("ROM filename must not contain '/': {0}")]
    GamePathHasSeparator(String),
}

impl EntryError {
    pub fn game_path_has_separator(path: impl Into<String>) -> Self {
        Self::GamePathHasSeparator(path.into())
    }
}
