pub mod error;
pub mod icon_xml;
pub mod lpl;
pub mod repair;

pub use error::FormatError;
pub use icon_xml::IconXmlCodec;
pub use lpl::LplCodec;

use std::fs;
use std::path::Path;

use retro_playlist_core::{GameEntry, PlaylistMeta};

/// Result of parsing a playlist file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedPlaylist {
    /// Entries in file order
    pub entries: Vec<GameEntry>,
    /// Defaults inferred from the file (empty for formats that carry none)
    pub meta: PlaylistMeta,
    /// Non-fatal problems found while parsing
    pub warnings: Vec<ParseWarning>,
}

/// Problems that do not stop an import.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseWarning {
    /// The 6-line playlist did not end on an entry boundary
    #[error(
        "line count {line_count} is not a multiple of {}; the trailing {dropped_lines} line(s) were ignored",
        lpl::LINES_PER_ENTRY
    )]
    TruncatedEntry {
        line_count: usize,
        dropped_lines: usize,
    },
}

/// Trait implemented by each on-disk playlist dialect.
pub trait PlaylistCodec {
    fn name(&self) -> &'static str;

    /// Parse raw file text into entries and inferred defaults.
    fn parse(&self, text: &str) -> Result<ParsedPlaylist, FormatError>;

    /// Serialize entries, applying `meta` to entries without their own overrides.
    fn export(&self, entries: &[GameEntry], meta: &PlaylistMeta) -> String;
}

/// The playlist dialects this crate can read and write.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlaylistFormat {
    /// Paged icon-resource XML (`game_strings_*.xml`)
    IconXml,
    /// 6-line text playlist (`.lpl`)
    Lpl,
}

impl PlaylistFormat {
    pub fn codec(&self) -> &'static dyn PlaylistCodec {
        match self {
            Self::IconXml => &IconXmlCodec,
            Self::Lpl => &LplCodec,
        }
    }

    /// File name used when the caller does not choose one.
    pub fn default_file_name(&self) -> &'static str {
        match self {
            Self::IconXml => "game_strings_ko.xml",
            Self::Lpl => "playlist.lpl",
        }
    }

    /// Pick a format from a file's extension (case-insensitive).
    pub fn from_path(path: &Path) -> Result<Self, FormatError> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or_default();
        ext.parse()
            .map_err(|_| FormatError::unsupported_format(path.display().to_string()))
    }
}

impl std::fmt::Display for PlaylistFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.codec().name())
    }
}

impl std::str::FromStr for PlaylistFormat {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "xml" | "icon" | "icon-xml" => Ok(Self::IconXml),
            "lpl" | "playlist" => Ok(Self::Lpl),
            _ => Err(FormatError::unsupported_format(s)),
        }
    }
}

/// Read and parse a playlist file, detecting the format from its extension.
pub fn read_playlist(path: &Path) -> Result<(PlaylistFormat, ParsedPlaylist), FormatError> {
    let format = PlaylistFormat::from_path(path)?;
    let text = fs::read_to_string(path)?;
    let parsed = format.codec().parse(&text)?;
    Ok((format, parsed))
}

/// Serialize entries in `format` and write them to `path`.
pub fn write_playlist(
    path: &Path,
    format: PlaylistFormat,
    entries: &[GameEntry],
    meta: &PlaylistMeta,
) -> Result<(), FormatError> {
    let text = format.codec().export(entries, meta);
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, text)?;
    Ok(())
}
