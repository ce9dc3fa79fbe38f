use serde::{Deserialize, Serialize};

use crate::error::EntryError;
use crate::path;
use crate::util;

/// Placeholder the 6-line playlist format uses for "let the frontend work it out".
pub const DETECT: &str = "DETECT";

/// One playlist row, shared by both on-disk formats.
///
/// The `source_*` fields only exist in the 6-line playlist format. They are
/// carried verbatim; `None` means "use the playlist-wide default at export
/// time", which is not the same as an empty string.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GameEntry {
    /// Display label shown in the device menu
    pub name: String,

    /// Bare ROM filename (never contains `/`)
    pub game_path: String,

    /// Full ROM path as read from (or destined for) a 6-line playlist
    pub source_rom_path: Option<String>,

    /// Emulator core path
    pub source_core_path: Option<String>,

    /// CRC32 field, usually `DETECT`
    pub source_crc32: Option<String>,

    /// Fifth playlist line; meaning unknown, usually `DETECT`
    pub source_unknown_field: Option<String>,

    /// Database (playlist) name
    pub source_db_name: Option<String>,
}

impl GameEntry {
    pub fn new(name: impl Into<String>, game_path: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            game_path: game_path.into(),
            ..Default::default()
        }
    }

    /// Build an entry from a full ROM path, keeping the path as the per-entry override.
    pub fn from_rom_path(name: impl Into<String>, rom_path: impl Into<String>) -> Self {
        let rom_path = rom_path.into();
        Self {
            name: name.into(),
            game_path: path::filename(&rom_path).to_string(),
            source_rom_path: Some(rom_path),
            ..Default::default()
        }
    }

    pub fn with_rom_path(mut self, rom_path: impl Into<String>) -> Self {
        self.source_rom_path = Some(rom_path.into());
        self
    }

    pub fn with_core_path(mut self, core_path: impl Into<String>) -> Self {
        self.source_core_path = Some(core_path.into());
        self
    }

    pub fn with_crc32(mut self, crc32: impl Into<String>) -> Self {
        self.source_crc32 = Some(crc32.into());
        self
    }

    pub fn with_unknown_field(mut self, value: impl Into<String>) -> Self {
        self.source_unknown_field = Some(value.into());
        self
    }

    pub fn with_db_name(mut self, db_name: impl Into<String>) -> Self {
        self.source_db_name = Some(db_name.into());
        self
    }

    /// ROM filename without its extension.
    pub fn rom_stem(&self) -> &str {
        util::strip_extension(&self.game_path)
    }

    /// Check the fields an entry needs before it can be committed to a list.
    pub fn validate(&self) -> Result<(), EntryError> {
        if self.name.trim().is_empty() {
            return Err(EntryError::EmptyName);
        }
        if self.game_path.trim().is_empty() {
            return Err(EntryError::EmptyGamePath);
        }
        if self.game_path.contains('/') {
            return Err(EntryError::game_path_has_separator(&self.game_path));
        }
        Ok(())
    }

    /// True when the stored ROM path no longer ends in `game_path`.
    ///
    /// Tolerated, but worth reporting before an export.
    pub fn has_stale_rom_path(&self) -> bool {
        match self.source_rom_path.as_deref() {
            Some(rom_path) if !rom_path.is_empty() => path::filename(rom_path) != self.game_path,
            _ => false,
        }
    }
}

/// Playlist-wide defaults applied to entries without their own override.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlaylistMeta {
    /// System directory holding the ROMs (e.g. `/mnt/sdcard/roms/FC/`)
    pub rom_base_path: String,
    /// Emulator core path
    pub core_path: String,
    /// Database (playlist) name
    pub db_name: String,
}

impl PlaylistMeta {
    pub fn new(
        rom_base_path: impl Into<String>,
        core_path: impl Into<String>,
        db_name: impl Into<String>,
    ) -> Self {
        Self {
            rom_base_path: rom_base_path.into(),
            core_path: core_path.into(),
            db_name: db_name.into(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.rom_base_path.is_empty() && self.core_path.is_empty() && self.db_name.is_empty()
    }

    /// Fill every empty field from `fallback`, keeping the fields already set.
    pub fn or(mut self, fallback: &PlaylistMeta) -> Self {
        if self.rom_base_path.is_empty() {
            self.rom_base_path = fallback.rom_base_path.clone();
        }
        if self.core_path.is_empty() {
            self.core_path = fallback.core_path.clone();
        }
        if self.db_name.is_empty() {
            self.db_name = fallback.db_name.clone();
        }
        self
    }
}
