//! User settings (`~/.config/retro-playlist/settings.toml`).
//!
//! ```toml
//! [export]
//! rom_base_path = "/mnt/sdcard/roms/FC/"
//! core_path = "/mnt/sdcard/cores/fceumm_libretro.so"
//! db_name = "Nintendo - Nintendo Entertainment System.lpl"
//!
//! [thumbnails]
//! dir = "/mnt/sdcard/thumbs"
//! ```

use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use retro_playlist_core::PlaylistMeta;

/// Canonical path to the settings file: `~/.config/retro-playlist/settings.toml`.
pub fn settings_path() -> PathBuf {
    let config = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
    config.join("retro-playlist").join("settings.toml")
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Defaults for playlist-wide export fields
    pub export: PlaylistMeta,
    pub thumbnails: ThumbnailSettings,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThumbnailSettings {
    pub dir: Option<PathBuf>,
}

impl Settings {
    /// Load the settings file, falling back to defaults when it is missing
    /// or unreadable.
    pub fn load() -> Self {
        let path = settings_path();
        match Self::load_from(&path) {
            Ok(settings) => settings,
            Err(e) if e.kind() == io::ErrorKind::NotFound => Self::default(),
            Err(e) => {
                log::warn!("Ignoring {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    pub fn load_from(path: &Path) -> io::Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        toml::from_str(&contents).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
    }
}

/// Resolve the thumbnail folder using a priority chain:
///
/// 1. CLI override (if `Some`)
/// 2. Saved `thumbnails.dir` in `settings.toml`
pub fn resolve_thumbnail_dir(cli_override: Option<PathBuf>, settings: &Settings) -> Option<PathBuf> {
    cli_override.or_else(|| settings.thumbnails.dir.clone())
}

/// Save the export defaults into `path`. Blank fields are removed from the file.
pub fn save_export_defaults(path: &Path, meta: &PlaylistMeta) -> io::Result<()> {
    update_table(path, "export", |export| {
        for (key, value) in [
            ("rom_base_path", &meta.rom_base_path),
            ("core_path", &meta.core_path),
            ("db_name", &meta.db_name),
        ] {
            if value.is_empty() {
                export.remove(key);
            } else {
                export.insert(key.to_string(), toml::Value::String(value.clone()));
            }
        }
    })
}

/// Save (or clear) the default thumbnail folder in `path`.
pub fn save_thumbnail_dir(path: &Path, dir: Option<&Path>) -> io::Result<()> {
    update_table(path, "thumbnails", |thumbnails| match dir {
        Some(d) => {
            thumbnails.insert(
                "dir".to_string(),
                toml::Value::String(d.to_string_lossy().into_owned()),
            );
        }
        None => {
            thumbnails.remove("dir");
        }
    })
}

/// Edit one table of the settings file in place.
///
/// Uses `toml::Value` for a surgical update so unrelated tables survive.
fn update_table(
    path: &Path,
    name: &str,
    edit: impl FnOnce(&mut toml::map::Map<String, toml::Value>),
) -> io::Result<()> {
    let mut doc: toml::Value = match std::fs::read_to_string(path) {
        Ok(contents) => contents
            .parse::<toml::Value>()
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?,
        Err(e) if e.kind() == io::ErrorKind::NotFound => toml::Value::Table(Default::default()),
        Err(e) => return Err(e),
    };

    let table = doc
        .as_table_mut()
        .ok_or_else(|| io::Error::other("settings.toml root is not a table"))?;
    let section = table
        .entry(name)
        .or_insert_with(|| toml::Value::Table(Default::default()));
    let section = section
        .as_table_mut()
        .ok_or_else(|| io::Error::other(format!("[{name}] is not a table")))?;
    edit(section);

    // Write atomically
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let serialized = toml::to_string_pretty(&doc).map_err(io::Error::other)?;
    let tmp = path.with_extension("toml.tmp");
    std::fs::write(&tmp, &serialized)?;
    std::fs::rename(&tmp, path)?;

    Ok(())
}

/// Load the full settings file as a pretty-printed TOML string for display.
pub fn load_settings_string() -> Option<String> {
    let contents = std::fs::read_to_string(settings_path()).ok()?;
    let doc: toml::Value = contents.parse().ok()?;
    toml::to_string_pretty(&doc).ok()
}

#[cfg(test)]
#[path = "tests/settings_tests.rs"]
mod tests;
