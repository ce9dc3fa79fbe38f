//! Batch rewrite of ROM paths, extensions, cores and database names.

use retro_playlist_core::util::{normalize_extension, replace_extension};
use retro_playlist_core::{GameEntry, PlaylistMeta, path};

use crate::error::RewriteError;

/// Fields to apply to every entry of a list. Blank values count as absent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BatchRewrite {
    /// New system directory (e.g. `/mnt/sdcard/roms/FC/`)
    pub rom_base_path: Option<String>,
    pub core_path: Option<String>,
    pub db_name: Option<String>,
    /// New ROM extension, with or without the leading dot
    pub extension: Option<String>,
}

impl BatchRewrite {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn rom_base_path(mut self, value: impl Into<String>) -> Self {
        self.rom_base_path = Some(value.into());
        self
    }

    pub fn core_path(mut self, value: impl Into<String>) -> Self {
        self.core_path = Some(value.into());
        self
    }

    pub fn db_name(mut self, value: impl Into<String>) -> Self {
        self.db_name = Some(value.into());
        self
    }

    pub fn extension(mut self, value: impl Into<String>) -> Self {
        self.extension = Some(value.into());
        self
    }

    /// True when no field carries a usable value.
    pub fn is_empty(&self) -> bool {
        self.base().is_none()
            && self.core().is_none()
            && self.db().is_none()
            && self.normalized_extension().is_none()
    }

    /// Copy the supplied playlist-wide fields into `meta`, so a later export
    /// uses the same defaults as the rewritten entries.
    pub fn apply_to_meta(&self, meta: &mut PlaylistMeta) {
        if let Some(base) = self.base() {
            meta.rom_base_path = base.to_string();
        }
        if let Some(core) = self.core() {
            meta.core_path = core.to_string();
        }
        if let Some(db) = self.db() {
            meta.db_name = db.to_string();
        }
    }

    fn base(&self) -> Option<&str> {
        non_blank(&self.rom_base_path)
    }

    fn core(&self) -> Option<&str> {
        non_blank(&self.core_path)
    }

    fn db(&self) -> Option<&str> {
        non_blank(&self.db_name)
    }

    fn normalized_extension(&self) -> Option<String> {
        self.extension.as_deref().and_then(normalize_extension)
    }
}

fn non_blank(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}

/// What a batch rewrite changed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RewriteSummary {
    pub entries: usize,
    pub rom_base_path: bool,
    /// Normalized extension (with dot), when one was applied
    pub extension: Option<String>,
    pub core_path: bool,
    pub db_name: bool,
}

impl RewriteSummary {
    /// Human-readable list of the changed fields, e.g. `ROM path, extension (.zip)`.
    pub fn changed_fields(&self) -> String {
        let mut parts = Vec::new();
        if self.rom_base_path {
            parts.push("ROM path".to_string());
        }
        if let Some(ext) = &self.extension {
            parts.push(format!("extension ({ext})"));
        }
        if self.core_path {
            parts.push("core path".to_string());
        }
        if self.db_name {
            parts.push("database name".to_string());
        }
        parts.join(", ")
    }
}

/// Apply `rewrite` to every entry.
///
/// Fails without touching `entries` when nothing would change. A ROM that
/// lives in a sub-directory of its system folder keeps that sub-directory
/// under the new base path.
pub fn apply_batch_rewrite(
    entries: &mut [GameEntry],
    rewrite: &BatchRewrite,
) -> Result<RewriteSummary, RewriteError> {
    if rewrite.is_empty() {
        return Err(RewriteError::NothingToChange);
    }
    if entries.is_empty() {
        return Err(RewriteError::EmptyList);
    }

    let base = rewrite.base();
    let extension = rewrite.normalized_extension();
    let core = rewrite.core();
    let db = rewrite.db();

    for entry in entries.iter_mut() {
        let current = entry.source_rom_path.clone().unwrap_or_default();
        let mut file_name = if entry.game_path.is_empty() {
            path::filename(&current).to_string()
        } else {
            entry.game_path.clone()
        };

        if let Some(ext) = &extension {
            file_name = replace_extension(&file_name, ext);
            entry.game_path = file_name.clone();
        }

        if let Some(base) = base {
            let sub_dir = path::sub_dir_under_system(&current);
            entry.source_rom_path = Some(path::join(base, &format!("{sub_dir}{file_name}")));
        } else if extension.is_some() && !current.is_empty() {
            entry.source_rom_path = Some(format!("{}{file_name}", path::directory(&current)));
        }

        if let Some(core) = core {
            entry.source_core_path = Some(core.to_string());
        }
        if let Some(db) = db {
            entry.source_db_name = Some(db.to_string());
        }
    }

    log::debug!("Rewrote {} entries", entries.len());

    Ok(RewriteSummary {
        entries: entries.len(),
        rom_base_path: base.is_some(),
        extension,
        core_path: core.is_some(),
        db_name: db.is_some(),
    })
}

#[cfg(test)]
#[path = "tests/rewrite_tests.rs"]
mod tests;
