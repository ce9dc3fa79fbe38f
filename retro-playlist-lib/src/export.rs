//! Preparing a list for export.

use retro_playlist_core::{GameEntry, PlaylistMeta, path};

/// Fill gaps before writing a 6-line playlist.
///
/// Entries without a ROM path get one in the first entry's ROM directory;
/// entries without a core path get the first entry's core. Other entries
/// are returned unchanged.
pub fn prepare_lpl_export(entries: &[GameEntry]) -> Vec<GameEntry> {
    let first = entries.first();
    let first_rom_dir = first
        .and_then(|e| set(&e.source_rom_path))
        .map(path::directory);
    let first_core = first.and_then(|e| set(&e.source_core_path));

    entries
        .iter()
        .map(|entry| {
            let mut entry = entry.clone();
            if set(&entry.source_rom_path).is_none() {
                if let Some(dir) = &first_rom_dir {
                    entry.source_rom_path = Some(format!("{dir}{}", entry.game_path));
                }
            }
            if set(&entry.source_core_path).is_none() {
                if let Some(core) = first_core {
                    entry.source_core_path = Some(core.to_string());
                }
            }
            entry
        })
        .collect()
}

fn set(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

/// Meta for an export: each explicit field wins, then the imported meta,
/// then the saved defaults.
pub fn resolve_export_meta(
    explicit: PlaylistMeta,
    imported: &PlaylistMeta,
    defaults: &PlaylistMeta,
) -> PlaylistMeta {
    explicit.or(imported).or(defaults)
}
