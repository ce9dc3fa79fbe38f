use crate::entry::{GameEntry, PlaylistMeta};
use crate::path;

/// Derive playlist-wide defaults from a freshly parsed batch.
///
/// Only the first entry is consulted; later entries that disagree are left
/// to their own per-entry overrides. An empty batch yields empty defaults.
pub fn infer_meta(entries: &[GameEntry]) -> PlaylistMeta {
    let Some(first) = entries.first() else {
        return PlaylistMeta::default();
    };

    PlaylistMeta {
        rom_base_path: first
            .source_rom_path
            .as_deref()
            .map(path::rom_base_from)
            .unwrap_or_default(),
        core_path: first.source_core_path.clone().unwrap_or_default(),
        db_name: first.source_db_name.clone().unwrap_or_default(),
    }
}
