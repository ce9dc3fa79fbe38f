//! 6-line text playlist (`.lpl`).
//!
//! Each entry is exactly six lines:
//!
//! 1. full ROM path (`/sdcard/.../roms/FC/Mario.nes`)
//! 2. display label
//! 3. core path (`/sdcard/.../cores/fceumm_libretro.so`)
//! 4. CRC32, usually `DETECT`
//! 5. unknown, usually `DETECT`
//! 6. database name (`Nintendo - Nintendo Entertainment System.lpl`)

use retro_playlist_core::{DETECT, GameEntry, PlaylistMeta, infer_meta, path};

use crate::error::FormatError;
use crate::repair::strip_bom;
use crate::{ParseWarning, ParsedPlaylist, PlaylistCodec};

pub const LINES_PER_ENTRY: usize = 6;

/// Codec for the 6-line playlist format.
pub struct LplCodec;

impl PlaylistCodec for LplCodec {
    fn name(&self) -> &'static str {
        "6-line playlist"
    }

    fn parse(&self, text: &str) -> Result<ParsedPlaylist, FormatError> {
        Ok(parse_lpl(text))
    }

    fn export(&self, entries: &[GameEntry], meta: &PlaylistMeta) -> String {
        export_lpl(entries, meta)
    }
}

/// Parse a 6-line playlist.
///
/// Never fails: a trailing partial entry is dropped and reported as a
/// [`ParseWarning::TruncatedEntry`] instead.
pub fn parse_lpl(text: &str) -> ParsedPlaylist {
    let mut lines: Vec<&str> = strip_bom(text)
        .split('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line))
        .collect();
    // The final newline leaves one empty element behind.
    if lines.last() == Some(&"") {
        lines.pop();
    }
    // An empty line 6 is a real (blank) database name, so extra blank lines
    // are only trimmed while they break the 6-line rhythm.
    while lines.len() % LINES_PER_ENTRY != 0
        && lines.last().is_some_and(|line| line.trim().is_empty())
    {
        lines.pop();
    }

    let mut warnings = Vec::new();
    let dropped_lines = lines.len() % LINES_PER_ENTRY;
    if dropped_lines != 0 {
        let warning = ParseWarning::TruncatedEntry {
            line_count: lines.len(),
            dropped_lines,
        };
        log::warn!("{warning}");
        warnings.push(warning);
    }

    let entries: Vec<GameEntry> = lines
        .chunks_exact(LINES_PER_ENTRY)
        .map(parse_entry)
        .collect();
    let meta = infer_meta(&entries);

    ParsedPlaylist {
        entries,
        meta,
        warnings,
    }
}

fn parse_entry(lines: &[&str]) -> GameEntry {
    let rom_path = lines[0];
    GameEntry {
        name: lines[1].to_string(),
        game_path: path::filename(rom_path).to_string(),
        source_rom_path: Some(rom_path.to_string()),
        source_core_path: Some(lines[2].to_string()),
        source_crc32: Some(or_detect(lines[3]).to_string()),
        source_unknown_field: Some(or_detect(lines[4]).to_string()),
        source_db_name: Some(lines[5].to_string()),
    }
}

fn or_detect(value: &str) -> &str {
    if value.is_empty() { DETECT } else { value }
}

/// Serialize entries as a 6-line playlist.
///
/// Per-entry overrides win; otherwise `meta` supplies the ROM directory,
/// core path and database name. Output ends with exactly one newline.
pub fn export_lpl(entries: &[GameEntry], meta: &PlaylistMeta) -> String {
    let blocks: Vec<String> = entries
        .iter()
        .map(|entry| {
            [
                rom_path_for(entry, meta),
                entry.name.clone(),
                first_set(&[entry.source_core_path.as_deref(), Some(meta.core_path.as_str())])
                    .unwrap_or(DETECT)
                    .to_string(),
                first_set(&[entry.source_crc32.as_deref()])
                    .unwrap_or(DETECT)
                    .to_string(),
                first_set(&[entry.source_unknown_field.as_deref()])
                    .unwrap_or(DETECT)
                    .to_string(),
                first_set(&[entry.source_db_name.as_deref(), Some(meta.db_name.as_str())])
                    .unwrap_or_default()
                    .to_string(),
            ]
            .join("\n")
        })
        .collect();

    let mut out = blocks.join("\n");
    out.push('\n');
    out
}

/// Line 1 for an entry: its own ROM path, else the meta base path joined
/// with the filename, else the bare filename.
pub fn rom_path_for(entry: &GameEntry, meta: &PlaylistMeta) -> String {
    if let Some(rom_path) = entry.source_rom_path.as_deref().filter(|p| !p.is_empty()) {
        return rom_path.to_string();
    }
    if meta.rom_base_path.is_empty() {
        entry.game_path.clone()
    } else {
        path::join(&meta.rom_base_path, &entry.game_path)
    }
}

/// First candidate that is present and non-empty.
fn first_set<'a>(candidates: &[Option<&'a str>]) -> Option<&'a str> {
    candidates
        .iter()
        .flatten()
        .copied()
        .find(|value| !value.is_empty())
}

#[cfg(test)]
#[path = "tests/lpl_tests.rs"]
mod tests;
