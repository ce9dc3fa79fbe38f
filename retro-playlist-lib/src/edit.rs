//! In-memory list editing: add, remove, reorder, sort, edit and rename.

use std::cmp::Ordering;
use std::collections::{BTreeSet, HashMap};

use retro_playlist_core::util::natural_cmp;
use retro_playlist_core::{GameEntry, path};

use crate::error::EditError;

/// ROM filename given to a freshly added entry.
pub const NEW_ENTRY_GAME_PATH: &str = "game.zip";

/// Append a placeholder entry and return its index.
///
/// The placeholder is named `"<n>.새 게임"` ("new game"), where `n` is the
/// new list length, matching how device lists number their entries.
pub fn add_entry(entries: &mut Vec<GameEntry>) -> usize {
    let n = entries.len() + 1;
    entries.push(GameEntry::new(format!("{n}.새 게임"), NEW_ENTRY_GAME_PATH));
    entries.len() - 1
}

/// Remove every selected index. Out-of-range indices are ignored.
///
/// Returns the number of entries removed.
pub fn remove_entries(entries: &mut Vec<GameEntry>, selection: &BTreeSet<usize>) -> usize {
    let before = entries.len();
    let mut i = 0;
    entries.retain(|_| {
        let keep = !selection.contains(&i);
        i += 1;
        keep
    });
    before - entries.len()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
}

/// Move the selected entries one step in `direction`.
///
/// Returns the new selection, or `None` (and leaves the list alone) when the
/// selection is empty, out of range, or already touches the boundary.
pub fn move_entries(
    entries: &mut [GameEntry],
    selection: &BTreeSet<usize>,
    direction: Direction,
) -> Option<BTreeSet<usize>> {
    let (&first, &last) = (selection.first()?, selection.last()?);
    if last >= entries.len() {
        return None;
    }

    match direction {
        Direction::Up => {
            if first == 0 {
                return None;
            }
            for &i in selection {
                entries.swap(i - 1, i);
            }
            Some(selection.iter().map(|i| i - 1).collect())
        }
        Direction::Down => {
            if last + 1 >= entries.len() {
                return None;
            }
            for &i in selection.iter().rev() {
                entries.swap(i, i + 1);
            }
            Some(selection.iter().map(|i| i + 1).collect())
        }
    }
}

/// Sort by display name: digits first, then Latin letters, then Hangul
/// syllables, then everything else; natural order within a group.
pub fn sort_by_name(entries: &mut [GameEntry]) {
    entries.sort_by(|a, b| compare_names(&a.name, &b.name));
}

fn compare_names(a: &str, b: &str) -> Ordering {
    let (a, b) = (a.trim(), b.trim());
    char_group(a)
        .cmp(&char_group(b))
        .then_with(|| natural_cmp(a, b))
}

fn char_group(name: &str) -> u8 {
    match name.chars().next() {
        Some(c) if c.is_ascii_digit() => 0,
        Some(c) if c.is_ascii_alphabetic() => 1,
        Some('가'..='힣') => 2,
        _ => 3,
    }
}

/// Form values for editing one entry.
///
/// Blank `core_path` and `db_name` clear the matching per-entry field;
/// non-blank values set it. `rom_base_path` works the same way when given.
/// Left at `None`, the entry keeps its ROM path, with only the filename
/// swapped when `game_path` changes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EntryEdit {
    pub name: String,
    pub game_path: String,
    pub rom_base_path: Option<String>,
    pub core_path: String,
    pub db_name: String,
}

impl EntryEdit {
    /// Pre-fill the form from an existing entry.
    pub fn from_entry(entry: &GameEntry) -> Self {
        Self {
            name: entry.name.clone(),
            game_path: entry.game_path.clone(),
            rom_base_path: None,
            core_path: entry.source_core_path.clone().unwrap_or_default(),
            db_name: entry.source_db_name.clone().unwrap_or_default(),
        }
    }
}

/// Apply `edit` to the entry at `index`.
///
/// The entry is only replaced when the edited version validates. CRC and
/// the fifth playlist field are kept as-is.
pub fn apply_edit(
    entries: &mut [GameEntry],
    index: usize,
    edit: &EntryEdit,
) -> Result<(), EditError> {
    let len = entries.len();
    let current = entries
        .get(index)
        .ok_or(EditError::IndexOutOfRange { index, len })?;

    let game_path = edit.game_path.trim();
    let source_rom_path = match edit.rom_base_path.as_deref().map(str::trim) {
        Some("") => None,
        Some(base) => Some(path::join(base, game_path)),
        None if game_path == current.game_path => current.source_rom_path.clone(),
        None => current
            .source_rom_path
            .as_deref()
            .map(|rom_path| with_filename(rom_path, game_path)),
    };
    let updated = GameEntry {
        name: edit.name.trim().to_string(),
        game_path: game_path.to_string(),
        source_rom_path,
        source_core_path: non_blank(&edit.core_path),
        source_db_name: non_blank(&edit.db_name),
        ..current.clone()
    };
    updated.validate()?;

    entries[index] = updated;
    Ok(())
}

/// Swap the last segment of `rom_path`. Relative paths stay relative.
fn with_filename(rom_path: &str, file: &str) -> String {
    match rom_path.rfind('/') {
        Some(idx) => format!("{}{file}", &rom_path[..=idx]),
        None if rom_path.is_empty() => String::new(),
        None => file.to_string(),
    }
}

fn non_blank(value: &str) -> Option<String> {
    let value = value.trim();
    (!value.is_empty()).then(|| value.to_string())
}

/// Rename entries of `target` whose ROM stem appears in `source`.
///
/// Stems are compared case-insensitively. Returns the number of renamed
/// entries.
pub fn fill_names_from(target: &mut [GameEntry], source: &[GameEntry]) -> usize {
    let names: HashMap<String, &str> = source
        .iter()
        .map(|entry| (entry.rom_stem().to_lowercase(), entry.name.as_str()))
        .collect();

    let mut matched = 0;
    for entry in target.iter_mut() {
        if let Some(name) = names.get(&entry.rom_stem().to_lowercase()) {
            entry.name = name.to_string();
            matched += 1;
        }
    }
    matched
}

#[cfg(test)]
#[path = "tests/edit_tests.rs"]
mod tests;
