use std::path::Path;

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use retro_playlist_lib::edit::{
    Direction, EntryEdit, add_entry, apply_edit, move_entries, remove_entries,
};

use crate::CliError;
use crate::cli_types::OutputArgs;
use crate::commands::{
    LoadedList, format_entry, load_list, parse_positions, position_to_index, resolve_output,
    save_list,
};

/// Fields given to `edit set`; `None` keeps the current value.
pub(crate) struct SetFields {
    pub name: Option<String>,
    pub game_path: Option<String>,
    pub rom_base: Option<String>,
    pub core_path: Option<String>,
    pub db_name: Option<String>,
}

pub(crate) fn run_edit_add(
    file: &Path,
    output: &OutputArgs,
    name: Option<String>,
    game_path: Option<String>,
) -> Result<(), CliError> {
    let mut list = load_list(file)?;
    let index = add_entry(&mut list.entries);

    if name.is_some() || game_path.is_some() {
        let mut edit = EntryEdit::from_entry(&list.entries[index]);
        if let Some(name) = name {
            edit.name = name;
        }
        if let Some(game_path) = game_path {
            edit.game_path = game_path;
        }
        apply_edit(&mut list.entries, index, &edit)?;
    }

    log::info!("Added {}", format_entry(index + 1, &list.entries[index]));
    write_back(&list, output)
}

pub(crate) fn run_edit_remove(
    file: &Path,
    output: &OutputArgs,
    positions: &[usize],
) -> Result<(), CliError> {
    let mut list = load_list(file)?;
    let selection = parse_positions(positions, list.entries.len())?;

    for &i in &selection {
        log::info!(
            "{} {}",
            "-".if_supports_color(Stdout, |t| t.red()),
            format_entry(i + 1, &list.entries[i])
        );
    }
    let removed = remove_entries(&mut list.entries, &selection);
    log::info!("Removed {removed} entries");

    write_back(&list, output)
}

pub(crate) fn run_edit_move(
    file: &Path,
    output: &OutputArgs,
    positions: &[usize],
    down: bool,
) -> Result<(), CliError> {
    let mut list = load_list(file)?;
    let selection = parse_positions(positions, list.entries.len())?;
    let direction = if down { Direction::Down } else { Direction::Up };

    let Some(moved) = move_entries(&mut list.entries, &selection, direction) else {
        log::warn!(
            "{} Selection is already at the {} of the list; nothing moved",
            "\u{26A0}".if_supports_color(Stdout, |t| t.yellow()),
            if down { "end" } else { "start" },
        );
        return Ok(());
    };

    let now_at: Vec<String> = moved.iter().map(|i| (i + 1).to_string()).collect();
    log::info!("Moved to positions {}", now_at.join(","));
    write_back(&list, output)
}

pub(crate) fn run_edit_set(
    file: &Path,
    output: &OutputArgs,
    position: usize,
    fields: SetFields,
) -> Result<(), CliError> {
    let mut list = load_list(file)?;
    let index = position_to_index(position, list.entries.len())?;

    let mut edit = EntryEdit::from_entry(&list.entries[index]);
    let renamed_rom = fields.game_path.is_some();
    if let Some(name) = fields.name {
        edit.name = name;
    }
    if let Some(game_path) = fields.game_path {
        edit.game_path = game_path;
    }
    if let Some(rom_base) = fields.rom_base {
        edit.rom_base_path = Some(rom_base);
    }
    if let Some(core_path) = fields.core_path {
        edit.core_path = core_path;
    }
    if let Some(db_name) = fields.db_name {
        edit.db_name = db_name;
    }

    apply_edit(&mut list.entries, index, &edit)?;

    let entry = &list.entries[index];
    log::info!("Updated {}", format_entry(position, entry));
    if renamed_rom {
        if let Some(rom_path) = &entry.source_rom_path {
            log::info!(
                "      ROM path: {}",
                rom_path.if_supports_color(Stdout, |t| t.dimmed())
            );
        }
    }
    write_back(&list, output)
}

fn write_back(list: &LoadedList, output: &OutputArgs) -> Result<(), CliError> {
    let (path, format) = resolve_output(output, list.path.clone(), list.format);
    save_list(&path, format, &list.entries, &list.meta)
}
