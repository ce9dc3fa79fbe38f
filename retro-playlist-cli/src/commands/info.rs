use std::path::{Path, PathBuf};

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use retro_playlist_formats::icon_xml::page_count;
use retro_playlist_lib::ThumbnailIndex;

use crate::CliError;
use crate::commands::{format_entry, load_list};

/// Print a list's shared fields and entries.
pub(crate) fn run_info(file: &Path, thumbs: Option<PathBuf>) -> Result<(), CliError> {
    let list = load_list(file)?;
    let index = thumbs.as_deref().map(ThumbnailIndex::load).transpose()?;

    log::info!(
        "{} {}",
        list.path.display().if_supports_color(Stdout, |t| t.bold()),
        format!("({})", list.format).if_supports_color(Stdout, |t| t.dimmed()),
    );
    log::info!(
        "  Entries:   {} ({} icon pages)",
        list.entries.len(),
        page_count(list.entries.len())
    );

    for (label, value) in [
        ("ROM base", &list.meta.rom_base_path),
        ("Core", &list.meta.core_path),
        ("Database", &list.meta.db_name),
    ] {
        if value.is_empty() {
            log::info!(
                "  {:<10} {}",
                format!("{label}:"),
                "not set".if_supports_color(Stdout, |t| t.dimmed())
            );
        } else {
            log::info!(
                "  {:<10} {}",
                format!("{label}:"),
                value.if_supports_color(Stdout, |t| t.cyan())
            );
        }
    }
    crate::log_blank();

    let mut without_thumb = 0usize;
    for (i, entry) in list.entries.iter().enumerate() {
        let line = format_entry(i + 1, entry);
        match &index {
            Some(index) if index.resolve(entry).is_none() => {
                without_thumb += 1;
                log::info!(
                    "{}  {}",
                    line,
                    "(no thumbnail)".if_supports_color(Stdout, |t| t.yellow())
                );
            }
            _ => log::info!("{line}"),
        }
        if entry.has_stale_rom_path() {
            log::warn!(
                "      ROM path {} does not match {}",
                entry.source_rom_path.as_deref().unwrap_or_default(),
                entry.game_path
            );
        }
    }

    if let Some(index) = &index {
        crate::log_blank();
        log::info!(
            "{} of {} entries have a thumbnail in {}",
            list.entries.len() - without_thumb,
            list.entries.len(),
            index.dir().display()
        );
    }
    Ok(())
}
