pub(crate) mod config;
pub(crate) mod convert;
pub(crate) mod edit;
pub(crate) mod info;
pub(crate) mod names;
pub(crate) mod rewrite;
pub(crate) mod scan;
pub(crate) mod sort;
pub(crate) mod thumbs;

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use retro_playlist_core::{GameEntry, PlaylistMeta};
use retro_playlist_formats::{ParsedPlaylist, PlaylistFormat, read_playlist, write_playlist};
use retro_playlist_lib::prepare_lpl_export;

use crate::CliError;
use crate::cli_types::OutputArgs;

/// A list file loaded from disk.
pub(crate) struct LoadedList {
    pub path: PathBuf,
    pub format: PlaylistFormat,
    pub entries: Vec<GameEntry>,
    pub meta: PlaylistMeta,
}

/// Read a list file, reporting parse warnings.
pub(crate) fn load_list(path: &Path) -> Result<LoadedList, CliError> {
    let (format, parsed) = read_playlist(path)?;
    let ParsedPlaylist {
        entries,
        meta,
        warnings,
    } = parsed;

    for warning in &warnings {
        log::warn!(
            "{} {}: {}",
            "\u{26A0}".if_supports_color(Stdout, |t| t.yellow()),
            path.display(),
            warning,
        );
    }
    log::debug!(
        "Loaded {} entries from {} ({})",
        entries.len(),
        path.display(),
        format
    );

    Ok(LoadedList {
        path: path.to_path_buf(),
        format,
        entries,
        meta,
    })
}

/// Resolve the output path and format.
///
/// `default_path` is used when no `--output` is given; the format comes
/// from `--to`, then the output extension, then `fallback`.
pub(crate) fn resolve_output(
    output: &OutputArgs,
    default_path: PathBuf,
    fallback: PlaylistFormat,
) -> (PathBuf, PlaylistFormat) {
    let path = output.output.clone().unwrap_or(default_path);
    let format = output
        .to
        .or_else(|| PlaylistFormat::from_path(&path).ok())
        .unwrap_or(fallback);
    (path, format)
}

/// Write a list, filling playlist gaps first when the target is a 6-line playlist.
pub(crate) fn save_list(
    path: &Path,
    format: PlaylistFormat,
    entries: &[GameEntry],
    meta: &PlaylistMeta,
) -> Result<(), CliError> {
    match format {
        PlaylistFormat::Lpl => {
            let prepared = prepare_lpl_export(entries);
            for entry in prepared.iter().filter(|e| e.has_stale_rom_path()) {
                log::warn!(
                    "{} \"{}\": ROM path does not end in {}",
                    "\u{26A0}".if_supports_color(Stdout, |t| t.yellow()),
                    entry.name,
                    entry.game_path,
                );
            }
            write_playlist(path, format, &prepared, meta)?;
        }
        PlaylistFormat::IconXml => write_playlist(path, format, entries, meta)?,
    }

    log::info!(
        "{} Wrote {} entries to {} ({})",
        "\u{2714}".if_supports_color(Stdout, |t| t.green()),
        entries.len(),
        path.display().if_supports_color(Stdout, |t| t.cyan()),
        format,
    );
    Ok(())
}

/// Convert 1-based positions to indices, rejecting anything outside the list.
pub(crate) fn parse_positions(positions: &[usize], len: usize) -> Result<BTreeSet<usize>, CliError> {
    positions
        .iter()
        .map(|&p| position_to_index(p, len))
        .collect()
}

pub(crate) fn position_to_index(position: usize, len: usize) -> Result<usize, CliError> {
    if position == 0 || position > len {
        return Err(CliError::usage(format!(
            "Position {position} is out of range (list has {len} entries)"
        )));
    }
    Ok(position - 1)
}

/// One-line summary of an entry for listings.
pub(crate) fn format_entry(position: usize, entry: &GameEntry) -> String {
    format!(
        "{:>4}  {}  {}",
        position,
        entry.name,
        entry.game_path.if_supports_color(Stdout, |t| t.dimmed()),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn positions_are_one_based() {
        let set = parse_positions(&[1, 3, 3], 3).unwrap();
        assert_eq!(set.into_iter().collect::<Vec<_>>(), vec![0, 2]);
        assert!(parse_positions(&[0], 3).is_err());
        assert!(parse_positions(&[4], 3).is_err());
    }

    #[test]
    fn output_format_resolution() {
        let args = OutputArgs::default();
        let (path, format) = resolve_output(&args, PathBuf::from("in.xml"), PlaylistFormat::Lpl);
        assert_eq!(path, PathBuf::from("in.xml"));
        assert_eq!(format, PlaylistFormat::IconXml);

        let args = OutputArgs {
            output: Some(PathBuf::from("out.txt")),
            to: None,
        };
        let (_, format) = resolve_output(&args, PathBuf::new(), PlaylistFormat::Lpl);
        assert_eq!(format, PlaylistFormat::Lpl);

        let args = OutputArgs {
            output: Some(PathBuf::from("out.xml")),
            to: Some(PlaylistFormat::Lpl),
        };
        let (_, format) = resolve_output(&args, PathBuf::new(), PlaylistFormat::IconXml);
        assert_eq!(format, PlaylistFormat::Lpl);
    }
}
