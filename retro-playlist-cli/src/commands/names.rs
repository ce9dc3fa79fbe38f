use std::path::Path;

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use retro_playlist_lib::edit::fill_names_from;

use crate::CliError;
use crate::cli_types::OutputArgs;
use crate::commands::{load_list, resolve_output, save_list};

/// Copy display names from `source` into `target` where the ROM stems match.
pub(crate) fn run_names(target: &Path, source: &Path, output: &OutputArgs) -> Result<(), CliError> {
    let mut list = load_list(target)?;
    let names = load_list(source)?;

    let matched = fill_names_from(&mut list.entries, &names.entries);
    if matched == 0 {
        log::warn!(
            "{} No ROM filenames matched between the two lists",
            "\u{26A0}".if_supports_color(Stdout, |t| t.yellow()),
        );
        return Ok(());
    }
    log::info!(
        "Matched {} of {} entries",
        matched.if_supports_color(Stdout, |t| t.bold()),
        list.entries.len()
    );

    let (path, format) = resolve_output(output, list.path.clone(), list.format);
    save_list(&path, format, &list.entries, &list.meta)
}
