use std::path::Path;

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use retro_playlist_core::PlaylistMeta;
use retro_playlist_formats::PlaylistFormat;
use retro_playlist_lib::{Settings, resolve_export_meta, scan_rom_folder};

use crate::CliError;
use crate::cli_types::{MetaArgs, OutputArgs};
use crate::commands::{resolve_output, save_list};

/// Build a list from a ROM folder.
///
/// Writes a 6-line playlist named after the folder unless told otherwise.
pub(crate) fn run_scan(
    folder: &Path,
    output: &OutputArgs,
    meta_args: &MetaArgs,
) -> Result<(), CliError> {
    log::info!(
        "Scanning ROMs in: {}",
        folder.display().if_supports_color(Stdout, |t| t.cyan()),
    );
    let scan = scan_rom_folder(folder)?;
    log::info!("Found {} ROM files", scan.entries.len());

    let target = output.to.unwrap_or(PlaylistFormat::Lpl);
    let default_name = match target {
        PlaylistFormat::Lpl => scan.suggested_db_name.clone(),
        PlaylistFormat::IconXml => target.default_file_name().to_string(),
    };
    let (path, format) = resolve_output(output, folder.join(default_name), target);

    let derived = PlaylistMeta::new("", "", scan.suggested_db_name.as_str());
    let settings = Settings::load();
    let meta = resolve_export_meta(meta_args.to_meta(), &derived, &settings.export);

    save_list(&path, format, &scan.entries, &meta)
}
