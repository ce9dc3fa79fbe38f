use std::path::Path;

use retro_playlist_formats::PlaylistFormat;
use retro_playlist_lib::{Settings, resolve_export_meta};

use crate::CliError;
use crate::cli_types::{MetaArgs, OutputArgs};
use crate::commands::{load_list, resolve_output, save_list};

/// Convert a list to the other format (or re-export it in the same one).
pub(crate) fn run_convert(
    input: &Path,
    output: &OutputArgs,
    meta_args: &MetaArgs,
) -> Result<(), CliError> {
    let list = load_list(input)?;

    let target = output.to.unwrap_or(match list.format {
        PlaylistFormat::IconXml => PlaylistFormat::Lpl,
        PlaylistFormat::Lpl => PlaylistFormat::IconXml,
    });
    let default_path = input.with_file_name(target.default_file_name());
    let (path, format) = resolve_output(output, default_path, target);

    let settings = Settings::load();
    let meta = resolve_export_meta(meta_args.to_meta(), &list.meta, &settings.export);
    let first_has_rom_path = list
        .entries
        .first()
        .and_then(|e| e.source_rom_path.as_deref())
        .is_some_and(|p| !p.is_empty());
    if format == PlaylistFormat::Lpl && meta.rom_base_path.is_empty() && !first_has_rom_path {
        log::warn!("No ROM base path known; entries without one are written as bare filenames");
    }

    log::info!(
        "Converting {} entries: {} -> {}",
        list.entries.len(),
        list.format,
        format
    );
    save_list(&path, format, &list.entries, &meta)
}
