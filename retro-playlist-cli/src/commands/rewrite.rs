use std::path::Path;

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use retro_playlist_formats::lpl::rom_path_for;
use retro_playlist_lib::{BatchRewrite, apply_batch_rewrite};

use crate::CliError;
use crate::cli_types::{MetaArgs, OutputArgs};
use crate::commands::{format_entry, load_list, resolve_output, save_list};

/// Run the rewrite command.
pub(crate) fn run_rewrite(
    input: &Path,
    output: &OutputArgs,
    meta_args: &MetaArgs,
    ext: Option<String>,
    dry_run: bool,
) -> Result<(), CliError> {
    let mut list = load_list(input)?;

    let rewrite = BatchRewrite {
        rom_base_path: meta_args.rom_base.clone(),
        core_path: meta_args.core_path.clone(),
        db_name: meta_args.db_name.clone(),
        extension: ext,
    };
    let summary = apply_batch_rewrite(&mut list.entries, &rewrite)?;
    rewrite.apply_to_meta(&mut list.meta);

    log::info!(
        "Updated {} for {} entries",
        summary.changed_fields().if_supports_color(Stdout, |t| t.cyan()),
        summary.entries,
    );

    if dry_run {
        log::info!(
            "{}",
            "Dry run: nothing written".if_supports_color(Stdout, |t| t.dimmed()),
        );
        for (i, entry) in list.entries.iter().enumerate() {
            log::info!("{}", format_entry(i + 1, entry));
            log::info!(
                "        {}",
                rom_path_for(entry, &list.meta).if_supports_color(Stdout, |t| t.dimmed())
            );
        }
        return Ok(());
    }

    let (path, format) = resolve_output(output, list.path.clone(), list.format);
    save_list(&path, format, &list.entries, &list.meta)
}
