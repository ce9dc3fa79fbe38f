use std::path::PathBuf;

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use retro_playlist_lib::Settings;
use retro_playlist_lib::settings::{
    load_settings_string, save_export_defaults, save_thumbnail_dir, settings_path,
};

use crate::CliError;
use crate::cli_types::MetaArgs;

/// Show the settings file and its location.
pub(crate) fn run_config_show() -> Result<(), CliError> {
    let path = settings_path();

    log::info!(
        "{}",
        "retro-playlist Settings".if_supports_color(Stdout, |t| t.bold()),
    );
    crate::log_blank();

    if path.exists() {
        log::info!(
            "  Settings file: {} {}",
            path.display().if_supports_color(Stdout, |t| t.cyan()),
            "(exists)".if_supports_color(Stdout, |t| t.green()),
        );
    } else {
        log::info!(
            "  Settings file: {} {}",
            path.display().if_supports_color(Stdout, |t| t.cyan()),
            "(not found)".if_supports_color(Stdout, |t| t.dimmed()),
        );
        return Ok(());
    }
    crate::log_blank();

    match load_settings_string() {
        Some(contents) => {
            for line in contents.lines() {
                log::info!("  {line}");
            }
        }
        None => log::warn!(
            "  {}",
            "Settings file could not be parsed; defaults are in use"
                .if_supports_color(Stdout, |t| t.yellow()),
        ),
    }
    Ok(())
}

/// Print the settings file path.
pub(crate) fn run_config_path() -> Result<(), CliError> {
    log::info!("{}", settings_path().display());
    Ok(())
}

/// Save export defaults and the thumbnail folder. Omitted flags keep their saved value.
pub(crate) fn run_config_set(
    meta_args: &MetaArgs,
    thumbs_dir: Option<PathBuf>,
) -> Result<(), CliError> {
    let path = settings_path();
    let given = [&meta_args.rom_base, &meta_args.core_path, &meta_args.db_name];
    if given.iter().all(|v| v.is_none()) && thumbs_dir.is_none() {
        return Err(CliError::usage(
            "Nothing to save: pass --rom-base, --core-path, --db-name or --thumbs-dir",
        ));
    }

    if given.iter().any(|v| v.is_some()) {
        let mut export = Settings::load().export;
        if let Some(v) = &meta_args.rom_base {
            export.rom_base_path = v.trim().to_string();
        }
        if let Some(v) = &meta_args.core_path {
            export.core_path = v.trim().to_string();
        }
        if let Some(v) = &meta_args.db_name {
            export.db_name = v.trim().to_string();
        }
        save_export_defaults(&path, &export)?;
    }

    if let Some(dir) = thumbs_dir {
        let dir = (!dir.as_os_str().is_empty()).then_some(dir);
        save_thumbnail_dir(&path, dir.as_deref())?;
    }

    log::info!(
        "{} Settings saved to {}",
        "\u{2714}".if_supports_color(Stdout, |t| t.green()),
        path.display().if_supports_color(Stdout, |t| t.cyan()),
    );
    Ok(())
}
