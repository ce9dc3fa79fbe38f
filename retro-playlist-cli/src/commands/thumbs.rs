use std::path::{Path, PathBuf};

use indicatif::{ProgressBar, ProgressStyle};
use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use retro_playlist_lib::settings::resolve_thumbnail_dir;
use retro_playlist_lib::thumbnail::{
    assign_thumbnail, execute_auto_assign, plan_auto_assign, remove_files, search_sources,
};
use retro_playlist_lib::{Settings, ThumbnailIndex};

use crate::CliError;
use crate::cli_types::ThumbDirArgs;
use crate::commands::{LoadedList, format_entry, load_list, position_to_index};

/// Load the list and index its thumbnail folder.
fn open(target: &ThumbDirArgs) -> Result<(LoadedList, ThumbnailIndex), CliError> {
    let list = load_list(&target.file)?;
    let dir = resolve_thumbnail_dir(target.dir.clone(), &Settings::load()).ok_or_else(|| {
        CliError::config("No thumbnail folder: pass --dir or set [thumbnails] dir in settings.toml")
    })?;
    let index = ThumbnailIndex::load(&dir)?;
    log::info!(
        "Thumbnail folder: {} ({} images)",
        dir.display().if_supports_color(Stdout, |t| t.cyan()),
        index.len()
    );
    Ok((list, index))
}

/// Report entries without a thumbnail and images no entry uses.
pub(crate) fn run_thumbs_check(target: &ThumbDirArgs) -> Result<(), CliError> {
    let (list, index) = open(target)?;

    let missing = index.missing(&list.entries);
    let orphans = index.find_orphans(&list.entries);

    if missing.is_empty() {
        log::info!(
            "{} Every entry has a thumbnail",
            "\u{2714}".if_supports_color(Stdout, |t| t.green()),
        );
    } else {
        log::info!(
            "{} entries without a thumbnail:",
            missing.len().if_supports_color(Stdout, |t| t.yellow())
        );
        for &i in &missing {
            log::info!("{}", format_entry(i + 1, &list.entries[i]));
        }
    }

    if !orphans.is_empty() {
        crate::log_blank();
        log::info!(
            "{} images match no entry:",
            orphans.len().if_supports_color(Stdout, |t| t.yellow())
        );
        for path in &orphans {
            log::info!("      {}", file_label(path));
        }
    }
    Ok(())
}

/// Delete images no entry uses.
pub(crate) fn run_thumbs_cleanup(target: &ThumbDirArgs, dry_run: bool) -> Result<(), CliError> {
    let (list, mut index) = open(target)?;
    let orphans = index.find_orphans(&list.entries);

    if orphans.is_empty() {
        log::info!("Nothing to clean up");
        return Ok(());
    }

    for path in &orphans {
        log::info!(
            "  {} {}",
            "-".if_supports_color(Stdout, |t| t.red()),
            file_label(path)
        );
    }
    if dry_run {
        log::info!(
            "{}",
            format!("Dry run: {} files would be deleted", orphans.len())
                .if_supports_color(Stdout, |t| t.dimmed()),
        );
        return Ok(());
    }

    let summary = remove_files(&mut index, &orphans);
    log::info!(
        "{} Deleted {} files",
        "\u{2714}".if_supports_color(Stdout, |t| t.green()),
        summary.deleted
    );
    report_errors(&summary.errors);
    Ok(())
}

/// Look for PNGs named after entries without a thumbnail and copy them in.
pub(crate) fn run_thumbs_search(
    target: &ThumbDirArgs,
    sources: &[PathBuf],
    dry_run: bool,
) -> Result<(), CliError> {
    let (list, mut index) = open(target)?;

    let missing = index.missing(&list.entries).len();
    if missing == 0 {
        log::info!("Every entry already has a thumbnail");
        return Ok(());
    }

    let pb = if log::max_level() < log::LevelFilter::Info {
        ProgressBar::hidden()
    } else {
        let pb = ProgressBar::new_spinner();
        pb.set_style(
            ProgressStyle::with_template("  {spinner:.cyan} {msg}")
                .map_err(|e| CliError::usage(e.to_string()))?
                .tick_chars("/-\\|"),
        );
        pb.set_message("Searching...");
        pb
    };
    let found = search_sources(sources, |count| {
        pb.set_message(format!("Found {count} PNG files"));
        pb.tick();
    });
    pb.finish_and_clear();
    let found = found?;

    let plan = plan_auto_assign(&list.entries, &index, &found);
    log::info!(
        "Matched {} of {} entries without a thumbnail",
        plan.len().if_supports_color(Stdout, |t| t.bold()),
        missing
    );
    for m in &plan {
        let extra = match m.candidates.len() {
            1 => String::new(),
            n => format!(" (first of {n} candidates)"),
        };
        log::info!(
            "  {} <- {}{}",
            m.file_name,
            m.candidates[0].display().if_supports_color(Stdout, |t| t.dimmed()),
            extra
        );
    }

    if dry_run || plan.is_empty() {
        return Ok(());
    }

    let summary = execute_auto_assign(&mut index, &plan);
    log::info!(
        "{} Copied {} thumbnails",
        "\u{2714}".if_supports_color(Stdout, |t| t.green()),
        summary.assigned
    );
    report_errors(&summary.errors);
    Ok(())
}

/// Save `image` as the thumbnail for the entry at `position`.
pub(crate) fn run_thumbs_assign(
    target: &ThumbDirArgs,
    position: usize,
    image: &Path,
) -> Result<(), CliError> {
    let (list, mut index) = open(target)?;
    let i = position_to_index(position, list.entries.len())?;
    let entry = &list.entries[i];

    if let Some(existing) = index.resolve(entry) {
        log::info!(
            "Entry already has {}; adding another",
            existing.display().if_supports_color(Stdout, |t| t.dimmed())
        );
    }
    let saved = assign_thumbnail(&mut index, entry, image)?;
    log::info!(
        "{} Saved {}",
        "\u{2714}".if_supports_color(Stdout, |t| t.green()),
        saved.display().if_supports_color(Stdout, |t| t.cyan())
    );
    Ok(())
}

fn file_label(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

fn report_errors(errors: &[String]) {
    for e in errors {
        log::warn!(
            "  {} {}",
            "\u{2718}".if_supports_color(Stdout, |t| t.red()),
            e
        );
    }
}
