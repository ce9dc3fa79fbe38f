//! retro-playlist CLI
//!
//! Command-line interface for converting, editing and maintaining handheld
//! icon game lists and 6-line emulator playlists.

mod cli_types;
mod commands;
mod error;

use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

use clap::Parser;
use log::{Level, LevelFilter};
use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use cli_types::{Cli, Commands, ConfigAction, EditAction, ThumbsAction};
pub(crate) use error::CliError;

fn main() {
    let cli = Cli::parse();

    if let Err(e) = init_logging(cli.quiet, cli.verbose, cli.logfile.as_deref()) {
        eprintln!("Failed to set up logging: {e}");
        std::process::exit(2);
    }

    if let Err(e) = run(cli.command) {
        log::error!(
            "{} {}",
            "\u{2718}".if_supports_color(Stdout, |t| t.red()),
            e
        );
        std::process::exit(1);
    }
}

fn run(command: Commands) -> Result<(), CliError> {
    match command {
        Commands::Info { file, thumbs } => commands::info::run_info(&file, thumbs),
        Commands::Convert {
            input,
            output,
            meta,
        } => commands::convert::run_convert(&input, &output, &meta),
        Commands::Rewrite {
            input,
            output,
            meta,
            ext,
            dry_run,
        } => commands::rewrite::run_rewrite(&input, &output, &meta, ext, dry_run),
        Commands::Scan {
            folder,
            output,
            meta,
        } => commands::scan::run_scan(&folder, &output, &meta),
        Commands::Names {
            target,
            from,
            output,
        } => commands::names::run_names(&target, &from, &output),
        Commands::Sort { file, output } => commands::sort::run_sort(&file, &output),
        Commands::Edit {
            file,
            output,
            action,
        } => match action {
            EditAction::Add { name, game_path } => {
                commands::edit::run_edit_add(&file, &output, name, game_path)
            }
            EditAction::Remove { positions } => {
                commands::edit::run_edit_remove(&file, &output, &positions)
            }
            EditAction::Move { positions, down } => {
                commands::edit::run_edit_move(&file, &output, &positions, down)
            }
            EditAction::Set {
                position,
                name,
                game_path,
                rom_base,
                core_path,
                db_name,
            } => commands::edit::run_edit_set(
                &file,
                &output,
                position,
                commands::edit::SetFields {
                    name,
                    game_path,
                    rom_base,
                    core_path,
                    db_name,
                },
            ),
        },
        Commands::Thumbs { action } => match action {
            ThumbsAction::Check { target } => commands::thumbs::run_thumbs_check(&target),
            ThumbsAction::Cleanup { target, dry_run } => {
                commands::thumbs::run_thumbs_cleanup(&target, dry_run)
            }
            ThumbsAction::Search {
                target,
                sources,
                dry_run,
            } => commands::thumbs::run_thumbs_search(&target, &sources, dry_run),
            ThumbsAction::Assign {
                target,
                position,
                image,
            } => commands::thumbs::run_thumbs_assign(&target, position, &image),
        },
        Commands::Config { action } => match action {
            ConfigAction::Show => commands::config::run_config_show(),
            ConfigAction::Path => commands::config::run_config_path(),
            ConfigAction::Set { meta, thumbs_dir } => {
                commands::config::run_config_set(&meta, thumbs_dir)
            }
        },
    }
}

/// Log an empty line at info level.
pub(crate) fn log_blank() {
    log::info!("");
}

/// Install the logger.
///
/// Info messages are printed bare, like plain `println!` output; warnings
/// and errors keep their text too so `--quiet` still shows them. `--verbose`
/// adds timestamps, levels and debug messages.
fn init_logging(quiet: bool, verbose: bool, logfile: Option<&Path>) -> io::Result<()> {
    let level = if quiet {
        LevelFilter::Warn
    } else if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };

    let file = logfile.map(File::create).transpose()?;
    let writer = TeeWriter {
        stdout: io::stdout(),
        file: file.map(strip_ansi_escapes::Writer::new),
    };

    let mut builder = env_logger::Builder::new();
    builder
        .filter_level(LevelFilter::Warn)
        // Prefix match: covers the binary and every retro_playlist_* crate
        .filter_module("retro_playlist", level)
        .target(env_logger::Target::Pipe(Box::new(writer)));

    if verbose {
        builder.format(|buf, record| {
            writeln!(
                buf,
                "[{} {:<5} {}] {}",
                buf.timestamp_millis(),
                record.level(),
                record.target(),
                record.args()
            )
        });
    } else {
        builder.format(|buf, record| match record.level() {
            Level::Info | Level::Debug | Level::Trace => writeln!(buf, "{}", record.args()),
            level => writeln!(buf, "{}: {}", level, record.args()),
        });
    }

    builder.try_init().map_err(io::Error::other)
}

/// Writes log output to stdout and, optionally, to a file with ANSI codes stripped.
struct TeeWriter {
    stdout: io::Stdout,
    file: Option<strip_ansi_escapes::Writer<File>>,
}

impl Write for TeeWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.stdout.write_all(buf)?;
        if let Some(file) = &mut self.file {
            file.write_all(buf)?;
        }
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        self.stdout.flush()?;
        if let Some(file) = &mut self.file {
            file.flush()?;
        }
        Ok(())
    }
}
