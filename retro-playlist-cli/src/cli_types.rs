//! CLI type definitions: command enums and argument structs.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use retro_playlist_core::PlaylistMeta;
use retro_playlist_formats::PlaylistFormat;

#[derive(Parser)]
#[command(name = "retro-playlist")]
#[command(
    about = "Convert, edit and maintain handheld game lists and emulator playlists",
    long_about = None
)]
pub(crate) struct Cli {
    /// Only show warnings and errors (suppress normal output)
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Enable verbose/debug logging (timestamps + debug-level messages)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Write log output to a file (ANSI codes stripped)
    #[arg(long, global = true)]
    pub logfile: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Playlist-wide fields applied on export.
#[derive(Args, Clone, Default)]
pub(crate) struct MetaArgs {
    /// System ROM directory (e.g. /mnt/sdcard/roms/FC/)
    #[arg(long)]
    pub rom_base: Option<String>,

    /// Emulator core path (e.g. /mnt/sdcard/cores/fceumm_libretro.so)
    #[arg(long)]
    pub core_path: Option<String>,

    /// Database (playlist) name
    #[arg(long)]
    pub db_name: Option<String>,
}

impl MetaArgs {
    /// Flags as a meta with blank fields for anything not given.
    pub fn to_meta(&self) -> PlaylistMeta {
        let field = |v: &Option<String>| v.as_deref().map(str::trim).unwrap_or_default().to_string();
        PlaylistMeta::new(
            field(&self.rom_base),
            field(&self.core_path),
            field(&self.db_name),
        )
    }
}

/// Where to write a list. Defaults depend on the command.
#[derive(Args, Clone, Default)]
pub(crate) struct OutputArgs {
    /// Output file (format is taken from the extension unless --to is given)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Output format: xml or lpl
    #[arg(long)]
    pub to: Option<PlaylistFormat>,
}

/// Thumbnail folder selection.
#[derive(Args, Clone)]
pub(crate) struct ThumbDirArgs {
    /// List file the thumbnails belong to
    pub file: PathBuf,

    /// Thumbnail folder (defaults to [thumbnails] dir in settings.toml)
    #[arg(short, long)]
    pub dir: Option<PathBuf>,
}

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Show a list file's entries, shared fields and warnings
    Info {
        file: PathBuf,

        /// Mark entries that have a thumbnail in this folder
        #[arg(long)]
        thumbs: Option<PathBuf>,
    },

    /// Convert between icon XML and 6-line playlist
    Convert {
        input: PathBuf,

        #[command(flatten)]
        output: OutputArgs,

        #[command(flatten)]
        meta: MetaArgs,
    },

    /// Rewrite ROM base path, extension, core or database name for every entry
    Rewrite {
        input: PathBuf,

        #[command(flatten)]
        output: OutputArgs,

        #[command(flatten)]
        meta: MetaArgs,

        /// New ROM extension (e.g. zip or .zip)
        #[arg(long)]
        ext: Option<String>,

        /// Show the result without writing
        #[arg(short = 'n', long)]
        dry_run: bool,
    },

    /// Build a list from the ROM files in a folder
    Scan {
        folder: PathBuf,

        #[command(flatten)]
        output: OutputArgs,

        #[command(flatten)]
        meta: MetaArgs,
    },

    /// Copy display names from another list, matching by ROM filename
    Names {
        target: PathBuf,

        /// List to take names from
        #[arg(long)]
        from: PathBuf,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Sort entries by display name
    Sort {
        file: PathBuf,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Add, remove, reorder or change entries
    Edit {
        file: PathBuf,

        #[command(flatten)]
        output: OutputArgs,

        #[command(subcommand)]
        action: EditAction,
    },

    /// Check, clean up and fill a thumbnail folder
    Thumbs {
        #[command(subcommand)]
        action: ThumbsAction,
    },

    /// Show or change saved settings
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
pub(crate) enum EditAction {
    /// Append a new entry
    Add {
        /// Display name (defaults to a numbered placeholder)
        #[arg(long)]
        name: Option<String>,

        /// ROM filename
        #[arg(long)]
        game_path: Option<String>,
    },

    /// Remove entries by position (1-based)
    Remove {
        #[arg(required = true, value_delimiter = ',')]
        positions: Vec<usize>,
    },

    /// Move entries one step up or down
    Move {
        #[arg(required = true, value_delimiter = ',')]
        positions: Vec<usize>,

        /// Move towards the end of the list instead of the start
        #[arg(long)]
        down: bool,
    },

    /// Change one entry (unspecified fields keep their current value)
    Set {
        /// Entry position (1-based)
        position: usize,

        #[arg(long)]
        name: Option<String>,

        #[arg(long)]
        game_path: Option<String>,

        /// ROM directory for this entry; empty string clears it
        #[arg(long)]
        rom_base: Option<String>,

        /// Core path for this entry; empty string clears it
        #[arg(long)]
        core_path: Option<String>,

        /// Database name for this entry; empty string clears it
        #[arg(long)]
        db_name: Option<String>,
    },
}

#[derive(Subcommand)]
pub(crate) enum ThumbsAction {
    /// Report entries without a thumbnail and unused images
    Check {
        #[command(flatten)]
        target: ThumbDirArgs,
    },

    /// Delete images that match no entry
    Cleanup {
        #[command(flatten)]
        target: ThumbDirArgs,

        /// Show what would be deleted without deleting
        #[arg(short = 'n', long)]
        dry_run: bool,
    },

    /// Find PNGs for entries without a thumbnail and copy them in
    Search {
        #[command(flatten)]
        target: ThumbDirArgs,

        /// Folders to search (recursively)
        #[arg(long = "source", required = true)]
        sources: Vec<PathBuf>,

        /// Show matches without copying
        #[arg(short = 'n', long)]
        dry_run: bool,
    },

    /// Save an image as an entry's thumbnail (converted to PNG)
    Assign {
        #[command(flatten)]
        target: ThumbDirArgs,

        /// Entry position (1-based)
        position: usize,

        image: PathBuf,
    },
}

#[derive(Subcommand)]
pub(crate) enum ConfigAction {
    /// Show the current settings
    Show,

    /// Print the settings file path
    Path,

    /// Save export defaults (empty string removes a field)
    Set {
        #[command(flatten)]
        meta: MetaArgs,

        /// Default thumbnail folder
        #[arg(long)]
        thumbs_dir: Option<PathBuf>,
    },
}
