//! Build a game list from the files of a ROM folder.

use std::path::Path;

use retro_playlist_core::GameEntry;
use retro_playlist_core::util::{extension_lower, natural_cmp, strip_extension};

use crate::error::ScanError;

/// Extensions that are never ROMs (lists, metadata, images, saves).
pub const IGNORED_EXTENSIONS: &[&str] = &[
    "xml", "lpl", "txt", "dat", "db", "ini", "cfg", "jpg", "png", "gif", "bmp", "nfo", "srm",
    "sav", "state",
];

/// Entries found in a ROM folder.
#[derive(Debug, Clone)]
pub struct FolderScan {
    pub entries: Vec<GameEntry>,
    /// `<folder name>.lpl`
    pub suggested_db_name: String,
}

/// List the candidate ROM files directly inside `folder`.
///
/// Hidden files and [`IGNORED_EXTENSIONS`] are skipped. Each file becomes an
/// entry named after its stem, in natural filename order.
pub fn scan_rom_folder(folder: &Path) -> Result<FolderScan, ScanError> {
    let mut files: Vec<String> = std::fs::read_dir(folder)?
        .flatten()
        .filter(|e| e.path().is_file())
        .filter_map(|e| e.file_name().to_str().map(str::to_string))
        .filter(|name| is_rom_candidate(name))
        .collect();

    if files.is_empty() {
        return Err(ScanError::NoRoms(folder.to_path_buf()));
    }
    files.sort_by(|a, b| natural_cmp(a, b));

    let entries = files
        .into_iter()
        .map(|file| GameEntry::new(strip_extension(&file), file.clone()))
        .collect();

    let folder_name = folder
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or_default();

    Ok(FolderScan {
        entries,
        suggested_db_name: format!("{folder_name}.lpl"),
    })
}

fn is_rom_candidate(file_name: &str) -> bool {
    if file_name.starts_with('.') {
        log::debug!("Skipping hidden file {file_name}");
        return false;
    }
    match extension_lower(file_name) {
        Some(ext) if IGNORED_EXTENSIONS.contains(&ext.as_str()) => false,
        _ => true,
    }
}

#[cfg(test)]
#[path = "tests/scanner_tests.rs"]
mod tests;
