//! Thumbnail matching and thumbnail folder maintenance.
//!
//! A thumbnail is an image file in a flat folder whose stem, lower-cased,
//! matches one of an entry's keys (see [`ThumbnailKeys`]).

use std::collections::{HashMap, HashSet};
use std::io::Cursor;
use std::path::{Path, PathBuf};

use image::ImageFormat;

use retro_playlist_core::GameEntry;
use retro_playlist_core::util::{extension_lower, strip_extension};

use crate::error::ThumbnailError;

/// Extensions recognized as thumbnails in a thumbnail folder.
pub const THUMBNAIL_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "gif", "bmp", "webp"];

/// Replace characters that cannot appear in a thumbnail filename.
pub fn safe_name(name: &str) -> String {
    name.replace(['?', '&', '/'], "_")
}

/// Filename a newly assigned thumbnail is saved under.
pub fn thumbnail_file_name(entry: &GameEntry) -> String {
    format!("{}.png", safe_name(&entry.name))
}

/// Lookup keys for an entry, in priority order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThumbnailKeys {
    /// ROM filename without extension
    pub by_rom: String,
    /// Display name
    pub by_name: String,
    /// Display name with `? & /` replaced, only when that differs from `by_name`
    pub by_safe_name: Option<String>,
}

impl ThumbnailKeys {
    pub fn for_entry(entry: &GameEntry) -> Self {
        let by_name = entry.name.to_lowercase();
        let safe = safe_name(&entry.name).to_lowercase();
        Self {
            by_rom: entry.rom_stem().to_lowercase(),
            by_safe_name: (safe != by_name).then_some(safe),
            by_name,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        [
            Some(self.by_rom.as_str()),
            Some(self.by_name.as_str()),
            self.by_safe_name.as_deref(),
        ]
        .into_iter()
        .flatten()
    }

    /// Key a saved or auto-assigned thumbnail is stored under.
    pub fn save_key(&self) -> &str {
        self.by_safe_name.as_deref().unwrap_or(&self.by_name)
    }

    /// First key present in `map`.
    pub fn resolve<'a, V>(&self, map: &'a HashMap<String, V>) -> Option<&'a V> {
        self.iter().find_map(|key| map.get(key))
    }
}

/// Image files of a thumbnail folder, keyed by lower-cased stem.
#[derive(Debug, Clone, Default)]
pub struct ThumbnailIndex {
    dir: PathBuf,
    images: HashMap<String, PathBuf>,
}

impl ThumbnailIndex {
    /// Index the image files directly inside `dir`.
    pub fn load(dir: &Path) -> Result<Self, ThumbnailError> {
        if !dir.is_dir() {
            return Err(ThumbnailError::NotADirectory(dir.to_path_buf()));
        }

        let mut images = HashMap::new();
        for path in image_files(dir)? {
            if let Some(key) = stem_key(&path) {
                images.insert(key, path);
            }
        }
        log::debug!("Indexed {} thumbnails in {}", images.len(), dir.display());

        Ok(Self {
            dir: dir.to_path_buf(),
            images,
        })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn len(&self) -> usize {
        self.images.len()
    }

    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }

    pub fn resolve(&self, entry: &GameEntry) -> Option<&Path> {
        ThumbnailKeys::for_entry(entry)
            .resolve(&self.images)
            .map(PathBuf::as_path)
    }

    /// Indices of entries without a thumbnail.
    pub fn missing(&self, entries: &[GameEntry]) -> Vec<usize> {
        entries
            .iter()
            .enumerate()
            .filter(|(_, entry)| self.resolve(entry).is_none())
            .map(|(i, _)| i)
            .collect()
    }

    /// Image files whose stem matches no key of any entry.
    pub fn find_orphans(&self, entries: &[GameEntry]) -> Vec<PathBuf> {
        let valid: HashSet<String> = entries
            .iter()
            .flat_map(|entry| {
                let keys = ThumbnailKeys::for_entry(entry);
                keys.iter().map(str::to_string).collect::<Vec<_>>()
            })
            .collect();

        let mut orphans: Vec<PathBuf> = self
            .images
            .iter()
            .filter(|(key, _)| !valid.contains(key.as_str()))
            .map(|(_, path)| path.clone())
            .collect();
        orphans.sort();
        orphans
    }

    fn insert(&mut self, key: String, path: PathBuf) {
        self.images.insert(key, path);
    }

    fn forget(&mut self, path: &Path) {
        self.images.retain(|_, p| p != path);
    }
}

/// Result of deleting orphaned thumbnails.
#[derive(Debug, Default)]
pub struct CleanupSummary {
    pub deleted: usize,
    pub errors: Vec<String>,
}

/// Delete `files` from disk and from the index. Failures are collected, not fatal.
pub fn remove_files(index: &mut ThumbnailIndex, files: &[PathBuf]) -> CleanupSummary {
    let mut summary = CleanupSummary::default();
    for file in files {
        match std::fs::remove_file(file) {
            Ok(()) => {
                log::debug!("Deleted {}", file.display());
                index.forget(file);
                summary.deleted += 1;
            }
            Err(e) => summary.errors.push(format!("{}: {}", file.display(), e)),
        }
    }
    summary
}

/// Recursively collect `.png` files under `roots`, keyed by lower-cased stem.
///
/// `on_dir` is called with the running file count after each directory,
/// for progress display. Unreadable sub-directories are skipped.
pub fn search_sources(
    roots: &[PathBuf],
    mut on_dir: impl FnMut(usize),
) -> Result<HashMap<String, Vec<PathBuf>>, ThumbnailError> {
    let mut found: HashMap<String, Vec<PathBuf>> = HashMap::new();
    let mut count = 0usize;
    let mut pending: Vec<PathBuf> = Vec::new();

    for root in roots {
        if !root.is_dir() {
            return Err(ThumbnailError::NotADirectory(root.clone()));
        }
        pending.push(root.clone());
    }

    while let Some(dir) = pending.pop() {
        let read = match std::fs::read_dir(&dir) {
            Ok(read) => read,
            Err(e) => {
                log::debug!("Skipping {}: {}", dir.display(), e);
                continue;
            }
        };
        let mut dir_entries: Vec<PathBuf> = read.flatten().map(|e| e.path()).collect();
        dir_entries.sort();

        for path in dir_entries {
            if path.is_dir() {
                pending.push(path);
            } else if path.is_file() && is_png(&path) {
                if let Some(key) = stem_key(&path) {
                    found.entry(key).or_default().push(path);
                    count += 1;
                }
            }
        }
        on_dir(count);
    }

    Ok(found)
}

/// A found image for an entry that lacks a thumbnail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AutoAssignMatch {
    pub entry_index: usize,
    pub candidates: Vec<PathBuf>,
    pub save_key: String,
    pub file_name: String,
}

/// Match entries without a thumbnail against `found` (from [`search_sources`]).
pub fn plan_auto_assign(
    entries: &[GameEntry],
    index: &ThumbnailIndex,
    found: &HashMap<String, Vec<PathBuf>>,
) -> Vec<AutoAssignMatch> {
    index
        .missing(entries)
        .into_iter()
        .filter_map(|i| {
            let entry = &entries[i];
            let keys = ThumbnailKeys::for_entry(entry);
            let candidates = found.get(keys.save_key())?;
            Some(AutoAssignMatch {
                entry_index: i,
                candidates: candidates.clone(),
                save_key: keys.save_key().to_string(),
                file_name: thumbnail_file_name(entry),
            })
        })
        .collect()
}

/// Result of copying auto-assigned thumbnails.
#[derive(Debug, Default)]
pub struct AutoAssignSummary {
    pub assigned: usize,
    pub errors: Vec<String>,
}

/// Copy the first candidate of each match into the thumbnail folder.
pub fn execute_auto_assign(
    index: &mut ThumbnailIndex,
    matches: &[AutoAssignMatch],
) -> AutoAssignSummary {
    let mut summary = AutoAssignSummary::default();
    for m in matches {
        let Some(source) = m.candidates.first() else {
            continue;
        };
        let target = index.dir().join(&m.file_name);
        match std::fs::copy(source, &target) {
            Ok(_) => {
                log::debug!("Copied {} -> {}", source.display(), target.display());
                index.insert(m.save_key.clone(), target);
                summary.assigned += 1;
            }
            Err(e) => summary
                .errors
                .push(format!("{}: {}", source.display(), e)),
        }
    }
    summary
}

/// Re-encode `source` as PNG and save it as the entry's thumbnail.
pub fn assign_thumbnail(
    index: &mut ThumbnailIndex,
    entry: &GameEntry,
    source: &Path,
) -> Result<PathBuf, ThumbnailError> {
    let decoded = image::open(source)?;
    let mut png = Cursor::new(Vec::new());
    decoded.write_to(&mut png, ImageFormat::Png)?;

    let target = index.dir().join(thumbnail_file_name(entry));
    std::fs::write(&target, png.into_inner())?;

    let key = ThumbnailKeys::for_entry(entry).save_key().to_string();
    index.insert(key, target.clone());
    Ok(target)
}

fn image_files(dir: &Path) -> Result<Vec<PathBuf>, ThumbnailError> {
    let mut files: Vec<PathBuf> = std::fs::read_dir(dir)?
        .flatten()
        .map(|e| e.path())
        .filter(|p| p.is_file() && is_thumbnail(p))
        .collect();
    files.sort();
    Ok(files)
}

fn file_name(path: &Path) -> Option<&str> {
    path.file_name().and_then(|n| n.to_str())
}

fn stem_key(path: &Path) -> Option<String> {
    file_name(path).map(|name| strip_extension(name).to_lowercase())
}

fn is_thumbnail(path: &Path) -> bool {
    file_name(path)
        .and_then(extension_lower)
        .is_some_and(|ext| THUMBNAIL_EXTENSIONS.contains(&ext.as_str()))
}

fn is_png(path: &Path) -> bool {
    file_name(path).and_then(extension_lower).as_deref() == Some("png")
}

#[cfg(test)]
#[path = "tests/thumbnail_tests.rs"]
mod tests;
