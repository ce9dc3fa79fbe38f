//! Device path helpers.
//!
//! Playlist paths are always `/`-separated device paths, never host paths,
//! so these work on plain strings instead of `std::path`.

/// Directory name that device firmware keeps every system folder under.
pub const ROMS_ANCHOR: &str = "/roms/";

/// Last `/`-delimited segment of `path`.
///
/// Returns the whole input when there is no separator or the last segment
/// is empty.
pub fn filename(path: &str) -> &str {
    match path.rsplit('/').next() {
        Some(last) if !last.is_empty() => last,
        _ => path,
    }
}

/// Everything but the last segment, always ending in `/`.
///
/// `"/a/b/c.nes"` → `"/a/b/"`, `"c.nes"` → `"/"`, `""` → `"/"`.
pub fn directory(path: &str) -> String {
    match path.rfind('/') {
        Some(idx) => path[..=idx].to_string(),
        None => "/".to_string(),
    }
}

/// System directory a ROM belongs to: the first segment after `/roms/`,
/// with its trailing slash.
///
/// ```
/// use retro_playlist_core::path::rom_base_from;
///
/// assert_eq!(rom_base_from("/sdcard/roms/NES/games/Mario.nes"), "/sdcard/roms/NES/");
/// assert_eq!(rom_base_from("/sdcard/roms/NES/Mario.nes"), "/sdcard/roms/NES/");
/// assert_eq!(rom_base_from("/sdcard/roms/Mario.nes"), "/sdcard/roms/");
/// ```
///
/// Without a `/roms/` anchor this falls back to [`directory`].
pub fn rom_base_from(path: &str) -> String {
    let Some(anchor) = path.find(ROMS_ANCHOR) else {
        return directory(path);
    };
    let after_anchor = anchor + ROMS_ANCHOR.len();
    match path[after_anchor..].find('/') {
        Some(slash) => path[..after_anchor + slash + 1].to_string(),
        None => path[..after_anchor].to_string(),
    }
}

/// Sub-directory between the system directory and the filename.
///
/// `"/sdcard/roms/NES/extras/hacks/Mario.nes"` → `"extras/hacks/"`.
/// Empty when the ROM sits directly in the system directory or the path
/// has no `/roms/` anchor.
pub fn sub_dir_under_system(path: &str) -> &str {
    let Some(anchor) = path.find(ROMS_ANCHOR) else {
        return "";
    };
    let after_anchor = &path[anchor + ROMS_ANCHOR.len()..];
    let Some(system_end) = after_anchor.find('/') else {
        return "";
    };
    let rest = &after_anchor[system_end + 1..];
    match rest.rfind('/') {
        Some(last) => &rest[..=last],
        None => "",
    }
}

/// Remove a single trailing `/`, if any.
pub fn strip_trailing_slash(path: &str) -> &str {
    path.strip_suffix('/').unwrap_or(path)
}

/// Join a base directory and a relative part with exactly one `/` between them.
pub fn join(base: &str, rest: &str) -> String {
    format!("{}/{}", strip_trailing_slash(base), rest)
}

#[cfg(test)]
#[path = "tests/path_tests.rs"]
mod tests;
