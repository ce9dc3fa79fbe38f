use super::*;

#[test]
fn test_filename() {
    assert_eq!(filename("/sdcard/roms/NES/Mario.nes"), "Mario.nes");
    assert_eq!(filename("Mario.nes"), "Mario.nes");
    assert_eq!(filename("/sdcard/roms/"), "/sdcard/roms/");
    assert_eq!(filename(""), "");
}

#[test]
fn test_directory() {
    assert_eq!(directory("/sdcard/roms/NES/Mario.nes"), "/sdcard/roms/NES/");
    assert_eq!(directory("/Mario.nes"), "/");
    assert_eq!(directory("Mario.nes"), "/");
    assert_eq!(directory(""), "/");
}

#[test]
fn rom_base_stops_at_system_directory() {
    assert_eq!(
        rom_base_from("/sdcard/roms/NES/games/Mario.nes"),
        "/sdcard/roms/NES/"
    );
    assert_eq!(rom_base_from("/sdcard/roms/NES/Mario.nes"), "/sdcard/roms/NES/");
    assert_eq!(rom_base_from("/sdcard/roms/Mario.nes"), "/sdcard/roms/");
}

#[test]
fn rom_base_without_anchor_uses_directory() {
    assert_eq!(rom_base_from("/mnt/games/nes/Mario.nes"), "/mnt/games/nes/");
    assert_eq!(rom_base_from("Mario.nes"), "/");
}

#[test]
fn rom_base_uses_first_anchor() {
    assert_eq!(
        rom_base_from("/a/roms/FC/roms/b/Mario.nes"),
        "/a/roms/FC/"
    );
}

#[test]
fn sub_dir_is_kept_between_system_and_file() {
    assert_eq!(sub_dir_under_system("/sdcard/roms/NES/extras/Mario.nes"), "extras/");
    assert_eq!(
        sub_dir_under_system("/sdcard/roms/NES/a/b/Mario.nes"),
        "a/b/"
    );
    assert_eq!(sub_dir_under_system("/sdcard/roms/NES/Mario.nes"), "");
    assert_eq!(sub_dir_under_system("/sdcard/roms/Mario.nes"), "");
    assert_eq!(sub_dir_under_system("/mnt/games/x/Mario.nes"), "");
}

#[test]
fn join_collapses_one_trailing_slash() {
    assert_eq!(join("/sdcard/roms/NES/", "Mario.nes"), "/sdcard/roms/NES/Mario.nes");
    assert_eq!(join("/sdcard/roms/NES", "Mario.nes"), "/sdcard/roms/NES/Mario.nes");
    assert_eq!(strip_trailing_slash("/a//"), "/a/");
}
