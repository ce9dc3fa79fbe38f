use super::*;
use std::fs;
use tempfile::TempDir;

#[test]
fn scan_lists_roms_in_natural_order() {
    let tmp = TempDir::new().unwrap();
    let folder = tmp.path().join("FC");
    fs::create_dir(&folder).unwrap();
    for name in [
        "Game 10.nes",
        "game 2.nes",
        "Game 1.zip",
        ".hidden.nes",
        "cover.PNG",
        "list.lpl",
        "save.srm",
        "README",
    ] {
        fs::write(folder.join(name), b"").unwrap();
    }
    fs::create_dir(folder.join("sub.nes")).unwrap();

    let scan = scan_rom_folder(&folder).unwrap();
    let files: Vec<&str> = scan.entries.iter().map(|e| e.game_path.as_str()).collect();
    assert_eq!(files, vec!["Game 1.zip", "game 2.nes", "Game 10.nes", "README"]);
    assert_eq!(scan.entries[2].name, "Game 10");
    assert_eq!(scan.entries[3].name, "README");
    assert_eq!(scan.suggested_db_name, "FC.lpl");
}

#[test]
fn scan_without_roms_is_an_error() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join("game_strings_ko.xml"), b"").unwrap();
    assert!(matches!(
        scan_rom_folder(tmp.path()),
        Err(ScanError::NoRoms(_))
    ));
}

#[test]
fn scan_of_missing_folder_is_io_error() {
    let tmp = TempDir::new().unwrap();
    assert!(matches!(
        scan_rom_folder(&tmp.path().join("missing")),
        Err(ScanError::Io(_))
    ));
}
