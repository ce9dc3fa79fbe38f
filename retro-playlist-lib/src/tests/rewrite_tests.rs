use super::*;

fn fc_list() -> Vec<GameEntry> {
    vec![
        GameEntry::from_rom_path("Mario", "/sdcard/roms/FC/Mario.nes")
            .with_core_path("/old/core.so")
            .with_db_name("Old.lpl"),
        GameEntry::from_rom_path("Zelda", "/sdcard/roms/FC/hacks/Zelda.nes"),
        GameEntry::new("Tetris", "Tetris.nes"),
    ]
}

#[test]
fn all_blank_is_rejected_without_mutation() {
    let mut entries = fc_list();
    let before = entries.clone();
    let rewrite = BatchRewrite::new().rom_base_path("  ").extension("");
    assert_eq!(
        apply_batch_rewrite(&mut entries, &rewrite),
        Err(RewriteError::NothingToChange)
    );
    assert_eq!(entries, before);
}

#[test]
fn empty_list_is_rejected() {
    let rewrite = BatchRewrite::new().core_path("/core.so");
    assert_eq!(
        apply_batch_rewrite(&mut [], &rewrite),
        Err(RewriteError::EmptyList)
    );
}

#[test]
fn base_path_keeps_sub_directories() {
    let mut entries = fc_list();
    let rewrite = BatchRewrite::new().rom_base_path("/mnt/sdcard/roms/NES/");
    let summary = apply_batch_rewrite(&mut entries, &rewrite).unwrap();

    assert_eq!(summary.entries, 3);
    assert!(summary.rom_base_path);
    assert_eq!(
        entries[0].source_rom_path.as_deref(),
        Some("/mnt/sdcard/roms/NES/Mario.nes")
    );
    assert_eq!(
        entries[1].source_rom_path.as_deref(),
        Some("/mnt/sdcard/roms/NES/hacks/Zelda.nes")
    );
    // Entries without a ROM path get one built from the filename.
    assert_eq!(
        entries[2].source_rom_path.as_deref(),
        Some("/mnt/sdcard/roms/NES/Tetris.nes")
    );
}

#[test]
fn extension_only_swaps_filename_in_place() {
    let mut entries = fc_list();
    let summary = apply_batch_rewrite(&mut entries, &BatchRewrite::new().extension("zip")).unwrap();

    assert_eq!(summary.extension.as_deref(), Some(".zip"));
    assert_eq!(entries[0].game_path, "Mario.zip");
    assert_eq!(
        entries[0].source_rom_path.as_deref(),
        Some("/sdcard/roms/FC/Mario.zip")
    );
    assert_eq!(
        entries[1].source_rom_path.as_deref(),
        Some("/sdcard/roms/FC/hacks/Zelda.zip")
    );
    assert_eq!(entries[2].game_path, "Tetris.zip");
    assert!(entries[2].source_rom_path.is_none());
}

#[test]
fn extension_is_appended_when_missing() {
    let mut entries = vec![GameEntry::new("Readme", "README")];
    apply_batch_rewrite(&mut entries, &BatchRewrite::new().extension(".7z")).unwrap();
    assert_eq!(entries[0].game_path, "README.7z");
}

#[test]
fn base_and_extension_together() {
    let mut entries = fc_list();
    let rewrite = BatchRewrite::new()
        .rom_base_path("/roms/NES")
        .extension(".zip");
    apply_batch_rewrite(&mut entries, &rewrite).unwrap();
    assert_eq!(
        entries[1].source_rom_path.as_deref(),
        Some("/roms/NES/hacks/Zelda.zip")
    );
    assert!(entries.iter().all(|e| !e.has_stale_rom_path()));
}

#[test]
fn core_and_db_overwrite_every_entry() {
    let mut entries = fc_list();
    let rewrite = BatchRewrite::new()
        .core_path("/cores/nestopia_libretro.so")
        .db_name("NES.lpl");
    let summary = apply_batch_rewrite(&mut entries, &rewrite).unwrap();

    assert!(!summary.rom_base_path);
    assert_eq!(summary.changed_fields(), "core path, database name");
    for entry in &entries {
        assert_eq!(
            entry.source_core_path.as_deref(),
            Some("/cores/nestopia_libretro.so")
        );
        assert_eq!(entry.source_db_name.as_deref(), Some("NES.lpl"));
    }
    assert_eq!(
        entries[0].source_rom_path.as_deref(),
        Some("/sdcard/roms/FC/Mario.nes")
    );
}

#[test]
fn apply_to_meta_skips_blank_fields() {
    let mut meta = PlaylistMeta::new("/roms/FC/", "/core.so", "FC.lpl");
    BatchRewrite::new()
        .rom_base_path("/roms/NES/")
        .core_path(" ")
        .apply_to_meta(&mut meta);
    assert_eq!(meta, PlaylistMeta::new("/roms/NES/", "/core.so", "FC.lpl"));
}
