use super::*;

fn names(entries: &[GameEntry]) -> Vec<&str> {
    entries.iter().map(|e| e.name.as_str()).collect()
}

fn abcde() -> Vec<GameEntry> {
    ["A", "B", "C", "D", "E"]
        .iter()
        .map(|n| GameEntry::new(*n, format!("{}.zip", n.to_lowercase())))
        .collect()
}

fn set(indices: &[usize]) -> BTreeSet<usize> {
    indices.iter().copied().collect()
}

#[test]
fn add_entry_numbers_placeholder() {
    let mut entries = abcde();
    let idx = add_entry(&mut entries);
    assert_eq!(idx, 5);
    assert_eq!(entries[5].name, "6.새 게임");
    assert_eq!(entries[5].game_path, NEW_ENTRY_GAME_PATH);
    assert!(entries[5].validate().is_ok());
}

#[test]
fn remove_selected_entries() {
    let mut entries = abcde();
    assert_eq!(remove_entries(&mut entries, &set(&[0, 2, 9])), 2);
    assert_eq!(names(&entries), vec!["B", "D", "E"]);
}

#[test]
fn move_up_and_down() {
    let mut entries = abcde();
    let moved = move_entries(&mut entries, &set(&[1, 3]), Direction::Up).unwrap();
    assert_eq!(names(&entries), vec!["B", "A", "D", "C", "E"]);
    assert_eq!(moved, set(&[0, 2]));

    let moved = move_entries(&mut entries, &set(&[2, 3]), Direction::Down).unwrap();
    assert_eq!(names(&entries), vec!["B", "A", "E", "D", "C"]);
    assert_eq!(moved, set(&[3, 4]));
}

#[test]
fn move_at_boundary_is_noop() {
    let mut entries = abcde();
    assert_eq!(move_entries(&mut entries, &set(&[0, 2]), Direction::Up), None);
    assert_eq!(move_entries(&mut entries, &set(&[4]), Direction::Down), None);
    assert_eq!(move_entries(&mut entries, &set(&[]), Direction::Down), None);
    assert_eq!(move_entries(&mut entries, &set(&[7]), Direction::Up), None);
    assert_eq!(names(&entries), vec!["A", "B", "C", "D", "E"]);
}

#[test]
fn sort_groups_digits_latin_hangul_other() {
    let mut entries: Vec<GameEntry> = ["テトリス", "마리오", "zelda", "10.Ten", "Bomberman", "2.Two", "가나다"]
        .iter()
        .map(|n| GameEntry::new(*n, "x.zip"))
        .collect();
    sort_by_name(&mut entries);
    assert_eq!(
        names(&entries),
        vec!["2.Two", "10.Ten", "Bomberman", "zelda", "가나다", "마리오", "テトリス"]
    );
}

#[test]
fn sort_ignores_leading_whitespace() {
    let mut entries = vec![GameEntry::new("  b", "b.zip"), GameEntry::new("A", "a.zip")];
    sort_by_name(&mut entries);
    assert_eq!(names(&entries), vec!["A", "  b"]);
}

#[test]
fn edit_sets_and_clears_fields() {
    let mut entries = vec![
        GameEntry::from_rom_path("Mario", "/roms/FC/Mario.nes")
            .with_core_path("/core.so")
            .with_crc32("1234ABCD"),
    ];

    let mut edit = EntryEdit::from_entry(&entries[0]);
    assert_eq!(edit.rom_base_path, None);
    edit.name = "  Super Mario  ".to_string();
    edit.game_path = "Super Mario.zip".to_string();
    edit.core_path = String::new();
    edit.db_name = "FC.lpl".to_string();
    apply_edit(&mut entries, 0, &edit).unwrap();

    let entry = &entries[0];
    assert_eq!(entry.name, "Super Mario");
    assert_eq!(
        entry.source_rom_path.as_deref(),
        Some("/roms/FC/Super Mario.zip")
    );
    assert_eq!(entry.source_core_path, None);
    assert_eq!(entry.source_db_name.as_deref(), Some("FC.lpl"));
    assert_eq!(entry.source_crc32.as_deref(), Some("1234ABCD"));
}

#[test]
fn edit_with_blank_base_clears_rom_path() {
    let mut entries = vec![GameEntry::from_rom_path("Mario", "/roms/FC/Mario.nes")];
    let edit = EntryEdit {
        name: "Mario".into(),
        game_path: "Mario.nes".into(),
        rom_base_path: Some("  ".into()),
        ..Default::default()
    };
    apply_edit(&mut entries, 0, &edit).unwrap();
    assert_eq!(entries[0].source_rom_path, None);
}

#[test]
fn edit_with_new_base_rebuilds_rom_path() {
    let mut entries = vec![GameEntry::from_rom_path("Mario", "mario.nes")];
    let mut edit = EntryEdit::from_entry(&entries[0]);
    edit.rom_base_path = Some("/mnt/sdcard/roms/FC".into());
    apply_edit(&mut entries, 0, &edit).unwrap();
    assert_eq!(
        entries[0].source_rom_path.as_deref(),
        Some("/mnt/sdcard/roms/FC/mario.nes")
    );
}

#[test]
fn renaming_keeps_relative_rom_path() {
    let mut entries = vec![
        GameEntry::from_rom_path("Mario", "mario.nes"),
        GameEntry::from_rom_path("Zelda", "/roms/FC/sub/zelda.nes"),
    ];

    let mut edit = EntryEdit::from_entry(&entries[0]);
    edit.name = "Super Mario".into();
    apply_edit(&mut entries, 0, &edit).unwrap();
    assert_eq!(entries[0].name, "Super Mario");
    assert_eq!(entries[0].source_rom_path.as_deref(), Some("mario.nes"));

    let mut edit = EntryEdit::from_entry(&entries[0]);
    edit.game_path = "mario (rev 1).nes".into();
    apply_edit(&mut entries, 0, &edit).unwrap();
    assert_eq!(
        entries[0].source_rom_path.as_deref(),
        Some("mario (rev 1).nes")
    );

    let mut edit = EntryEdit::from_entry(&entries[1]);
    edit.name = "Zelda II".into();
    apply_edit(&mut entries, 1, &edit).unwrap();
    assert_eq!(
        entries[1].source_rom_path.as_deref(),
        Some("/roms/FC/sub/zelda.nes")
    );
}

#[test]
fn invalid_edit_leaves_entry_untouched() {
    let mut entries = abcde();
    let before = entries.clone();

    let blank_name = EntryEdit {
        name: "   ".into(),
        game_path: "a.zip".into(),
        ..Default::default()
    };
    assert_eq!(
        apply_edit(&mut entries, 0, &blank_name),
        Err(EditError::EmptyName)
    );

    let blank_path = EntryEdit {
        name: "A".into(),
        ..Default::default()
    };
    assert_eq!(
        apply_edit(&mut entries, 0, &blank_path),
        Err(EditError::EmptyGamePath)
    );

    assert_eq!(
        apply_edit(&mut entries, 5, &EntryEdit::from_entry(&before[0])),
        Err(EditError::IndexOutOfRange { index: 5, len: 5 })
    );
    assert_eq!(entries, before);
}

#[test]
fn fill_names_matches_stems_case_insensitively() {
    let source = vec![
        GameEntry::new("1.슈퍼 마리오", "Super Mario Bros.nes"),
        GameEntry::new("2.젤다", "zelda.nes"),
    ];
    let mut target = vec![
        GameEntry::new("super mario bros", "super mario bros.zip"),
        GameEntry::new("ZELDA", "ZELDA.zip"),
        GameEntry::new("Tetris", "tetris.zip"),
    ];
    assert_eq!(fill_names_from(&mut target, &source), 2);
    assert_eq!(names(&target), vec!["1.슈퍼 마리오", "2.젤다", "Tetris"]);
}
