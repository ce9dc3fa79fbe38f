use super::*;

fn entries(n: usize) -> Vec<GameEntry> {
    (1..=n)
        .map(|i| GameEntry::new(format!("{i}.Game {i}"), format!("game{i}.zip")))
        .collect()
}

#[test]
fn parses_pages_in_document_order() {
    let xml = r#"<?xml version="1.0"?>
<strings_resources>
  <icon_para game_list_total="3" />
  <icon_page1>
    <icon0_para name="1.슈퍼 마리오" game_path="Super Mario Bros. (Korea).zip" />
    <icon1_para name="2.Zelda" game_path="zelda.zip" />
  </icon_page1>
  <icon_page2>
    <icon0_para name="3.Tetris" game_path="tetris.zip" />
  </icon_page2>
</strings_resources>
"#;
    let parsed = parse_icon_xml(xml).unwrap();
    assert_eq!(
        parsed,
        vec![
            GameEntry::new("1.슈퍼 마리오", "Super Mario Bros. (Korea).zip"),
            GameEntry::new("2.Zelda", "zelda.zip"),
            GameEntry::new("3.Tetris", "tetris.zip"),
        ]
    );
}

#[test]
fn unquoted_attributes_are_repaired() {
    let xml = "<strings_resources><icon_page1>\
               <icon0_para name=Mario game_path=mario.zip />\
               </icon_page1></strings_resources>";
    let parsed = parse_icon_xml(xml).unwrap();
    assert_eq!(parsed, vec![GameEntry::new("Mario", "mario.zip")]);
}

#[test]
fn bom_and_foreign_declaration_are_tolerated() {
    let xml = "\u{FEFF}<?xml version='1.0' encoding='GB2312'?>\n\
               <strings_resources><icon_page1>\
               <icon0_para name=\"A\" game_path=\"a.zip\"/>\
               </icon_page1></strings_resources>";
    assert_eq!(parse_icon_xml(xml).unwrap().len(), 1);
}

#[test]
fn empty_game_path_slots_are_skipped() {
    let xml = r#"<strings_resources><icon_page1>
        <icon0_para name="Empty" game_path="" />
        <icon1_para name="NoPath" />
        <icon2_para name="Real" game_path="real.zip" />
        </icon_page1></strings_resources>"#;
    let parsed = parse_icon_xml(xml).unwrap();
    assert_eq!(parsed, vec![GameEntry::new("Real", "real.zip")]);
}

#[test]
fn non_page_children_are_ignored() {
    let xml = r#"<strings_resources>
        <icon_para game_list_total="1" />
        <other><icon0_para name="X" game_path="x.zip" /></other>
        <icon_page1><icon0_para name="Y" game_path="y.zip" /></icon_page1>
        </strings_resources>"#;
    let parsed = parse_icon_xml(xml).unwrap();
    assert_eq!(parsed, vec![GameEntry::new("Y", "y.zip")]);
}

#[test]
fn escaped_attributes_are_unescaped() {
    let xml = r#"<strings_resources><icon_page1>
        <icon0_para name="Tom &amp; Jerry &quot;Deluxe&quot;" game_path="t&amp;j.zip" />
        </icon_page1></strings_resources>"#;
    let parsed = parse_icon_xml(xml).unwrap();
    assert_eq!(parsed[0].name, "Tom & Jerry \"Deluxe\"");
    assert_eq!(parsed[0].game_path, "t&j.zip");
}

#[test]
fn wrong_root_is_rejected() {
    let err = parse_icon_xml("<gameList><game/></gameList>").unwrap_err();
    assert!(matches!(err, FormatError::Structure(_)));
}

#[test]
fn missing_root_is_rejected() {
    assert!(matches!(
        parse_icon_xml("just some text"),
        Err(FormatError::Structure(_))
    ));
    assert!(parse_icon_xml("").is_err());
}

#[test]
fn unbalanced_document_is_rejected() {
    assert!(parse_icon_xml("<strings_resources><icon_page1>").is_err());
    assert!(parse_icon_xml("<strings_resources></icon_page1></strings_resources>").is_err());
}

#[test]
fn export_layout_is_exact() {
    let xml = export_icon_xml(&[GameEntry::new("Tom & Jerry", "t'j.zip")]);
    assert_eq!(
        xml,
        "<?xml version=\"1.0\"?>\n\
         <strings_resources>\n  \
         <icon_para game_list_total=\"1\" />\n  \
         <icon_page1>\n    \
         <icon0_para name=\"Tom &amp; Jerry\" game_path=\"t&apos;j.zip\" />\n  \
         </icon_page1>\n\
         </strings_resources>\n"
    );
}

#[test]
fn export_of_empty_list_has_no_pages() {
    let xml = export_icon_xml(&[]);
    assert!(xml.contains("game_list_total=\"0\""));
    assert!(!xml.contains("icon_page"));
    assert!(parse_icon_xml(&xml).unwrap().is_empty());
}

#[test]
fn export_pages_hold_eight_slots() {
    for n in [1, 7, 8, 9, 16, 17] {
        let xml = export_icon_xml(&entries(n));
        let pages = xml.matches("<icon_page").count();
        assert_eq!(pages, page_count(n), "page count for {n} entries");

        let last_page = format!("<icon_page{pages}>");
        let tail = &xml[xml.find(&last_page).unwrap()..];
        let expected_last = if n % SLOTS_PER_PAGE == 0 { SLOTS_PER_PAGE } else { n % SLOTS_PER_PAGE };
        assert_eq!(tail.matches("_para name=").count(), expected_last);
    }
}

#[test]
fn slot_numbers_restart_on_each_page() {
    let xml = export_icon_xml(&entries(9));
    assert!(xml.contains("<icon7_para name=\"8.Game 8\""));
    assert!(xml.contains("<icon_page2>\n    <icon0_para name=\"9.Game 9\""));
    assert!(!xml.contains("icon8_para"));
}

#[test]
fn export_skips_playlist_only_fields() {
    let entry = GameEntry::from_rom_path("Mario", "/sdcard/roms/NES/mario.nes")
        .with_core_path("/cores/fceumm_libretro.so")
        .with_db_name("NES.lpl");
    let xml = export_icon_xml(&[entry]);
    assert!(!xml.contains("/sdcard"));
    assert!(!xml.contains("fceumm"));
    assert!(!xml.contains("NES.lpl"));
}

#[test]
fn codec_trait_round_trip() {
    let codec = IconXmlCodec;
    let list = entries(10);
    let text = codec.export(&list, &PlaylistMeta::default());
    let parsed = codec.parse(&text).unwrap();
    assert_eq!(parsed.entries, list);
    assert!(parsed.meta.is_empty());
    assert!(parsed.warnings.is_empty());
}
