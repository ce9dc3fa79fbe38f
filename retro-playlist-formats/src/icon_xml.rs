//! Paged icon-resource XML (`game_strings_*.xml`).
//!
//! ```text
//! <strings_resources>
//!   <icon_para game_list_total="9" />
//!   <icon_page1>
//!     <icon0_para name="..." game_path="..." />
//!     ... up to icon7_para
//!   </icon_page1>
//!   <icon_page2> ... </icon_page2>
//! </strings_resources>
//! ```

use quick_xml::events::{BytesStart, Event};
use quick_xml::reader::Reader;

use retro_playlist_core::{GameEntry, PlaylistMeta};

use crate::error::FormatError;
use crate::repair::repair_markup;
use crate::{ParsedPlaylist, PlaylistCodec};

/// Slots per icon page on the device menu.
pub const SLOTS_PER_PAGE: usize = 8;

const ROOT_TAG: &str = "strings_resources";
const PAGE_PREFIX: &str = "icon_page";

/// Codec for the paged icon XML format.
pub struct IconXmlCodec;

impl PlaylistCodec for IconXmlCodec {
    fn name(&self) -> &'static str {
        "Icon XML"
    }

    fn parse(&self, text: &str) -> Result<ParsedPlaylist, FormatError> {
        Ok(ParsedPlaylist {
            entries: parse_icon_xml(text)?,
            ..Default::default()
        })
    }

    /// The icon format has no playlist-wide fields, so `meta` is unused.
    fn export(&self, entries: &[GameEntry], _meta: &PlaylistMeta) -> String {
        export_icon_xml(entries)
    }
}

/// Parse icon XML into entries, repairing common markup damage first.
pub fn parse_icon_xml(text: &str) -> Result<Vec<GameEntry>, FormatError> {
    let repaired = repair_markup(text);
    let mut xml = Reader::from_str(&repaired);
    xml.config_mut().trim_text(true);

    let mut entries = Vec::new();
    let mut depth = 0usize;
    let mut saw_root = false;
    let mut in_page = false;

    loop {
        match xml.read_event()? {
            Event::Start(ref e) => {
                visit_element(e, depth, in_page, &mut saw_root, &mut entries)?;
                if depth == 1 {
                    in_page = is_page(e);
                }
                depth += 1;
            }
            Event::Empty(ref e) => {
                visit_element(e, depth, in_page, &mut saw_root, &mut entries)?;
            }
            Event::End(_) => {
                depth = depth
                    .checked_sub(1)
                    .ok_or_else(|| FormatError::structure("unexpected closing tag"))?;
                if depth == 1 {
                    in_page = false;
                }
            }
            Event::Eof => break,
            _ => {}
        }
    }

    if depth != 0 {
        return Err(FormatError::structure(format!(
            "document ended with {depth} unclosed element(s)"
        )));
    }
    if !saw_root {
        return Err(FormatError::structure(format!(
            "missing <{ROOT_TAG}> root element"
        )));
    }

    Ok(entries)
}

fn visit_element(
    e: &BytesStart<'_>,
    depth: usize,
    in_page: bool,
    saw_root: &mut bool,
    entries: &mut Vec<GameEntry>,
) -> Result<(), FormatError> {
    match depth {
        0 => {
            let tag = tag_name(e);
            if *saw_root {
                return Err(FormatError::structure(format!(
                    "unexpected second root element <{tag}>"
                )));
            }
            if tag != ROOT_TAG {
                return Err(FormatError::structure(format!(
                    "root element is <{tag}>, expected <{ROOT_TAG}>"
                )));
            }
            *saw_root = true;
        }
        2 if in_page => {
            if let Some(entry) = parse_slot(e)? {
                entries.push(entry);
            }
        }
        _ => {}
    }
    Ok(())
}

/// Read one slot's `name` / `game_path` attributes. Slots without a ROM are skipped.
fn parse_slot(e: &BytesStart<'_>) -> Result<Option<GameEntry>, FormatError> {
    let mut name = String::new();
    let mut game_path = String::new();

    for attr in e.attributes() {
        let attr = attr?;
        match attr.key.as_ref() {
            b"name" => name = attr.unescape_value()?.into_owned(),
            b"game_path" => game_path = attr.unescape_value()?.into_owned(),
            _ => {}
        }
    }

    if game_path.is_empty() {
        log::debug!("Skipping icon slot <{}> with empty game_path", tag_name(e));
        return Ok(None);
    }
    Ok(Some(GameEntry::new(name, game_path)))
}

fn is_page(e: &BytesStart<'_>) -> bool {
    e.name().as_ref().starts_with(PAGE_PREFIX.as_bytes())
}

fn tag_name(e: &BytesStart<'_>) -> String {
    String::from_utf8_lossy(e.name().as_ref()).to_string()
}

/// Serialize entries as icon XML, eight slots per page.
///
/// Output is deterministic: two-space indentation, LF line endings and a
/// trailing newline. Playlist-only fields are never written.
pub fn export_icon_xml(entries: &[GameEntry]) -> String {
    let mut xml = String::new();
    xml.push_str("<?xml version=\"1.0\"?>\n");
    xml.push_str("<strings_resources>\n");
    xml.push_str(&format!(
        "  <icon_para game_list_total=\"{}\" />\n",
        entries.len()
    ));

    for (page_idx, page) in entries.chunks(SLOTS_PER_PAGE).enumerate() {
        let page_no = page_idx + 1;
        xml.push_str(&format!("  <{PAGE_PREFIX}{page_no}>\n"));
        for (slot, entry) in page.iter().enumerate() {
            xml.push_str(&format!(
                "    <icon{slot}_para name=\"{}\" game_path=\"{}\" />\n",
                escape_xml(&entry.name),
                escape_xml(&entry.game_path),
            ));
        }
        xml.push_str(&format!("  </{PAGE_PREFIX}{page_no}>\n"));
    }

    xml.push_str("</strings_resources>\n");
    xml
}

/// Number of pages needed for `count` entries.
pub fn page_count(count: usize) -> usize {
    count.div_ceil(SLOTS_PER_PAGE)
}

fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}

#[cfg(test)]
#[path = "tests/icon_xml_tests.rs"]
mod tests;
