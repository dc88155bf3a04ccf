use std::collections::HashMap;
use std::io::BufRead;
use std::path::Path;

use exo_launcher_core::{GameRecord, RawCatalogEntry};
use quick_xml::events::Event;
use quick_xml::reader::Reader;

use crate::error::CatalogError;
use crate::resolve::resolve_entry;

/// Root element of a LaunchBox platform catalog.
const ROOT_TAG: &str = "LaunchBox";
/// Game entries are direct children of the root.
const GAME_TAG: &str = "Game";

/// Result of loading a catalog against a collection root.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CatalogLoad {
    /// Resolved games, in catalog order
    pub games: Vec<GameRecord>,
    /// Entries skipped because no game folder could be found for them
    pub dropped: usize,
}

/// Child elements of one `<Game>` node: tag name → text of every matching
/// child, in document order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CatalogNode {
    children: HashMap<String, Vec<String>>,
}

impl CatalogNode {
    fn push(&mut self, tag: String, text: String) {
        self.children.entry(tag).or_default().push(text);
    }

    /// Text of the first child named `tag`, treating empty text as absent.
    pub fn first_child_text(&self, tag: &str) -> Option<&str> {
        self.children
            .get(tag)?
            .first()
            .map(String::as_str)
            .filter(|text| !text.is_empty())
    }

    fn text_or(&self, tag: &str, default: &str) -> String {
        self.first_child_text(tag).unwrap_or(default).to_string()
    }

    /// Convert to a raw entry, substituting defaults for absent fields.
    pub fn to_entry(&self) -> RawCatalogEntry {
        let defaults = RawCatalogEntry::default();
        RawCatalogEntry {
            title: self.text_or("Title", &defaults.title),
            developer: self.text_or("Developer", &defaults.developer),
            publisher: self.text_or("Publisher", &defaults.publisher),
            release_date: self.text_or("ReleaseDate", &defaults.release_date),
            genre: self.text_or("Genre", &defaults.genre),
            series: self.text_or("Series", &defaults.series),
            notes: self.text_or("Notes", &defaults.notes),
            cover_image_path: self.text_or("CoverImagePath", &defaults.cover_image_path),
            background_image_path: self
                .text_or("BackgroundImagePath", &defaults.background_image_path),
            application_path: self.text_or("ApplicationPath", &defaults.application_path),
        }
    }
}

/// Parse a platform catalog into raw entries, preserving document order.
///
/// A document whose root is not `<LaunchBox>`, or a root with no `<Game>`
/// children, yields an empty list. Documents that are not well-formed XML
/// are an error.
pub fn parse_catalog<R: BufRead>(reader: R) -> Result<Vec<RawCatalogEntry>, CatalogError> {
    Ok(parse_nodes(reader)?.iter().map(CatalogNode::to_entry).collect())
}

/// Parse a platform catalog from a file path.
pub fn parse_catalog_file(path: &Path) -> Result<Vec<RawCatalogEntry>, CatalogError> {
    let file = std::fs::File::open(path).map_err(|e| CatalogError::io(path, e))?;
    let reader = std::io::BufReader::new(file);
    parse_catalog(reader)
}

/// Parse a catalog and resolve every entry against `collection_root`.
///
/// Entries with no usable application path, or whose folder exists under
/// neither layout, are counted in [`CatalogLoad::dropped`] and otherwise
/// ignored.
pub fn load_catalog(xml_file: &Path, collection_root: &Path) -> Result<CatalogLoad, CatalogError> {
    let entries = parse_catalog_file(xml_file)?;
    let mut load = CatalogLoad::default();

    for entry in entries {
        let title = entry.title.clone();
        match resolve_entry(entry, collection_root) {
            Some(record) => load.games.push(record),
            None => {
                log::debug!("No game folder for '{title}', skipping");
                load.dropped += 1;
            }
        }
    }

    Ok(load)
}

fn tag_name(name: quick_xml::name::QName<'_>) -> String {
    String::from_utf8_lossy(name.as_ref()).to_string()
}

/// Only whitespace (and a leading byte-order mark) may sit outside the root.
fn reject_outside_text(text: &str) -> Result<(), CatalogError> {
    if text.trim_matches(|c: char| c.is_whitespace() || c == '\u{feff}').is_empty() {
        Ok(())
    } else {
        Err(CatalogError::malformed("text outside the root element"))
    }
}

fn parse_nodes<R: BufRead>(reader: R) -> Result<Vec<CatalogNode>, CatalogError> {
    let mut xml = Reader::from_reader(reader);
    xml.config_mut().trim_text(true);

    let mut buf = Vec::new();
    let mut nodes = Vec::new();
    let mut seen_root = false;

    // Open elements, outermost first. Depth 1 is the root, depth 2 a game,
    // depth 3 a game field.
    let mut stack: Vec<String> = Vec::new();
    let mut current: Option<CatalogNode> = None;
    let mut field_text: Option<String> = None;

    loop {
        match xml.read_event_into(&mut buf)? {
            Event::Start(ref e) => {
                let name = tag_name(e.name());
                match stack.len() {
                    0 => {
                        if seen_root {
                            return Err(CatalogError::malformed("multiple root elements"));
                        }
                        seen_root = true;
                    }
                    1 if stack[0] == ROOT_TAG && name == GAME_TAG => {
                        current = Some(CatalogNode::default());
                    }
                    2 if current.is_some() => field_text = Some(String::new()),
                    _ => {}
                }
                stack.push(name);
            }
            Event::Empty(ref e) => {
                let name = tag_name(e.name());
                match stack.len() {
                    0 => {
                        if seen_root {
                            return Err(CatalogError::malformed("multiple root elements"));
                        }
                        seen_root = true;
                    }
                    1 if stack[0] == ROOT_TAG && name == GAME_TAG => {
                        nodes.push(CatalogNode::default());
                    }
                    2 => {
                        if let Some(node) = current.as_mut() {
                            node.push(name, String::new());
                        }
                    }
                    _ => {}
                }
            }
            Event::Text(ref e) => {
                if stack.is_empty() {
                    reject_outside_text(&String::from_utf8_lossy(e))?;
                } else if stack.len() == 3 {
                    if let Some(text) = field_text.as_mut() {
                        text.push_str(&e.unescape()?);
                    }
                }
            }
            Event::CData(ref e) => {
                if stack.is_empty() {
                    reject_outside_text(&String::from_utf8_lossy(e))?;
                } else if stack.len() == 3 {
                    if let Some(text) = field_text.as_mut() {
                        text.push_str(&String::from_utf8_lossy(e));
                    }
                }
            }
            Event::End(_) => {
                let Some(name) = stack.pop() else {
                    return Err(CatalogError::malformed("unexpected closing tag"));
                };
                match stack.len() {
                    2 => {
                        if let (Some(node), Some(text)) = (current.as_mut(), field_text.take()) {
                            node.push(name, text.trim().to_string());
                        }
                    }
                    1 if name == GAME_TAG => {
                        if let Some(node) = current.take() {
                            nodes.push(node);
                        }
                    }
                    _ => {}
                }
            }
            Event::Eof => break,
            _ => {}
        }
        buf.clear();
    }

    if !seen_root {
        return Err(CatalogError::malformed("document has no root element"));
    }
    if let Some(open) = stack.last() {
        return Err(CatalogError::malformed(format!(
            "unexpected end of document inside <{open}>"
        )));
    }

    Ok(nodes)
}

#[cfg(test)]
#[path = "tests/catalog_tests.rs"]
mod tests;
