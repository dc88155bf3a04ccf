//! `dosbox.conf` reader.
//!
//! INI-like and line oriented. Each line is classified on its own, then fed
//! through a two-state machine that tracks the open section.

use exo_launcher_core::DosboxConf;

/// What a single trimmed line of a conf file is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfLine<'a> {
    Blank,
    Comment,
    /// `[name]`, with the name lowercased and brackets stripped
    Section(String),
    /// `key = value`, split on the first `=` with both sides trimmed
    Entry { key: &'a str, value: &'a str },
    /// Anything else (no `=`, or an empty key)
    Other,
}

/// Parser state: whether a section header has been seen yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfState {
    NoSection,
    InSection(String),
}

impl ConfState {
    /// State after consuming `line`. Only section headers move the machine;
    /// an empty header (`[]`) closes the current section.
    pub fn next(self, line: &ConfLine<'_>) -> ConfState {
        match line {
            ConfLine::Section(name) if name.is_empty() => ConfState::NoSection,
            ConfLine::Section(name) => ConfState::InSection(name.clone()),
            _ => self,
        }
    }
}

pub fn classify_line(raw: &str) -> ConfLine<'_> {
    let line = raw.trim();
    if line.is_empty() {
        return ConfLine::Blank;
    }
    if line.starts_with('#') {
        return ConfLine::Comment;
    }
    if let Some(name) = line.strip_prefix('[').and_then(|l| l.strip_suffix(']')) {
        return ConfLine::Section(name.to_lowercase());
    }
    match line.split_once('=') {
        Some((key, value)) if !key.trim().is_empty() => ConfLine::Entry {
            key: key.trim(),
            value: value.trim(),
        },
        _ => ConfLine::Other,
    }
}

/// Parse conf text into section → key → value.
///
/// Entries before the first section header are ignored. A repeated header
/// starts that section over.
pub fn parse_dosbox_conf(text: &str) -> DosboxConf {
    let mut conf = DosboxConf::new();
    let mut state = ConfState::NoSection;

    for raw in text.lines() {
        let line = classify_line(raw);
        match (&state, &line) {
            (_, ConfLine::Section(name)) if !name.is_empty() => conf.begin_section(name.as_str()),
            (ConfState::InSection(section), ConfLine::Entry { key, value }) => {
                conf.insert(section.as_str(), *key, *value)
            }
            _ => {}
        }
        state = state.next(&line);
    }

    conf
}
