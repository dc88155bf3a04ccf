use std::collections::BTreeMap;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Parsed `dosbox.conf`: lowercase section name → key → raw value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DosboxConf(BTreeMap<String, BTreeMap<String, String>>);

impl DosboxConf {
    pub fn new() -> Self {
        Self::default()
    }

    /// Open a section, discarding any keys a previous header with the same
    /// name collected.
    pub fn begin_section(&mut self, name: impl Into<String>) {
        self.0.insert(name.into(), BTreeMap::new());
    }

    /// Set a key in a section, creating the section if needed.
    pub fn insert(
        &mut self,
        section: impl Into<String>,
        key: impl Into<String>,
        value: impl Into<String>,
    ) {
        self.0
            .entry(section.into())
            .or_default()
            .insert(key.into(), value.into());
    }

    pub fn section(&self, name: &str) -> Option<&BTreeMap<String, String>> {
        self.0.get(name)
    }

    pub fn get(&self, section: &str, key: &str) -> Option<&str> {
        self.0.get(section)?.get(key).map(String::as_str)
    }

    /// Section names in sorted order.
    pub fn sections(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }
}

/// Everything the emulator window needs to start one game.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LaunchConfig {
    /// First real program invocation from `dosbox.bat`, or empty
    pub start_command: String,
    pub dosbox_conf: DosboxConf,
    pub game_path: PathBuf,
}

impl LaunchConfig {
    /// An empty config for a folder with neither launch file.
    pub fn empty(game_path: impl Into<PathBuf>) -> Self {
        Self {
            start_command: String::new(),
            dosbox_conf: DosboxConf::new(),
            game_path: game_path.into(),
        }
    }
}
