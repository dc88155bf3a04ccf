use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub mod kind;
pub mod launch;
pub mod util;

pub use kind::{CollectionKind, CollectionKindParseError};
pub use launch::{DosboxConf, LaunchConfig};

/// Title used for catalog entries that carry no `<Title>`.
pub const UNKNOWN_TITLE: &str = "Unknown";

/// A discovered or user-selected collection root.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CollectionLocation {
    /// Top-level folder containing `xml/` and the `eXo/...` hierarchy
    pub root_path: PathBuf,
    pub kind: CollectionKind,
}

impl CollectionLocation {
    /// Build a location, classifying the kind from the path.
    pub fn new(root_path: impl Into<PathBuf>) -> Self {
        let root_path = root_path.into();
        let kind = CollectionKind::classify(&root_path);
        Self { root_path, kind }
    }

    /// The `xml/` metadata folder whose presence marks a collection root.
    pub fn xml_dir(&self) -> PathBuf {
        self.root_path.join("xml")
    }
}

/// One `<Game>` node from a platform catalog, before path resolution.
///
/// Every field except `title` defaults to an empty string when the catalog
/// omits it; `title` defaults to [`UNKNOWN_TITLE`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawCatalogEntry {
    pub title: String,
    pub developer: String,
    pub publisher: String,
    pub release_date: String,
    pub genre: String,
    pub series: String,
    pub notes: String,
    pub cover_image_path: String,
    pub background_image_path: String,
    /// Path to the launcher as declared by the catalog (often stale, often
    /// Windows-style). Only used to derive the game folder name.
    pub application_path: String,
}

impl Default for RawCatalogEntry {
    fn default() -> Self {
        Self {
            title: UNKNOWN_TITLE.to_string(),
            developer: String::new(),
            publisher: String::new(),
            release_date: String::new(),
            genre: String::new(),
            series: String::new(),
            notes: String::new(),
            cover_image_path: String::new(),
            background_image_path: String::new(),
            application_path: String::new(),
        }
    }
}

impl RawCatalogEntry {
    /// Consume the entry into a game record rooted at a resolved folder.
    pub fn into_record(self, folder_path: PathBuf) -> GameRecord {
        GameRecord {
            title: self.title,
            developer: self.developer,
            publisher: self.publisher,
            release_date: self.release_date,
            genre: self.genre,
            series: self.series,
            notes: self.notes,
            cover_image_path: self.cover_image_path,
            background_image_path: self.background_image_path,
            folder_path,
        }
    }
}

/// A catalog entry resolved to an existing game folder.
///
/// `folder_path` pointed at an existing directory when the record was
/// produced; nothing guarantees it still does.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameRecord {
    pub title: String,
    pub developer: String,
    pub publisher: String,
    pub release_date: String,
    pub genre: String,
    pub series: String,
    pub notes: String,
    pub cover_image_path: String,
    pub background_image_path: String,
    pub folder_path: PathBuf,
}

impl GameRecord {
    /// Identity key used for list keys and de-duplication.
    pub fn key(&self) -> &Path {
        &self.folder_path
    }

    /// Four-digit year from the release date, if it starts with one.
    ///
    /// Catalog dates look like `1993-12-10T00:00:00-08:00`, or just `1993`.
    pub fn release_year(&self) -> Option<&str> {
        let year = self.release_date.get(..4)?;
        year.bytes().all(|b| b.is_ascii_digit()).then_some(year)
    }
}

/// A file inside a game folder, as handed to the emulator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameFile {
    /// Path relative to the game folder, `/`-separated
    pub name: String,
    /// Absolute path on disk
    pub path: PathBuf,
    /// Size in bytes
    pub size: u64,
}

#[cfg(test)]
#[path = "tests/record_tests.rs"]
mod tests;
