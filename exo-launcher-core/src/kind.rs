use std::path::Path;

use serde::{Deserialize, Serialize};

/// The two eXo collection flavours this launcher understands.
///
/// A collection's kind is never declared on disk; it is guessed from the
/// root path (see [`CollectionKind::classify`]). The kind also owns the
/// on-disk conventions that differ between the two archives: where the
/// extracted game folders live and which platform catalog to read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CollectionKind {
    Dos,
    Win3x,
}

/// All kinds, in the order game folders are probed.
const ALL_KINDS: &[CollectionKind] = &[CollectionKind::Dos, CollectionKind::Win3x];

impl CollectionKind {
    /// Classify a collection root by its path string.
    ///
    /// Anything with "Win3x" in the path is a Windows 3.x collection,
    /// everything else is treated as DOS.
    pub fn classify(root: &Path) -> Self {
        if root.to_string_lossy().contains("Win3x") {
            Self::Win3x
        } else {
            Self::Dos
        }
    }

    /// Canonical short name used for CLI output and serialization.
    pub fn short_name(&self) -> &'static str {
        match self {
            Self::Dos => "dos",
            Self::Win3x => "win3x",
        }
    }

    /// Name of the archive this kind comes from.
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Dos => "eXoDOS",
            Self::Win3x => "eXoWin3x",
        }
    }

    /// Path segments, relative to the collection root, of the directory
    /// holding one extracted folder per game.
    pub fn games_subdir(&self) -> &'static [&'static str] {
        match self {
            Self::Dos => &["eXo", "eXoDOS", "!dos"],
            Self::Win3x => &["eXo", "eXoWin3x", "!win3x"],
        }
    }

    /// Platform catalog file names inside `xml/`, in lookup order.
    pub fn catalog_files(&self) -> &'static [&'static str] {
        match self {
            Self::Dos => &["MS-DOS.xml"],
            Self::Win3x => &["Windows 3x.xml", "MS-DOS.xml"],
        }
    }

    /// The catalog every install has, whatever its kind. Named in the
    /// missing-catalog error.
    pub fn required_catalog_file(&self) -> &'static str {
        "MS-DOS.xml"
    }

    /// Both kinds, DOS first.
    pub fn all() -> &'static [CollectionKind] {
        ALL_KINDS
    }
}

impl std::fmt::Display for CollectionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Error returned when a string cannot be parsed into a `CollectionKind`.
#[derive(Debug, Clone)]
pub struct CollectionKindParseError(pub String);

impl std::fmt::Display for CollectionKindParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "unknown collection kind: '{}'", self.0)
    }
}

impl std::error::Error for CollectionKindParseError {}

impl std::str::FromStr for CollectionKind {
    type Err = CollectionKindParseError;

    /// Parse a kind from its short or display name (case-insensitive).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.to_lowercase();
        ALL_KINDS
            .iter()
            .copied()
            .find(|k| k.short_name() == lower || k.display_name().to_lowercase() == lower)
            .ok_or_else(|| CollectionKindParseError(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classify_by_path_substring() {
        assert_eq!(
            CollectionKind::classify(Path::new("/home/me/eXoWin3x")),
            CollectionKind::Win3x
        );
        assert_eq!(
            CollectionKind::classify(Path::new("/mnt/games/eXoDOS")),
            CollectionKind::Dos
        );
        // Anything unrecognised falls back to DOS.
        assert_eq!(
            CollectionKind::classify(Path::new("/data/retro")),
            CollectionKind::Dos
        );
    }

    #[test]
    fn classify_is_case_sensitive() {
        assert_eq!(
            CollectionKind::classify(Path::new("/games/exowin3x")),
            CollectionKind::Dos
        );
    }

    #[test]
    fn dos_is_probed_first() {
        assert_eq!(CollectionKind::all()[0], CollectionKind::Dos);
        assert_eq!(CollectionKind::all().len(), 2);
    }

    #[test]
    fn parse_short_and_display_names() {
        assert_eq!("dos".parse::<CollectionKind>().unwrap(), CollectionKind::Dos);
        assert_eq!("eXoWin3x".parse::<CollectionKind>().unwrap(), CollectionKind::Win3x);
        assert!("amiga".parse::<CollectionKind>().is_err());
    }

    #[test]
    fn required_catalog_is_always_looked_up() {
        for kind in CollectionKind::all() {
            assert!(kind.catalog_files().contains(&kind.required_catalog_file()));
            assert_eq!(kind.required_catalog_file(), "MS-DOS.xml");
        }
    }

    #[test]
    fn win3x_falls_back_to_dos_catalog() {
        assert_eq!(
            CollectionKind::Win3x.catalog_files(),
            &["Windows 3x.xml", "MS-DOS.xml"]
        );
    }
}
