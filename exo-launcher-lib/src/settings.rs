//! Shared launcher settings (current collection, extra scan paths).
//!
//! The settings file is `~/.config/exo-launcher/settings.toml`. Every
//! function has a `_at` twin taking an explicit file path; the plain ones
//! use [`settings_path`].
//!
//! ```toml
//! [collection]
//! current_root = "/home/me/eXoDOS"
//!
//! [scan]
//! extra_paths = ["/media/usb/eXoWin3x"]
//! ```

use std::io;
use std::path::{Path, PathBuf};

/// Canonical path to the settings file: `~/.config/exo-launcher/settings.toml`.
pub fn settings_path() -> PathBuf {
    let config = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
    config.join("exo-launcher").join("settings.toml")
}

fn load_doc(settings: &Path) -> Option<toml::Value> {
    let contents = std::fs::read_to_string(settings).ok()?;
    contents.parse().ok()
}

/// Resolve the collection root using a priority chain:
///
/// 1. CLI override (if `Some`)
/// 2. Saved `collection.current_root` in `settings.toml`
///
/// Returns `None` when neither is set; callers fall back to scanning.
pub fn resolve_collection_root(cli_override: Option<PathBuf>) -> Option<PathBuf> {
    cli_override.or_else(load_collection_root)
}

/// Read `collection.current_root` from `settings.toml`, if set.
pub fn load_collection_root() -> Option<PathBuf> {
    load_collection_root_at(&settings_path())
}

pub fn load_collection_root_at(settings: &Path) -> Option<PathBuf> {
    let doc = load_doc(settings)?;
    let root = doc.get("collection")?.get("current_root")?.as_str()?;
    if root.is_empty() {
        None
    } else {
        Some(PathBuf::from(root))
    }
}

/// Read `scan.extra_paths`, skipping entries that are not strings.
pub fn load_extra_scan_paths() -> Vec<PathBuf> {
    load_extra_scan_paths_at(&settings_path())
}

pub fn load_extra_scan_paths_at(settings: &Path) -> Vec<PathBuf> {
    let Some(doc) = load_doc(settings) else {
        return Vec::new();
    };
    doc.get("scan")
        .and_then(|scan| scan.get("extra_paths"))
        .and_then(|paths| paths.as_array())
        .map(|paths| {
            paths
                .iter()
                .filter_map(|p| p.as_str())
                .filter(|p| !p.is_empty())
                .map(PathBuf::from)
                .collect()
        })
        .unwrap_or_default()
}

/// Save (or clear) the current collection root in `settings.toml`.
pub fn save_collection_root(path: Option<&Path>) -> io::Result<()> {
    save_collection_root_at(&settings_path(), path)
}

/// Uses `toml::Value` for a surgical update so unrelated fields survive.
pub fn save_collection_root_at(settings: &Path, path: Option<&Path>) -> io::Result<()> {
    let mut doc =
        load_doc(settings).unwrap_or_else(|| toml::Value::Table(Default::default()));

    let table = doc
        .as_table_mut()
        .ok_or_else(|| io::Error::other("settings.toml root is not a table"))?;
    let collection = table
        .entry("collection")
        .or_insert_with(|| toml::Value::Table(Default::default()));
    let collection_table = collection
        .as_table_mut()
        .ok_or_else(|| io::Error::other("[collection] is not a table"))?;

    match path {
        Some(p) => {
            collection_table.insert(
                "current_root".to_string(),
                toml::Value::String(p.to_string_lossy().into_owned()),
            );
        }
        None => {
            collection_table.remove("current_root");
        }
    }

    // Write atomically
    if let Some(parent) = settings.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let serialized = toml::to_string_pretty(&doc).map_err(io::Error::other)?;
    let tmp = settings.with_extension("toml.tmp");
    std::fs::write(&tmp, &serialized)?;
    std::fs::rename(&tmp, settings)?;

    Ok(())
}

/// Load the full settings file as a pretty-printed TOML string for display.
pub fn load_settings_string() -> Option<String> {
    let doc = load_doc(&settings_path())?;
    toml::to_string_pretty(&doc).ok()
}
