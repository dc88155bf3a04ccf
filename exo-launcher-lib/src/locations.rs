//! Discovery of installed collections.
//!
//! A collection root is any folder with an `xml/` subdirectory. The scan
//! probes a fixed list of likely install locations, then any extra paths
//! from settings, and never fails: a candidate that cannot be probed is
//! simply not a collection.

use std::io;
use std::path::{Path, PathBuf};

use exo_launcher_core::CollectionLocation;

use crate::settings;

/// Collection folder names probed under each home-relative parent.
const COLLECTION_DIRS: &[&str] = &["eXoDOS", "eXoWin3x"];

/// Home-relative parents, probed in order. Empty means the home folder.
const HOME_PARENTS: &[&[&str]] = &[&[], &["Downloads"], &["Games"]];

/// Absolute mount points probed after the home-relative candidates.
pub const MOUNT_CANDIDATES: &[&str] = &["/mnt/games/eXoDOS", "/mnt/games/eXoWin3x"];

/// The fixed, ordered candidate list for a given home folder.
pub fn candidate_paths(home: Option<&Path>) -> Vec<PathBuf> {
    let mut candidates = Vec::new();

    if let Some(home) = home {
        for parent in HOME_PARENTS {
            for dir in COLLECTION_DIRS {
                let mut path = home.to_path_buf();
                path.extend(parent.iter());
                path.push(dir);
                candidates.push(path);
            }
        }
    }

    candidates.extend(MOUNT_CANDIDATES.iter().map(PathBuf::from));
    candidates
}

/// Whether `root/xml` exists and is a directory.
///
/// A missing path is `Ok(false)`; other probe failures are returned.
fn has_xml_dir(root: &Path) -> io::Result<bool> {
    match std::fs::metadata(root.join("xml")) {
        Ok(meta) => Ok(meta.is_dir()),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(false),
        Err(e) => Err(e),
    }
}

/// Probe each candidate in order and return the ones that are collections.
///
/// Duplicate candidates are reported once.
pub fn scan_candidates(candidates: &[PathBuf]) -> Vec<CollectionLocation> {
    let mut found: Vec<CollectionLocation> = Vec::new();

    for candidate in candidates {
        if found.iter().any(|loc| &loc.root_path == candidate) {
            continue;
        }
        match has_xml_dir(candidate) {
            Ok(true) => found.push(CollectionLocation::new(candidate.clone())),
            Ok(false) => {}
            Err(e) => log::debug!("Skipping {}: {e}", candidate.display()),
        }
    }

    found
}

/// Find collections in the usual install locations.
///
/// An empty result means nothing is installed where we looked.
pub fn scan_known_locations() -> Vec<CollectionLocation> {
    let mut candidates = candidate_paths(dirs::home_dir().as_deref());
    candidates.extend(settings::load_extra_scan_paths());
    let found = scan_candidates(&candidates);
    log::debug!(
        "Probed {} candidate paths, found {} collections",
        candidates.len(),
        found.len()
    );
    found
}

/// Check a user-chosen folder, returning its location if it is a collection.
pub fn validate_selected_folder(path: &Path) -> Option<CollectionLocation> {
    match has_xml_dir(path) {
        Ok(true) => Some(CollectionLocation::new(path)),
        Ok(false) => None,
        Err(e) => {
            log::debug!("Cannot probe {}: {e}", path.display());
            None
        }
    }
}
