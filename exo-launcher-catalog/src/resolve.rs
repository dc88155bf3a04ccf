//! Mapping catalog entries to extracted game folders.
//!
//! The catalog never says whether a game was extracted under the DOS or the
//! Windows 3.x hierarchy, so resolution builds one candidate per layout and
//! takes the first that exists. Candidate construction is pure; only
//! [`resolve_entry`] touches the filesystem.

use std::path::{Path, PathBuf};

use exo_launcher_core::{CollectionKind, GameRecord, RawCatalogEntry};

/// Name of the game folder implied by a declared application path: the last
/// segment of its parent directory.
///
/// Both `/` and `\` separate segments. Returns `None` when the path has no
/// parent directory or the parent segment is empty, `.` or `..`.
pub fn game_folder_name(application_path: &str) -> Option<&str> {
    let mut segments = application_path.rsplit(['/', '\\']);
    segments.next()?;
    let folder = segments.next()?;
    match folder {
        "" | "." | ".." => None,
        name => Some(name),
    }
}

/// Candidate game folders for a declared application path, in probe order
/// (DOS layout first).
pub fn candidate_folders(application_path: &str, collection_root: &Path) -> Vec<PathBuf> {
    let Some(folder) = game_folder_name(application_path) else {
        return Vec::new();
    };

    CollectionKind::all()
        .iter()
        .map(|kind| {
            let mut path = collection_root.to_path_buf();
            path.extend(kind.games_subdir());
            path.push(folder);
            path
        })
        .collect()
}

/// Resolve an entry to a game record, or `None` if no candidate folder
/// exists.
pub fn resolve_entry(entry: RawCatalogEntry, collection_root: &Path) -> Option<GameRecord> {
    let folder = candidate_folders(&entry.application_path, collection_root)
        .into_iter()
        .find(|candidate| candidate.is_dir())?;
    Some(entry.into_record(folder))
}
