//! Game folder contents as served to the emulator.

use std::path::{Component, Path};

use base64::Engine;
use exo_launcher_core::GameFile;
use walkdir::WalkDir;

use crate::error::LauncherError;

/// `/`-joined path of `path` relative to `root`.
fn relative_name(root: &Path, path: &Path) -> String {
    let relative = path.strip_prefix(root).unwrap_or(path);
    relative
        .components()
        .filter_map(|c| match c {
            Component::Normal(part) => Some(part.to_string_lossy()),
            _ => None,
        })
        .collect::<Vec<_>>()
        .join("/")
}

/// List every file under `folder`, recursively, sorted by name within each
/// directory. Directories themselves are not listed.
pub fn list_game_files(folder: &Path) -> Result<Vec<GameFile>, LauncherError> {
    let meta = std::fs::metadata(folder)
        .map_err(|e| LauncherError::list_files(folder, e.to_string()))?;
    if !meta.is_dir() {
        return Err(LauncherError::NotADirectory(folder.to_path_buf()));
    }

    let mut files = Vec::new();
    let walker = WalkDir::new(folder)
        .min_depth(1)
        .follow_links(true)
        .sort_by_file_name();

    for entry in walker {
        let entry = entry.map_err(|e| {
            let path = e.path().unwrap_or(folder).to_path_buf();
            LauncherError::list_files(path, e.to_string())
        })?;
        if entry.file_type().is_dir() {
            continue;
        }
        let size = entry
            .metadata()
            .map_err(|e| LauncherError::list_files(entry.path(), e.to_string()))?
            .len();
        files.push(GameFile {
            name: relative_name(folder, entry.path()),
            path: entry.path().to_path_buf(),
            size,
        });
    }

    log::debug!("Listed {} files in {}", files.len(), folder.display());
    Ok(files)
}

/// Read a whole file and encode it as standard base64.
pub fn read_game_file_as_base64(path: &Path) -> Result<String, LauncherError> {
    let bytes = std::fs::read(path).map_err(|source| LauncherError::ReadFile {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(base64::engine::general_purpose::STANDARD.encode(bytes))
}
