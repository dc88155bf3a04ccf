//! Loading a collection's platform catalog into game records.

use std::path::{Path, PathBuf};

use exo_launcher_catalog::{CatalogLoad, load_catalog};
use exo_launcher_core::{CollectionLocation, GameRecord};

use crate::error::LauncherError;

/// Path of the platform catalog to read for a location.
///
/// Tries the kind's catalog files in order; if none exists the error names
/// `MS-DOS.xml`, the catalog every install ships.
pub fn catalog_path(location: &CollectionLocation) -> Result<PathBuf, LauncherError> {
    let xml_dir = location.xml_dir();
    location
        .kind
        .catalog_files()
        .iter()
        .map(|name| xml_dir.join(name))
        .find(|path| path.is_file())
        .ok_or_else(|| {
            let file_name = location.kind.required_catalog_file();
            LauncherError::CatalogMissing {
                file_name: file_name.to_string(),
                path: xml_dir.join(file_name),
            }
        })
}

/// Read and resolve the whole catalog of a collection.
///
/// Always a fresh load; nothing is cached between calls.
pub fn load_collection(location: &CollectionLocation) -> Result<CatalogLoad, LauncherError> {
    let path = catalog_path(location)?;
    log::debug!("Loading catalog {}", path.display());

    let load = load_catalog(&path, &location.root_path)?;
    log::debug!(
        "Resolved {} games from {} ({} entries had no game folder)",
        load.games.len(),
        path.display(),
        load.dropped,
    );
    Ok(load)
}

/// The collection currently shown to the user.
///
/// Loads replace the game list only when they succeed, so a broken catalog
/// never clears a list that was already showing.
#[derive(Debug, Default)]
pub struct CollectionSession {
    location: Option<CollectionLocation>,
    games: Vec<GameRecord>,
    dropped: usize,
}

impl CollectionSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load `location`, making it current on success.
    pub fn load(&mut self, location: CollectionLocation) -> Result<&[GameRecord], LauncherError> {
        let load = load_collection(&location)?;
        self.location = Some(location);
        self.games = load.games;
        self.dropped = load.dropped;
        Ok(&self.games)
    }

    /// Reload the current location from scratch. With no current location
    /// there is nothing to load and the (empty) list is returned.
    pub fn refresh(&mut self) -> Result<&[GameRecord], LauncherError> {
        match self.location.clone() {
            Some(location) => self.load(location),
            None => Ok(&self.games),
        }
    }

    pub fn location(&self) -> Option<&CollectionLocation> {
        self.location.as_ref()
    }

    pub fn games(&self) -> &[GameRecord] {
        &self.games
    }

    /// Entries the last successful load could not resolve.
    pub fn dropped(&self) -> usize {
        self.dropped
    }

    /// Find a loaded game by its folder.
    pub fn find(&self, folder_path: &Path) -> Option<&GameRecord> {
        self.games.iter().find(|game| game.key() == folder_path)
    }
}
