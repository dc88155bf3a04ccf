pub(crate) mod config;
pub(crate) mod files;
pub(crate) mod info;
pub(crate) mod list;
pub(crate) mod scan;
pub(crate) mod select;

use std::path::PathBuf;

use exo_launcher_lib::settings::resolve_collection_root;
use exo_launcher_lib::{CollectionLocation, scan_known_locations, validate_selected_folder};

use crate::CliError;

/// Pick the collection to work on: `--root`, then the saved collection,
/// then the first one found by scanning.
pub(crate) fn resolve_location(root: Option<PathBuf>) -> Result<CollectionLocation, CliError> {
    match resolve_collection_root(root) {
        Some(path) => validate_selected_folder(&path).ok_or(CliError::InvalidCollection(path)),
        None => {
            log::debug!("No collection configured, scanning known locations");
            scan_known_locations()
                .into_iter()
                .next()
                .ok_or(CliError::NoCollection)
        }
    }
}
