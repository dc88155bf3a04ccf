//! Collection discovery, catalog loading and launch preparation for eXoDOS
//! and eXoWin3x installs.
//!
//! Every operation here is a self-contained call over the filesystem: no
//! caching, no shared mutable state. [`CollectionSession`] is the only
//! stateful type and is owned by the caller.

pub mod collection;
pub mod error;
pub mod files;
pub mod launch;
pub mod locations;
pub mod select;
pub mod settings;

pub use collection::{CollectionSession, catalog_path, load_collection};
pub use error::LauncherError;
pub use files::{list_game_files, read_game_file_as_base64};
pub use launch::{extract_launch_config, prepare_launch};
pub use locations::{scan_known_locations, validate_selected_folder};
pub use select::{FolderPicker, Notifier, select_collection_folder};

pub use exo_launcher_catalog::CatalogLoad;
pub use exo_launcher_core::{
    CollectionKind, CollectionLocation, DosboxConf, GameFile, GameRecord, LaunchConfig,
};
