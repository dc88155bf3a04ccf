pub mod catalog;
pub mod error;
pub mod resolve;

pub use catalog::{CatalogLoad, CatalogNode, load_catalog, parse_catalog, parse_catalog_file};
pub use error::CatalogError;
pub use resolve::{candidate_folders, game_folder_name, resolve_entry};
