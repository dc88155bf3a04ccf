use std::path::PathBuf;

use exo_launcher_catalog::CatalogError;
use thiserror::Error;

/// Errors surfaced to the UI/launch layer.
///
/// Each variant describes why one requested operation could not complete;
/// none of them leave shared state behind.
#[derive(Debug, Error)]
pub enum LauncherError {
    /// The collection has no platform catalog to read
    #[error("{file_name} not found. Run setup.bat to extract metadata.")]
    CatalogMissing { file_name: String, path: PathBuf },

    /// The platform catalog exists but could not be read or parsed
    #[error(transparent)]
    Catalog(#[from] CatalogError),

    /// A game file requested by the emulator could not be read
    #[error("Failed to read file: {}", path.display())]
    ReadFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Listing a game folder failed part-way or could not start
    #[error("Failed to list files in {}: {message}", path.display())]
    ListFiles { path: PathBuf, message: String },

    #[error("Not a directory: {}", .0.display())]
    NotADirectory(PathBuf),

    /// `dosbox.conf` or `dosbox.bat` exists but could not be read
    #[error("Failed to read {}: {source}", path.display())]
    LaunchFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl LauncherError {
    pub fn list_files(path: impl Into<PathBuf>, msg: impl Into<String>) -> Self {
        Self::ListFiles {
            path: path.into(),
            message: msg.into(),
        }
    }
}
