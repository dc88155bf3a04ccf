use std::path::PathBuf;

use exo_launcher_lib::LauncherError;
use thiserror::Error;

/// Errors that can occur during CLI command execution.
#[derive(Debug, Error)]
pub(crate) enum CliError {
    /// A library operation failed
    #[error(transparent)]
    Launcher(#[from] LauncherError),

    /// I/O error
    #[error("{0}")]
    Io(#[from] std::io::Error),

    /// JSON output could not be produced
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Nothing passed, saved, or found by scanning
    #[error("No eXoDOS or eXoWin3x collection found. Pass --root or run 'exo-launcher select <PATH>'.")]
    NoCollection,

    /// A root was given but has no xml/ folder
    #[error("Not an eXo collection (no xml folder): {}", .0.display())]
    InvalidCollection(PathBuf),
}
