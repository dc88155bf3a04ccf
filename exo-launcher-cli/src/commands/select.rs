use std::path::PathBuf;

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use exo_launcher_lib::settings::save_collection_root;
use exo_launcher_lib::{FolderPicker, Notifier, select_collection_folder};

use crate::CliError;

/// The folder the user passed on the command line.
struct ArgPicker(PathBuf);

impl FolderPicker for ArgPicker {
    fn pick_folder(&self, _title: &str) -> Option<PathBuf> {
        Some(self.0.clone())
    }
}

/// Shows dialog errors as log lines.
struct LogNotifier;

impl Notifier for LogNotifier {
    fn error(&self, title: &str, message: &str) {
        log::error!("{title}: {message}");
    }
}

pub(crate) fn run_select(path: PathBuf) -> Result<(), CliError> {
    let path = std::path::absolute(&path)?;

    let Some(location) = select_collection_folder(&ArgPicker(path), &LogNotifier) else {
        return Ok(());
    };

    save_collection_root(Some(location.root_path.as_path()))?;
    log::info!(
        "Selected {} collection at {}",
        location
            .kind
            .display_name()
            .if_supports_color(Stdout, |t| t.cyan()),
        location.root_path.display(),
    );

    Ok(())
}
