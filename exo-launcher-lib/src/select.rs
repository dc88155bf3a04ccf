//! User folder selection.
//!
//! The dialog system is external; callers pass in the picker and the
//! notifier that owns the active window instead of this module reaching
//! for one.

use std::path::PathBuf;

use exo_launcher_core::CollectionLocation;

use crate::locations::validate_selected_folder;

pub const PICKER_TITLE: &str = "Select eXoDOS or eXoWin3x folder";
pub const INVALID_FOLDER_TITLE: &str = "Invalid Folder";
pub const INVALID_FOLDER_MESSAGE: &str =
    "This folder does not contain eXo metadata. Please run setup.bat first.";

/// A folder chooser. `None` means the user cancelled.
pub trait FolderPicker {
    fn pick_folder(&self, title: &str) -> Option<PathBuf>;
}

/// Blocking user-facing messages.
pub trait Notifier {
    fn error(&self, title: &str, message: &str);
}

/// Ask the user for a collection folder and validate it.
///
/// Cancellation returns `None` silently. A folder without `xml/` is
/// reported through `notifier` and also returns `None`.
pub fn select_collection_folder(
    picker: &dyn FolderPicker,
    notifier: &dyn Notifier,
) -> Option<CollectionLocation> {
    let selected = picker.pick_folder(PICKER_TITLE)?;
    let location = validate_selected_folder(&selected);
    if location.is_none() {
        log::debug!("Rejected folder {}", selected.display());
        notifier.error(INVALID_FOLDER_TITLE, INVALID_FOLDER_MESSAGE);
    }
    location
}
