//! Launch configuration extraction from a resolved game folder.

pub mod batch;
pub mod conf;

use std::path::Path;

use exo_launcher_core::LaunchConfig;

use crate::error::LauncherError;

pub use batch::find_start_command;
pub use conf::parse_dosbox_conf;

/// Emulator settings file inside a game folder.
pub const DOSBOX_CONF: &str = "dosbox.conf";
/// Launch script inside a game folder.
pub const DOSBOX_BAT: &str = "dosbox.bat";

/// Read a small text file, `None` if it does not exist.
///
/// DOS-era files are not guaranteed to be UTF-8, so bytes are decoded
/// lossily.
fn read_optional_text(path: &Path) -> Result<Option<String>, LauncherError> {
    match std::fs::read(path) {
        Ok(bytes) => Ok(Some(String::from_utf8_lossy(&bytes).into_owned())),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
        Err(source) => Err(LauncherError::LaunchFile {
            path: path.to_path_buf(),
            source,
        }),
    }
}

/// Build the launch config for a game folder.
///
/// A missing `dosbox.conf` gives an empty conf and a missing `dosbox.bat`
/// an empty start command; neither is an error.
pub fn extract_launch_config(game_folder: &Path) -> Result<LaunchConfig, LauncherError> {
    let mut launch = LaunchConfig::empty(game_folder);

    if let Some(text) = read_optional_text(&game_folder.join(DOSBOX_CONF))? {
        launch.dosbox_conf = parse_dosbox_conf(&text);
    }

    if let Some(script) = read_optional_text(&game_folder.join(DOSBOX_BAT))? {
        launch.start_command = find_start_command(&script).unwrap_or_default().to_string();
    }

    log::debug!(
        "Launch config for {}: {} conf sections, start command {:?}",
        game_folder.display(),
        launch.dosbox_conf.len(),
        launch.start_command,
    );

    Ok(launch)
}

/// Prepare everything needed to launch the game at `folder_path`.
pub fn prepare_launch(folder_path: &Path) -> Result<LaunchConfig, LauncherError> {
    extract_launch_config(folder_path)
}

#[cfg(test)]
#[path = "../tests/launch_tests.rs"]
mod tests;
