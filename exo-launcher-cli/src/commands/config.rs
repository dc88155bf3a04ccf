use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use exo_launcher_lib::settings::{load_settings_string, settings_path};

use crate::CliError;

/// Show the settings file and its contents.
pub(crate) fn run_config_show() -> Result<(), CliError> {
    let path = settings_path();

    if !path.exists() {
        log::info!(
            "  Settings file: {} {}",
            path.display().if_supports_color(Stdout, |t| t.cyan()),
            "(not found)".if_supports_color(Stdout, |t| t.dimmed()),
        );
        return Ok(());
    }

    log::info!(
        "  Settings file: {}",
        path.display().if_supports_color(Stdout, |t| t.cyan()),
    );
    crate::log_blank();
    match load_settings_string() {
        Some(contents) => {
            for line in contents.lines() {
                log::info!("  {line}");
            }
        }
        None => log::warn!("Settings file could not be parsed"),
    }

    Ok(())
}

/// Print the settings file path.
pub(crate) fn run_config_path() -> Result<(), CliError> {
    println!("{}", settings_path().display());
    Ok(())
}
