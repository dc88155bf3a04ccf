use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use exo_launcher_lib::scan_known_locations;

use crate::CliError;

pub(crate) fn run_scan() -> Result<(), CliError> {
    let found = scan_known_locations();

    if found.is_empty() {
        log::warn!("No eXoDOS or eXoWin3x installation found in the usual locations.");
        log::info!("Use 'exo-launcher select <PATH>' to point at one.");
        return Ok(());
    }

    log::info!(
        "{}",
        "Collections found:".if_supports_color(Stdout, |t| t.bold()),
    );
    for location in &found {
        log::info!(
            "  {} [{}]",
            location.root_path.display(),
            location
                .kind
                .short_name()
                .if_supports_color(Stdout, |t| t.cyan()),
        );
    }

    Ok(())
}
