use std::path::Path;

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use exo_launcher_lib::prepare_launch;

use crate::CliError;

pub(crate) fn run_info(folder: &Path, json: bool) -> Result<(), CliError> {
    let launch = prepare_launch(folder)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&launch)?);
        return Ok(());
    }

    log::info!("  Game path:     {}", launch.game_path.display());
    if launch.start_command.is_empty() {
        log::info!(
            "  Start command: {}",
            "(none)".if_supports_color(Stdout, |t| t.dimmed()),
        );
    } else {
        log::info!(
            "  Start command: {}",
            launch
                .start_command
                .if_supports_color(Stdout, |t| t.green()),
        );
    }

    if launch.dosbox_conf.is_empty() {
        return Ok(());
    }

    crate::log_blank();
    for name in launch.dosbox_conf.sections() {
        log::info!("  [{}]", name.if_supports_color(Stdout, |t| t.bold()));
        if let Some(section) = launch.dosbox_conf.section(name) {
            for (key, value) in section {
                log::info!("    {key} = {value}");
            }
        }
    }

    Ok(())
}
