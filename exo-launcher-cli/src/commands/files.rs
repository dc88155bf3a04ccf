use std::path::Path;

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use exo_launcher_core::util::format_bytes_approx;
use exo_launcher_lib::{list_game_files, read_game_file_as_base64};

use crate::CliError;

pub(crate) fn run_files(folder: &Path) -> Result<(), CliError> {
    let files = list_game_files(folder)?;

    for file in &files {
        log::info!(
            "  {:>10}  {}",
            format_bytes_approx(file.size),
            file.name,
        );
    }

    let total: u64 = files.iter().map(|f| f.size).sum();
    crate::log_blank();
    log::info!(
        "{} files, {}",
        files.len().if_supports_color(Stdout, |t| t.bold()),
        format_bytes_approx(total),
    );

    Ok(())
}

pub(crate) fn run_read(file: &Path) -> Result<(), CliError> {
    println!("{}", read_game_file_as_base64(file)?);
    Ok(())
}
