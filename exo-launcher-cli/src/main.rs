//! exo-launcher CLI
//!
//! Command-line front end for eXoDOS / eXoWin3x collections: find installs,
//! list their games and print what the emulator needs to start one.

mod cli_types;
mod commands;
mod error;

use std::io::Write;

use clap::Parser;
use log::LevelFilter;

use cli_types::{Cli, Commands, ConfigAction};
pub(crate) use error::CliError;

/// Log an empty line (spacing between output blocks).
pub(crate) fn log_blank() {
    log::info!("");
}

/// Info lines are printed bare; warnings and errors get a prefix.
fn init_logging(quiet: bool, verbose: bool) {
    let level = if verbose {
        LevelFilter::Debug
    } else if quiet {
        LevelFilter::Warn
    } else {
        LevelFilter::Info
    };

    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .target(env_logger::Target::Stdout)
        .format(|buf, record| match record.level() {
            log::Level::Info => writeln!(buf, "{}", record.args()),
            log::Level::Warn => writeln!(buf, "warning: {}", record.args()),
            log::Level::Error => writeln!(buf, "error: {}", record.args()),
            level => writeln!(buf, "[{}] {}", level.as_str().to_lowercase(), record.args()),
        })
        .init();
}

fn run(cli: Cli) -> Result<(), CliError> {
    match cli.command {
        Commands::Scan => commands::scan::run_scan(),
        Commands::Select { path } => commands::select::run_select(path),
        Commands::List { json } => commands::list::run_list(cli.root, json),
        Commands::Info { folder, json } => commands::info::run_info(&folder, json),
        Commands::Files { folder } => commands::files::run_files(&folder),
        Commands::Read { file } => commands::files::run_read(&file),
        Commands::Config { action } => match action {
            ConfigAction::Show => commands::config::run_config_show(),
            ConfigAction::Path => commands::config::run_config_path(),
        },
    }
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.quiet, cli.verbose);

    if let Err(e) = run(cli) {
        log::error!("{e}");
        std::process::exit(1);
    }
}
