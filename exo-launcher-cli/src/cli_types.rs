//! CLI type definitions: command enums and argument structs.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "exo-launcher")]
#[command(about = "Browse and launch games from eXoDOS and eXoWin3x collections", long_about = None)]
pub(crate) struct Cli {
    /// Collection root containing the xml folder (defaults to the saved
    /// collection, then the first one found by scanning)
    #[arg(short, long, global = true)]
    pub root: Option<PathBuf>,

    /// Only show warnings and errors (suppress normal output)
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Enable verbose/debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Look for collections in the usual install locations
    Scan,

    /// Use a folder as the current collection
    Select {
        /// Collection root chosen by the user
        path: PathBuf,
    },

    /// List the games of the current collection
    List {
        /// Print game records as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show how a game would be launched
    Info {
        /// Resolved game folder
        folder: PathBuf,

        /// Print the launch config as JSON
        #[arg(long)]
        json: bool,
    },

    /// List the files in a game folder
    Files {
        /// Resolved game folder
        folder: PathBuf,
    },

    /// Print a file as base64
    Read {
        file: PathBuf,
    },

    /// Inspect launcher settings
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
pub(crate) enum ConfigAction {
    /// Show the current settings
    Show,

    /// Print the settings file path
    Path,
}
