use std::path::PathBuf;

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use exo_launcher_core::util::truncate_chars;
use exo_launcher_lib::CollectionSession;

use crate::CliError;

use super::resolve_location;

const TITLE_WIDTH: usize = 40;
const GENRE_WIDTH: usize = 20;

pub(crate) fn run_list(root: Option<PathBuf>, json: bool) -> Result<(), CliError> {
    let location = resolve_location(root)?;
    let mut session = CollectionSession::new();
    session.load(location)?;

    if json {
        println!("{}", serde_json::to_string_pretty(session.games())?);
        return Ok(());
    }

    if let Some(location) = session.location() {
        log::info!(
            "{} {}",
            location
                .kind
                .display_name()
                .if_supports_color(Stdout, |t| t.bold()),
            location.root_path.display(),
        );
        crate::log_blank();
    }

    for game in session.games() {
        log::info!(
            "{:<title_w$}  {:>4}  {:<genre_w$}  {}",
            truncate_chars(&game.title, TITLE_WIDTH),
            game.release_year().unwrap_or("----"),
            truncate_chars(&game.genre, GENRE_WIDTH),
            game.folder_path
                .display()
                .if_supports_color(Stdout, |t| t.dimmed()),
            title_w = TITLE_WIDTH,
            genre_w = GENRE_WIDTH,
        );
    }

    crate::log_blank();
    log::info!(
        "{} games",
        session
            .games()
            .len()
            .if_supports_color(Stdout, |t| t.green()),
    );
    if session.dropped() > 0 {
        log::warn!(
            "Skipped {} catalog entries with no game folder",
            session.dropped()
        );
    }

    Ok(())
}
