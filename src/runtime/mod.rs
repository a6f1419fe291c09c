use std::env;
use std::path::PathBuf;
use std::sync::mpsc;

use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::{Terminal, backend::CrosstermBackend};
use tracing::{error, info};

use crate::audio::RodioBackend;
use crate::config;
use crate::library::{Track, builtin_playlist, load_playlist};
use crate::player::{BackendEvent, Player};

mod event_loop;
mod input;
mod logging;
mod settings;

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let settings = settings::load_settings();
    if let Err(e) = logging::init_logging(&settings.logging) {
        eprintln!("allegro: logging disabled: {e}");
    }

    let playlist = env::args_os()
        .nth(1)
        .map(PathBuf::from)
        .or_else(|| settings.library.playlist.clone());
    let tracks = resolve_tracks(playlist, &settings.library);
    info!(tracks = tracks.len(), "starting");

    let (events_tx, events_rx) = mpsc::channel::<BackendEvent>();
    let backend = RodioBackend::spawn(events_tx);
    let mut player = Player::new(tracks, backend, &settings.playback);
    player.init();

    enable_raw_mode()?;
    let mut stdout = std::io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut state = event_loop::EventLoopState::new();
    let run_result = event_loop::run(&mut terminal, &settings, &mut player, &events_rx, &mut state);

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    run_result
}

/// Tracks from `playlist`, or the built-in playlist when none is given or
/// it cannot be used.
fn resolve_tracks(playlist: Option<PathBuf>, library: &config::LibrarySettings) -> Vec<Track> {
    let Some(path) = playlist else {
        return builtin_playlist();
    };
    match load_playlist(&path, library) {
        Ok(tracks) => tracks,
        Err(e) => {
            error!(error = %e, "falling back to the built-in playlist");
            eprintln!("allegro: {e}; using the built-in playlist");
            builtin_playlist()
        }
    }
}
