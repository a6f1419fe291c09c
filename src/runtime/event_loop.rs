use std::sync::mpsc::Receiver;
use std::time::Duration;

use crossterm::event::{self, Event};
use ratatui::{Terminal, backend::CrosstermBackend};
use tracing::debug;

use crate::config;
use crate::player::{BackendEvent, PlaybackBackend, Player};
use crate::runtime::input::{Command, command_for_click, command_for_key};
use crate::ui::{self, HitAreas};

/// State tracked by the runtime event loop across iterations.
#[derive(Debug, Default)]
pub struct EventLoopState {
    /// Queue row under the keyboard cursor.
    pub cursor: usize,
    /// Whether the cursor jumps to the current track when it changes.
    pub follow_playback: bool,
    /// Clickable regions from the last drawn frame.
    pub hit: HitAreas,
}

impl EventLoopState {
    pub fn new() -> Self {
        Self {
            follow_playback: true,
            ..Self::default()
        }
    }

    /// Apply the cursor-only commands. Returns the remaining command, if any.
    fn move_cursor(&mut self, cmd: Command, queue_len: usize) -> Option<Command> {
        match cmd {
            Command::CursorDown => {
                self.follow_playback = false;
                if self.cursor + 1 < queue_len {
                    self.cursor += 1;
                }
                None
            }
            Command::CursorUp => {
                self.follow_playback = false;
                self.cursor = self.cursor.saturating_sub(1);
                None
            }
            Command::PlayCursor => Some(Command::PlayRow(self.cursor)),
            other => Some(other),
        }
    }
}

/// Main terminal event loop: drains backend notifications, draws, and
/// applies input. Returns `Ok(())` when the user quits.
pub fn run<B: PlaybackBackend>(
    terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>,
    settings: &config::Settings,
    player: &mut Player<B>,
    events_rx: &Receiver<BackendEvent>,
    state: &mut EventLoopState,
) -> Result<(), Box<dyn std::error::Error>> {
    loop {
        while let Ok(ev) = events_rx.try_recv() {
            player.handle_event(ev);
        }

        if state.follow_playback {
            state.cursor = player.state().current_index;
        }

        terminal.draw(|f| {
            state.hit = ui::draw(f, player, state.cursor, &settings.ui, &settings.controls);
        })?;

        if !event::poll(Duration::from_millis(50))? {
            continue;
        }
        let cmd = match event::read()? {
            Event::Key(key) => command_for_key(key, &settings.controls),
            Event::Mouse(mouse) => command_for_click(mouse, &state.hit, player.queue_len()),
            _ => None,
        };
        let Some(cmd) = cmd.and_then(|c| state.move_cursor(c, player.queue_len())) else {
            continue;
        };

        debug!(?cmd, "command");
        if apply(cmd, player, state) {
            return Ok(());
        }
    }
}

/// Run `cmd` against the player. Returns `true` when the loop should exit.
fn apply<B: PlaybackBackend>(
    cmd: Command,
    player: &mut Player<B>,
    state: &mut EventLoopState,
) -> bool {
    match cmd {
        Command::Quit => return true,
        Command::TogglePlay => player.toggle_play(),
        Command::Next => player.next(),
        Command::Previous => player.previous(),
        Command::SeekBy(seconds) => player.seek_by(seconds),
        Command::SeekTo(fraction) => player.seek(fraction),
        Command::NudgeVolume(delta) => player.nudge_volume(delta),
        Command::SetVolume(level) => player.set_volume(level),
        Command::ToggleShuffle => player.toggle_shuffle(),
        Command::ToggleRepeat => player.toggle_repeat(),
        Command::PlayRow(position) => player.select_row(position),
        Command::CursorDown | Command::CursorUp | Command::PlayCursor => {}
    }

    // Transport changes bring the cursor back to the current track.
    if !matches!(cmd, Command::SeekBy(_) | Command::SeekTo(_)) {
        state.follow_playback = true;
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cursor_moves_within_queue_and_stops_following() {
        let mut state = EventLoopState::new();
        assert!(state.follow_playback);

        assert_eq!(state.move_cursor(Command::CursorDown, 3), None);
        assert_eq!(state.cursor, 1);
        assert!(!state.follow_playback);

        state.move_cursor(Command::CursorDown, 3);
        state.move_cursor(Command::CursorDown, 3);
        assert_eq!(state.cursor, 2);

        state.move_cursor(Command::CursorUp, 3);
        state.move_cursor(Command::CursorUp, 3);
        state.move_cursor(Command::CursorUp, 3);
        assert_eq!(state.cursor, 0);
    }

    #[test]
    fn play_cursor_targets_cursor_row() {
        let mut state = EventLoopState::new();
        state.cursor = 4;
        assert_eq!(
            state.move_cursor(Command::PlayCursor, 6),
            Some(Command::PlayRow(4))
        );
        assert_eq!(
            state.move_cursor(Command::Next, 6),
            Some(Command::Next)
        );
    }
}
