//! Mapping from terminal input to player commands.
//!
//! Kept free of terminal I/O so it can be tested with synthetic events.

use crossterm::event::{
    KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::layout::{Position, Rect};

use crate::config::ControlsSettings;
use crate::ui::HitAreas;

/// Something the user asked the player to do.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Command {
    TogglePlay,
    Next,
    Previous,
    /// Relative seek in seconds.
    SeekBy(i64),
    /// Absolute seek as a fraction of the track.
    SeekTo(f64),
    NudgeVolume(f32),
    SetVolume(f32),
    ToggleShuffle,
    ToggleRepeat,
    CursorDown,
    CursorUp,
    /// Play the row under the queue cursor.
    PlayCursor,
    /// Play the queue row at this position.
    PlayRow(usize),
    Quit,
}

pub fn command_for_key(key: KeyEvent, controls: &ControlsSettings) -> Option<Command> {
    if key.kind != KeyEventKind::Press {
        return None;
    }
    let seek = i64::try_from(controls.seek_step_seconds).unwrap_or(i64::MAX);

    let cmd = match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => Command::Quit,
        KeyCode::Char('q') | KeyCode::Esc => Command::Quit,
        KeyCode::Char(' ') => Command::TogglePlay,
        KeyCode::Left => Command::SeekBy(-seek),
        KeyCode::Right => Command::SeekBy(seek),
        KeyCode::Up => Command::NudgeVolume(controls.volume_step),
        KeyCode::Down => Command::NudgeVolume(-controls.volume_step),
        KeyCode::Char('n') => Command::Next,
        KeyCode::Char('p') => Command::Previous,
        KeyCode::Char('s') => Command::ToggleShuffle,
        KeyCode::Char('r') => Command::ToggleRepeat,
        KeyCode::Char('j') => Command::CursorDown,
        KeyCode::Char('k') => Command::CursorUp,
        KeyCode::Enter => Command::PlayCursor,
        _ => return None,
    };
    Some(cmd)
}

/// Map a left click onto the region it landed in.
pub fn command_for_click(
    mouse: MouseEvent,
    hit: &HitAreas,
    queue_len: usize,
) -> Option<Command> {
    if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
        return None;
    }
    let at = Position::new(mouse.column, mouse.row);

    if hit.progress.contains(at) {
        return Some(Command::SeekTo(offset_fraction(hit.progress, at.x)));
    }
    if hit.volume.contains(at) {
        let level = (offset_fraction(hit.volume, at.x) * 100.0).round() / 100.0;
        return Some(Command::SetVolume(level as f32));
    }
    if hit.queue.contains(at) {
        let position = hit.queue_offset + usize::from(at.y - hit.queue.y);
        if position < queue_len {
            return Some(Command::PlayRow(position));
        }
    }
    None
}

/// Horizontal click offset inside `area`, from 0.0 at the left edge to 1.0
/// at the right edge.
fn offset_fraction(area: Rect, x: u16) -> f64 {
    let span = area.width.saturating_sub(1).max(1);
    (f64::from(x.saturating_sub(area.x)) / f64::from(span)).clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn click(column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    fn areas() -> HitAreas {
        HitAreas {
            progress: Rect::new(1, 10, 101, 1),
            volume: Rect::new(1, 13, 11, 1),
            queue: Rect::new(1, 16, 40, 5),
            queue_offset: 3,
        }
    }

    #[test]
    fn keys_map_to_transport_commands() {
        let controls = ControlsSettings::default();
        assert_eq!(
            command_for_key(key(KeyCode::Char(' ')), &controls),
            Some(Command::TogglePlay)
        );
        assert_eq!(
            command_for_key(key(KeyCode::Left), &controls),
            Some(Command::SeekBy(-5))
        );
        assert_eq!(
            command_for_key(key(KeyCode::Right), &controls),
            Some(Command::SeekBy(5))
        );
        assert_eq!(
            command_for_key(key(KeyCode::Up), &controls),
            Some(Command::NudgeVolume(0.10))
        );
        assert_eq!(
            command_for_key(key(KeyCode::Down), &controls),
            Some(Command::NudgeVolume(-0.10))
        );
        assert_eq!(
            command_for_key(key(KeyCode::Char('n')), &controls),
            Some(Command::Next)
        );
        assert_eq!(
            command_for_key(key(KeyCode::Char('p')), &controls),
            Some(Command::Previous)
        );
        assert_eq!(
            command_for_key(key(KeyCode::Enter), &controls),
            Some(Command::PlayCursor)
        );
        assert_eq!(command_for_key(key(KeyCode::Char('x')), &controls), None);
    }

    #[test]
    fn quit_keys() {
        let controls = ControlsSettings::default();
        assert_eq!(
            command_for_key(key(KeyCode::Char('q')), &controls),
            Some(Command::Quit)
        );
        assert_eq!(
            command_for_key(key(KeyCode::Esc), &controls),
            Some(Command::Quit)
        );
        assert_eq!(
            command_for_key(
                KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL),
                &controls
            ),
            Some(Command::Quit)
        );
    }

    #[test]
    fn key_steps_follow_settings() {
        let controls = ControlsSettings {
            seek_step_seconds: 15,
            volume_step: 0.25,
        };
        assert_eq!(
            command_for_key(key(KeyCode::Left), &controls),
            Some(Command::SeekBy(-15))
        );
        assert_eq!(
            command_for_key(key(KeyCode::Up), &controls),
            Some(Command::NudgeVolume(0.25))
        );
    }

    #[test]
    fn key_release_is_ignored() {
        let mut release = key(KeyCode::Char(' '));
        release.kind = KeyEventKind::Release;
        assert_eq!(command_for_key(release, &ControlsSettings::default()), None);
    }

    #[test]
    fn progress_click_seeks_by_offset() {
        let hit = areas();
        assert_eq!(
            command_for_click(click(1, 10), &hit, 10),
            Some(Command::SeekTo(0.0))
        );
        assert_eq!(
            command_for_click(click(51, 10), &hit, 10),
            Some(Command::SeekTo(0.5))
        );
        assert_eq!(
            command_for_click(click(101, 10), &hit, 10),
            Some(Command::SeekTo(1.0))
        );
    }

    #[test]
    fn volume_click_sets_level() {
        let hit = areas();
        assert_eq!(
            command_for_click(click(1, 13), &hit, 10),
            Some(Command::SetVolume(0.0))
        );
        assert_eq!(
            command_for_click(click(6, 13), &hit, 10),
            Some(Command::SetVolume(0.5))
        );
        assert_eq!(
            command_for_click(click(11, 13), &hit, 10),
            Some(Command::SetVolume(1.0))
        );
    }

    #[test]
    fn queue_click_accounts_for_scroll_offset() {
        let hit = areas();
        assert_eq!(
            command_for_click(click(5, 16), &hit, 10),
            Some(Command::PlayRow(3))
        );
        assert_eq!(
            command_for_click(click(5, 18), &hit, 10),
            Some(Command::PlayRow(5))
        );
        // Past the end of a short queue.
        assert_eq!(command_for_click(click(5, 20), &hit, 6), None);
    }

    #[test]
    fn clicks_elsewhere_or_other_buttons_are_ignored() {
        let hit = areas();
        assert_eq!(command_for_click(click(60, 2), &hit, 10), None);

        let mut right = click(51, 10);
        right.kind = MouseEventKind::Down(MouseButton::Right);
        assert_eq!(command_for_click(right, &hit, 10), None);

        let mut moved = click(51, 10);
        moved.kind = MouseEventKind::Moved;
        assert_eq!(command_for_click(moved, &hit, 10), None);
    }
}
