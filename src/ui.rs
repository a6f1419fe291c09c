//! UI rendering helpers for the terminal user interface.
//!
//! Draws the player's `View` and queue rows with `ratatui` and reports where
//! the clickable regions ended up so mouse input can be mapped back.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style, Stylize},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, List, ListItem, ListState, Padding, Paragraph, Wrap},
};

use crate::config::{ControlsSettings, UiSettings};
use crate::player::{PlayIcon, PlaybackBackend, PlaybackState, Player, Swatch};

/// Screen regions that react to mouse clicks, as drawn in the last frame.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HitAreas {
    /// Inside of the progress bar.
    pub progress: Rect,
    /// Inside of the volume bar.
    pub volume: Rect,
    /// Inside of the queue list.
    pub queue: Rect,
    /// Queue position of the first visible row.
    pub queue_offset: usize,
}

fn swatch_color(s: Swatch) -> Color {
    let (r, g, b) = s.rgb();
    Color::Rgb(r, g, b)
}

/// Render the controls help text.
fn controls_text(controls: &ControlsSettings) -> String {
    let seek = format!("seek -/+{}s", controls.seek_step_seconds);
    let volume = format!("volume -/+{:.0}%", controls.volume_step * 100.0);
    [
        ("space", "play/pause"),
        ("n/p", "next/prev"),
        ("←/→", seek.as_str()),
        ("↑/↓", volume.as_str()),
        ("s", "shuffle"),
        ("r", "repeat"),
        ("j/k", "move"),
        ("enter", "play selected"),
        ("q", "quit"),
    ]
    .iter()
    .map(|(k, v)| format!("[{k}] {v}"))
    .collect::<Vec<String>>()
    .join(" | ")
}

/// Window of `height` rows over `total` rows that keeps `selected` centered
/// when possible. Returns `(start, end, selected_in_window)`.
fn list_window(total: usize, height: usize, selected: usize) -> (usize, usize, usize) {
    let selected = selected.min(total.saturating_sub(1));
    if total <= height || height == 0 {
        return (0, total, selected);
    }
    let half = height / 2;
    let mut start = selected.saturating_sub(half);
    if start + height > total {
        start = total - height;
    }
    (start, start + height, selected - start)
}

/// Render the whole player into `frame` and return the clickable regions.
pub fn draw<B: PlaybackBackend>(
    frame: &mut Frame,
    player: &Player<B>,
    cursor: usize,
    ui_settings: &UiSettings,
    controls_settings: &ControlsSettings,
) -> HitAreas {
    let footer_height = if ui_settings.show_controls_help { 4 } else { 0 };
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(6),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Min(3),
            Constraint::Length(footer_height),
        ])
        .split(frame.area());

    let view = player.view();
    let mut hit = HitAreas::default();

    // Header
    let header = Paragraph::new(ui_settings.header_text.as_str())
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" allegro ")
                .title_alignment(Alignment::Center),
        );
    frame.render_widget(header, chunks[0]);

    // Now playing
    {
        let state = match player.playback_state() {
            PlaybackState::Stopped => "Stopped",
            PlaybackState::Paused => "Paused",
            PlaybackState::Playing => "Playing",
        };
        let button = match view.play_icon {
            PlayIcon::Play => "▶",
            PlayIcon::Pause => "⏸",
        };
        let on_off = |active: bool| if active { "ON" } else { "OFF" };

        let cover = if view.cover.is_empty() {
            "-"
        } else {
            view.cover.as_str()
        };
        let lines = vec![
            Line::from(vec![
                Span::raw(format!("{} ", view.cover_glyph.symbol())),
                Span::raw(view.title.as_str()).bold(),
            ]),
            Line::from(view.artist.as_str()),
            Line::from(format!("cover: {cover}")).dim(),
            Line::from(format!(
                "[{button}] {state} • Shuffle: {} • Repeat: {}",
                on_off(view.shuffle_active),
                on_off(view.repeat_active)
            )),
        ];

        let block = Block::bordered()
            .padding(Padding {
                left: 1,
                right: 0,
                top: 0,
                bottom: 0,
            })
            .title(" now playing ");
        let block = if view.playing {
            block.border_style(Style::default().fg(swatch_color(view.volume.slider)))
        } else {
            block
        };
        let now_playing = Paragraph::new(lines)
            .block(block)
            .wrap(Wrap { trim: true });
        frame.render_widget(now_playing, chunks[1]);
    }

    // Progress
    {
        let block = Block::bordered().title(" progress ");
        hit.progress = block.inner(chunks[2]);
        let gauge = Gauge::default()
            .block(block)
            .gauge_style(Style::default().fg(Color::Cyan))
            .ratio((view.progress_percent / 100.0).clamp(0.0, 1.0))
            .label(format!("{} / {}", view.elapsed_label, view.duration_label));
        frame.render_widget(gauge, chunks[2]);
    }

    // Volume
    {
        let volume = &view.volume;
        let title = Line::from(vec![
            Span::raw(" "),
            Span::styled("vol-", Style::default().fg(swatch_color(volume.down_icon))),
            Span::raw(format!(" {} ", volume.label)),
            Span::styled("vol+", Style::default().fg(swatch_color(volume.up_icon))),
            Span::raw(" "),
        ]);
        let block = Block::bordered().title(title);
        hit.volume = block.inner(chunks[3]);
        let label = if volume.level <= 0.0 {
            "muted"
        } else {
            volume.label.as_str()
        };
        let gauge = Gauge::default()
            .block(block)
            .gauge_style(Style::default().fg(swatch_color(volume.slider)))
            .percent(u16::from(volume.gradient_stop.min(100)))
            .label(label);
        frame.render_widget(gauge, chunks[3]);
    }

    // Queue
    {
        let block = Block::default().borders(Borders::ALL).title(" queue ");
        let inner = block.inner(chunks[4]);
        let total = player.queue_len();
        let (start, end, selected_in_window) =
            list_window(total, inner.height as usize, cursor);
        hit.queue = inner;
        hit.queue_offset = start;

        // Only build items for the visible window.
        let items: Vec<ListItem> = player
            .queue_rows()
            .skip(start)
            .take(end - start)
            .map(|row| {
                let marker = if row.active { "♫ " } else { "  " };
                let line = Line::from(vec![
                    Span::raw(marker),
                    Span::raw(format!("{:>2}. ", row.position + 1)).dim(),
                    Span::raw(format!("{} ", row.cover.symbol())),
                    Span::raw(row.title),
                    Span::raw(" - ").dim(),
                    Span::raw(row.artist).italic(),
                    Span::raw(format!("  {}", row.duration)).dim(),
                ]);
                let item = ListItem::new(line);
                if row.active {
                    item.add_modifier(Modifier::BOLD)
                } else {
                    item
                }
            })
            .collect();

        let list = List::new(items)
            .block(block)
            .highlight_style(Style::default().add_modifier(Modifier::REVERSED))
            .highlight_symbol("> ");
        let mut state = ListState::default();
        if total > 0 {
            state.select(Some(selected_in_window));
        }
        frame.render_stateful_widget(list, chunks[4], &mut state);
    }

    if ui_settings.show_controls_help {
        let footer = Paragraph::new(controls_text(controls_settings))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(" controls ")
                    .padding(Padding {
                        left: 1,
                        right: 0,
                        top: 0,
                        bottom: 0,
                    }),
            )
            .wrap(Wrap { trim: true });
        frame.render_widget(footer, chunks[5]);
    }

    hit
}
