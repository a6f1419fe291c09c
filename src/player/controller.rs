use std::borrow::Cow;
use std::time::Duration;

use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::{debug, info, warn};

use crate::config::PlaybackSettings;
use crate::library::{Track, format_clock};

use super::backend::PlaybackBackend;
use super::queue::PlayQueue;
use super::types::{BackendEvent, PlaybackState, PlayerState, SourceTicket};
use super::view::{CoverGlyph, PlayIcon, QueueRow, View, VolumeView};

/// The player controller.
///
/// Owns the playlist, the queue orders, the `PlayerState` and the `View`.
/// Every mutation goes through one of the transport operations below.
pub struct Player<B: PlaybackBackend> {
    tracks: Vec<Track>,
    covers: Vec<CoverGlyph>,
    queue: PlayQueue,
    state: PlayerState,
    backend: B,
    view: View,
    /// Ticket of the most recent `load`.
    ticket: SourceTicket,
    /// Duration reported by metadata-ready for the current ticket.
    measured: Option<Duration>,
    /// The current source failed to load; cleared by the next `load`.
    failed: bool,
    restart_threshold: Duration,
    initial_volume: f32,
    rng: StdRng,
}

impl<B: PlaybackBackend> Player<B> {
    /// Create a controller over `tracks`. Nothing is loaded until `init`.
    pub fn new(tracks: Vec<Track>, backend: B, playback: &PlaybackSettings) -> Self {
        Self::with_rng(tracks, backend, playback, StdRng::from_os_rng())
    }

    /// Like `new`, with a caller-supplied random source for shuffling.
    pub fn with_rng(
        tracks: Vec<Track>,
        backend: B,
        playback: &PlaybackSettings,
        rng: StdRng,
    ) -> Self {
        let covers = tracks
            .iter()
            .map(|t| CoverGlyph::for_location(&t.cover))
            .collect();
        let mut player = Self {
            queue: PlayQueue::new(tracks.len()),
            covers,
            tracks,
            state: PlayerState::default(),
            backend,
            view: View::default(),
            ticket: SourceTicket::default(),
            measured: None,
            failed: false,
            restart_threshold: Duration::from_secs(playback.restart_threshold_seconds),
            initial_volume: playback.volume,
            rng,
        };

        if playback.shuffle {
            player.queue.reshuffle(&mut player.rng);
            player.queue.set_shuffled(true);
            player.state.is_shuffled = true;
        }
        player.state.is_repeated = playback.repeat;
        player.view.shuffle_active = player.state.is_shuffled;
        player.view.repeat_active = player.state.is_repeated;
        player
    }

    /// Apply the initial volume and load the first track of the active queue.
    pub fn init(&mut self) {
        self.set_volume(self.initial_volume);
        self.load(0);
        self.sync_transport_view();
    }

    pub fn state(&self) -> PlayerState {
        self.state
    }

    pub fn view(&self) -> &View {
        &self.view
    }

    #[cfg(test)]
    pub(crate) fn backend(&self) -> &B {
        &self.backend
    }

    #[cfg(test)]
    pub(crate) fn backend_mut(&mut self) -> &mut B {
        &mut self.backend
    }

    /// Ticket of the most recently loaded source.
    #[cfg(test)]
    pub(crate) fn source_ticket(&self) -> SourceTicket {
        self.ticket
    }

    pub fn queue_len(&self) -> usize {
        self.queue.len()
    }

    pub fn playback_state(&self) -> PlaybackState {
        if !self.backend.has_source() || self.failed {
            PlaybackState::Stopped
        } else if self.state.is_playing {
            PlaybackState::Playing
        } else {
            PlaybackState::Paused
        }
    }

    /// Load the track at `index` of the active queue. Invalid indices are ignored.
    ///
    /// Playback is left paused; callers decide whether to resume.
    pub fn load(&mut self, index: usize) {
        let Some(track_index) = self.queue.track_at(index) else {
            return;
        };
        let track = &self.tracks[track_index];

        self.ticket = self.ticket.next();
        self.measured = None;
        self.failed = false;
        self.backend.set_source(&track.source);
        self.backend.load(self.ticket);
        info!(index, title = %track.title, ticket = self.ticket.0, "loading track");

        self.view.title = track.title.clone();
        self.view.artist = track.artist.clone();
        self.view.cover = track.cover.clone();
        self.view.cover_glyph = self.covers[track_index];
        self.view.duration_label = track.nominal_duration.clone();

        self.state.current_index = index;
        self.state.is_playing = false;
        self.sync_transport_view();
        self.reset_progress();
    }

    /// Start playback. Does nothing while no source is loaded or the
    /// current one failed to load.
    pub fn play(&mut self) {
        if !self.backend.has_source() || self.failed {
            return;
        }
        self.state.is_playing = true;
        self.backend.play();
        self.sync_transport_view();
        debug!(index = self.state.current_index, "play");
    }

    pub fn pause(&mut self) {
        self.state.is_playing = false;
        self.backend.pause();
        self.sync_transport_view();
        debug!(index = self.state.current_index, "pause");
    }

    pub fn toggle_play(&mut self) {
        if self.state.is_playing {
            self.pause();
        } else {
            self.play();
        }
    }

    /// Restart the current track when it has played past the restart
    /// threshold, otherwise step back one track with wraparound.
    pub fn previous(&mut self) {
        if self.queue.is_empty() {
            return;
        }
        if self.backend.current_time() > self.restart_threshold {
            self.backend.set_current_time(Duration::ZERO);
            self.tick();
            return;
        }

        let was_playing = self.state.is_playing;
        let index = match self.state.current_index {
            0 => self.queue.len() - 1,
            i => i - 1,
        };
        self.load(index);
        if was_playing {
            self.play();
        }
    }

    /// Advance one track.
    ///
    /// With repeat on the queue is cyclic. With repeat off, advancing past the
    /// last track loads the first one and stays paused.
    pub fn next(&mut self) {
        if self.queue.is_empty() {
            return;
        }

        let was_playing = self.state.is_playing;
        let len = self.queue.len();
        let next = self.state.current_index + 1;

        if self.state.is_repeated {
            self.load(next % len);
        } else if next >= len {
            info!("end of playlist");
            self.load(0);
            self.pause();
            return;
        } else {
            self.load(next);
        }

        if was_playing {
            self.play();
        }
    }

    /// Seek to `fraction` (`0.0..=1.0`) of the track. Ignored while the
    /// duration is unknown.
    pub fn seek(&mut self, fraction: f64) {
        if fraction.is_nan() {
            return;
        }
        let Some(duration) = self.known_duration() else {
            return;
        };
        let target = duration.mul_f64(fraction.clamp(0.0, 1.0));
        self.backend.set_current_time(target);
        self.tick();
    }

    /// Move the position by `seconds`, clamped to `[0, duration]`. Ignored
    /// while the duration is unknown.
    pub fn seek_by(&mut self, seconds: i64) {
        let Some(duration) = self.known_duration() else {
            return;
        };
        let current = self.backend.current_time();
        let step = Duration::from_secs(seconds.unsigned_abs());
        let target = if seconds < 0 {
            current.saturating_sub(step)
        } else {
            current.saturating_add(step).min(duration)
        };
        self.backend.set_current_time(target);
        self.tick();
    }

    /// Set the volume, clamped to `0.0..=1.0`, and recolor the volume control.
    pub fn set_volume(&mut self, level: f32) {
        if level.is_nan() {
            return;
        }
        let level = level.clamp(0.0, 1.0);
        self.backend.set_volume(level);
        self.view.volume = VolumeView::for_level(level);
    }

    /// Change the volume by `delta`, rounded to hundredths.
    pub fn nudge_volume(&mut self, delta: f32) {
        let level = ((self.backend.volume() + delta).clamp(0.0, 1.0) * 100.0).round() / 100.0;
        self.set_volume(level);
    }

    /// Switch between the author order and a fresh shuffle.
    ///
    /// The current track keeps playing; only its position in the queue moves.
    pub fn toggle_shuffle(&mut self) {
        let current_track = self.queue.track_at(self.state.current_index);

        self.state.is_shuffled = !self.state.is_shuffled;
        if self.state.is_shuffled {
            self.queue.reshuffle(&mut self.rng);
        }
        self.queue.set_shuffled(self.state.is_shuffled);

        if let Some(position) = current_track.and_then(|t| self.queue.position_of(t)) {
            self.state.current_index = position;
        }
        self.sync_transport_view();
        debug!(
            shuffled = self.state.is_shuffled,
            index = self.state.current_index,
            "shuffle toggled"
        );
    }

    pub fn toggle_repeat(&mut self) {
        self.state.is_repeated = !self.state.is_repeated;
        self.sync_transport_view();
        debug!(repeat = self.state.is_repeated, "repeat toggled");
    }

    /// Play the queue row at `index` regardless of the prior play state.
    pub fn select_row(&mut self, index: usize) {
        if index >= self.queue.len() {
            return;
        }
        self.load(index);
        self.play();
    }

    /// Rows of the active queue, produced on demand.
    pub fn queue_rows(&self) -> impl Iterator<Item = QueueRow<'_>> + '_ {
        self.queue
            .active()
            .iter()
            .enumerate()
            .map(move |(position, &track_index)| {
                let track = &self.tracks[track_index];
                let active = position == self.state.current_index;
                let duration = match self.measured {
                    Some(d) if active => Cow::Owned(format_clock(d)),
                    _ => Cow::Borrowed(track.nominal_duration.as_str()),
                };
                QueueRow {
                    position,
                    title: &track.title,
                    artist: &track.artist,
                    cover: self.covers[track_index],
                    duration,
                    active,
                }
            })
    }

    /// Refresh the progress bar and elapsed label from the backend position.
    pub fn tick(&mut self) {
        let position = self.backend.current_time();
        self.view.progress_percent = match self.known_duration() {
            Some(duration) => {
                (position.as_secs_f64() / duration.as_secs_f64() * 100.0).clamp(0.0, 100.0)
            }
            None => 0.0,
        };
        self.view.elapsed_label = format_clock(position);
    }

    /// Apply a backend notification. Notifications for superseded sources are dropped.
    pub fn handle_event(&mut self, event: BackendEvent) {
        match event {
            BackendEvent::Progress => self.tick(),
            BackendEvent::MetadataReady(ticket) => {
                if !self.is_current(ticket) {
                    return;
                }
                self.measured = self.known_duration();
                if let Some(duration) = self.measured {
                    self.view.duration_label = format_clock(duration);
                }
                self.reset_progress();
            }
            BackendEvent::Ended(ticket) => {
                if self.is_current(ticket) {
                    self.next();
                }
            }
            BackendEvent::LoadFailed { ticket, reason } => {
                if !self.is_current(ticket) {
                    return;
                }
                warn!(ticket = ticket.0, %reason, "failed to load track");
                self.pause();
                self.failed = true;
            }
        }
    }

    fn is_current(&self, ticket: SourceTicket) -> bool {
        if ticket == self.ticket {
            true
        } else {
            debug!(
                stale = ticket.0,
                current = self.ticket.0,
                "ignoring notification for a superseded source"
            );
            false
        }
    }

    fn known_duration(&self) -> Option<Duration> {
        self.backend.duration().filter(|d| !d.is_zero())
    }

    fn reset_progress(&mut self) {
        self.view.progress_percent = 0.0;
        self.view.elapsed_label = format_clock(Duration::ZERO);
    }

    fn sync_transport_view(&mut self) {
        self.view.play_icon = if self.state.is_playing {
            PlayIcon::Pause
        } else {
            PlayIcon::Play
        };
        self.view.playing = self.state.is_playing;
        self.view.shuffle_active = self.state.is_shuffled;
        self.view.repeat_active = self.state.is_repeated;
    }
}
