use std::time::Duration;

use super::types::SourceTicket;

/// The media playback primitive driven by the controller.
///
/// Implementations report metadata-ready, progress, ended and load failures
/// as `BackendEvent`s on a channel owned by the runtime. Every notification
/// tied to a source carries the `SourceTicket` passed to `load`.
pub trait PlaybackBackend {
    /// Select the media location for the next `load`.
    fn set_source(&mut self, location: &str);

    /// Whether a source has been set.
    fn has_source(&self) -> bool;

    /// Start loading the selected source. Playback stays paused.
    fn load(&mut self, ticket: SourceTicket);

    fn play(&mut self);

    fn pause(&mut self);

    /// Current playback position.
    fn current_time(&self) -> Duration;

    fn set_current_time(&mut self, position: Duration);

    /// Total duration of the loaded source, `None` until it is known.
    fn duration(&self) -> Option<Duration>;

    fn volume(&self) -> f32;

    /// Set the output volume in `0.0..=1.0`.
    fn set_volume(&mut self, level: f32);
}
