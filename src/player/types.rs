//! Small state types shared by the controller and its collaborators.

/// Playback state as seen by the user.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
pub enum PlaybackState {
    /// No source loaded.
    #[default]
    Stopped,
    Paused,
    Playing,
}

/// The controller's mutable state.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
pub struct PlayerState {
    /// Position of the current track in the active queue.
    pub current_index: usize,
    pub is_playing: bool,
    pub is_shuffled: bool,
    pub is_repeated: bool,
}

/// Identifies one `load()` of a source. Backend notifications carry the
/// ticket of the source they belong to so late ones can be dropped.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
pub struct SourceTicket(pub u64);

impl SourceTicket {
    pub fn next(self) -> Self {
        Self(self.0.wrapping_add(1))
    }
}

/// Notifications emitted by a playback backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BackendEvent {
    /// The real duration of the source is now known.
    MetadataReady(SourceTicket),
    /// Periodic position update while playing.
    Progress,
    /// Playback reached the end of the source.
    Ended(SourceTicket),
    /// The source could not be fetched or decoded.
    LoadFailed {
        ticket: SourceTicket,
        reason: String,
    },
}
