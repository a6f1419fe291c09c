//! Audio-related small types and handles.
//!
//! Commands understood by the audio thread, the playback snapshot shared
//! with the backend front, and the backend error type.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use thiserror::Error;

use crate::player::SourceTicket;

#[derive(Debug)]
pub(super) enum AudioCmd {
    /// Drop the current sink and start fetching `location`.
    Load {
        ticket: SourceTicket,
        location: String,
    },
    /// A fetch finished (sent by the fetch thread).
    Fetched {
        ticket: SourceTicket,
        location: String,
        result: Result<Vec<u8>, BackendError>,
    },
    Play,
    Pause,
    /// Seek to an absolute position.
    Seek(Duration),
    SetVolume(f32),
    Quit,
}

/// Runtime playback information shared with the backend front.
#[derive(Debug, Clone, Default)]
pub(super) struct PlaybackInfo {
    /// Position in the current source.
    pub position: Duration,
    /// Total duration of the current source, once known.
    pub duration: Option<Duration>,
}

pub(super) type PlaybackHandle = Arc<Mutex<PlaybackInfo>>;

/// Failures while fetching, decoding or playing a source.
#[derive(Debug, Error)]
pub enum BackendError {
    #[error("failed to fetch {location}: {reason}")]
    Fetch { location: String, reason: String },

    #[error("failed to read {location}: {source}")]
    Io {
        location: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to decode {location}: {reason}")]
    Decode { location: String, reason: String },

    #[error("fetch of {location} was superseded")]
    Cancelled { location: String },

    #[error("no audio output: {0}")]
    Output(String),
}
