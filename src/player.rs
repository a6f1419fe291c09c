//! Player controller: owns playback state, routes transport commands to the
//! playback backend and keeps the render model (`View`) in sync.
//!
//! The controller never talks to a terminal or an audio device directly.
//! The backend is abstracted by `PlaybackBackend`, and the UI only reads the
//! `View` and the lazily produced queue rows.

mod backend;
mod controller;
mod queue;
mod types;
mod view;

pub use backend::PlaybackBackend;
pub use controller::Player;
pub use types::*;
pub use view::*;
