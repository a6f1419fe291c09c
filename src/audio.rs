//! `rodio` playback backend.
//!
//! A dedicated audio thread owns the output stream and the current sink.
//! `RodioBackend` is the controller-facing front: it forwards commands over a
//! channel and answers position/duration queries from a shared snapshot.

mod backend;
mod fetch;
mod sink;
mod thread;
mod types;

pub use backend::RodioBackend;
