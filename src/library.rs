//! Playlist data source: the `Track` model, the built-in playlist and
//! loading playlists from a TOML file or a directory of audio files.

mod builtin;
mod model;
mod playlist;
mod scan;

pub use builtin::builtin_playlist;
pub use model::*;
pub use playlist::{PlaylistError, load_playlist};

#[cfg(test)]
mod tests;
