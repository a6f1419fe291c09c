use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;
use tracing::{debug, info};

use crate::config::LibrarySettings;

use super::model::{Track, is_remote};
use super::scan::{probe_tags, scan};

/// Errors raised while building a playlist from disk.
#[derive(Debug, Error)]
pub enum PlaylistError {
    #[error("failed to read playlist {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid playlist {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("playlist {0} contains no tracks")]
    Empty(PathBuf),
}

/// On-disk playlist format.
///
/// ```toml
/// [[tracks]]
/// title = "Die With A Smile"
/// artist = "Lady Gaga, Bruno Mars"
/// src = "https://example.com/smile.mp3"
/// cover = "https://example.com/smile.png"
/// duration = "3:35"
/// ```
#[derive(Debug, Deserialize)]
struct PlaylistFile {
    #[serde(default)]
    tracks: Vec<TrackEntry>,
}

#[derive(Debug, Deserialize)]
struct TrackEntry {
    title: String,
    #[serde(default)]
    artist: String,
    src: String,
    #[serde(default)]
    cover: String,
    duration: Option<String>,
}

/// Load a playlist from a TOML file or a directory of audio files.
pub fn load_playlist(path: &Path, settings: &LibrarySettings) -> Result<Vec<Track>, PlaylistError> {
    let tracks = if path.is_dir() {
        debug!(dir = %path.display(), "scanning playlist directory");
        scan(path, settings)
    } else {
        read_playlist_file(path)?
    };

    if tracks.is_empty() {
        return Err(PlaylistError::Empty(path.to_path_buf()));
    }

    info!(path = %path.display(), tracks = tracks.len(), "playlist loaded");
    Ok(tracks)
}

fn read_playlist_file(path: &Path) -> Result<Vec<Track>, PlaylistError> {
    let text = std::fs::read_to_string(path).map_err(|source| PlaylistError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let file: PlaylistFile = toml::from_str(&text).map_err(|source| PlaylistError::Parse {
        path: path.to_path_buf(),
        source,
    })?;

    let base = path.parent().unwrap_or_else(|| Path::new(""));
    Ok(file
        .tracks
        .into_iter()
        .map(|entry| track_from_entry(entry, base))
        .collect())
}

fn track_from_entry(entry: TrackEntry, base: &Path) -> Track {
    let source = resolve_location(&entry.src, base);
    let cover = if entry.cover.trim().is_empty() {
        String::new()
    } else {
        resolve_location(&entry.cover, base)
    };

    let nominal_duration = entry
        .duration
        .map(|d| d.trim().to_string())
        .filter(|d| !d.is_empty())
        .or_else(|| {
            if is_remote(&source) {
                None
            } else {
                probe_tags(Path::new(&source)).duration
            }
        })
        .unwrap_or_else(|| "0:00".to_string());

    Track {
        title: entry.title,
        artist: entry.artist,
        source,
        cover,
        nominal_duration,
    }
}

/// Relative local locations are resolved against the playlist's directory.
fn resolve_location(location: &str, base: &Path) -> String {
    let location = location.trim();
    if is_remote(location) || Path::new(location).is_absolute() {
        location.to_string()
    } else {
        base.join(location).display().to_string()
    }
}
