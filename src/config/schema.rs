use std::path::PathBuf;

use serde::Deserialize;

/// Top-level application settings loaded from `config.toml`.
///
/// File format: TOML
/// Default path (Linux/XDG): `$XDG_CONFIG_HOME/allegro/config.toml` or `~/.config/allegro/config.toml`
///
/// Precedence (highest wins):
/// 1) Environment variables (prefix `ALLEGRO__`, `__` as nested separator)
/// 2) Config file (if present)
/// 3) Struct defaults
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub playback: PlaybackSettings,
    pub controls: ControlsSettings,
    pub ui: UiSettings,
    pub library: LibrarySettings,
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct PlaybackSettings {
    /// Whether shuffle starts enabled.
    pub shuffle: bool,
    /// Whether repeat (wrap to the first track after the last) starts enabled.
    pub repeat: bool,
    /// Initial volume in `0.0..=1.0`.
    pub volume: f32,
    /// Pressing "previous" after this many seconds restarts the current track
    /// instead of going back.
    pub restart_threshold_seconds: u64,
}

impl Default for PlaybackSettings {
    fn default() -> Self {
        Self {
            shuffle: false,
            repeat: false,
            volume: 1.0,
            restart_threshold_seconds: 3,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ControlsSettings {
    /// Number of seconds to scrub when pressing Left / Right.
    pub seek_step_seconds: u64,
    /// Volume change applied by Up / Down.
    pub volume_step: f32,
}

impl Default for ControlsSettings {
    fn default() -> Self {
        Self {
            seek_step_seconds: 5,
            volume_step: 0.10,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct UiSettings {
    /// The text rendered inside the top header box.
    pub header_text: String,
    /// Whether the key help footer is drawn.
    pub show_controls_help: bool,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            header_text: " ~ allegro ~ ".to_string(),
            show_controls_help: true,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LibrarySettings {
    /// Playlist file (TOML) or directory of audio files.
    /// When unset the built-in playlist is used.
    pub playlist: Option<PathBuf>,
    /// File extensions treated as audio when the playlist is a directory
    /// (case-insensitive, without dot).
    pub extensions: Vec<String>,
}

impl Default for LibrarySettings {
    fn default() -> Self {
        Self {
            playlist: None,
            extensions: vec!["mp3".into(), "flac".into(), "wav".into(), "ogg".into()],
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingSettings {
    /// Default filter directive, overridden by `RUST_LOG`.
    pub level: String,
    /// Log file. Nothing is logged when unset, the terminal belongs to the UI.
    pub file: Option<PathBuf>,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            file: None,
        }
    }
}
