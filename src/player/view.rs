//! Render model written by the controller and read by the UI.

use std::borrow::Cow;
use std::path::Path;

use crate::library::is_remote;

/// Named colors used by the player chrome.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Swatch {
    /// Low volume.
    Cool,
    /// Medium volume.
    Warning,
    /// High volume.
    Hot,
    /// Volume-down icon at zero volume.
    Neutral,
    /// Inactive volume-up icon.
    Muted,
}

impl Swatch {
    pub fn rgb(self) -> (u8, u8, u8) {
        match self {
            Swatch::Cool => (0x34, 0x98, 0xdb),
            Swatch::Warning => (0xf1, 0xc4, 0x0f),
            Swatch::Hot => (0xe7, 0x4c, 0x3c),
            Swatch::Neutral => (0xbb, 0xbb, 0xbb),
            Swatch::Muted => (0x88, 0x88, 0x88),
        }
    }
}

/// Slider color for a volume `level`.
pub fn volume_swatch(level: f32) -> Swatch {
    if level < 0.33 {
        Swatch::Cool
    } else if level < 0.66 {
        Swatch::Warning
    } else {
        Swatch::Hot
    }
}

/// Volume control state.
#[derive(Clone, Debug, PartialEq)]
pub struct VolumeView {
    pub level: f32,
    /// e.g. `"45%"`.
    pub label: String,
    pub slider: Swatch,
    /// Percentage at which the slider fill ends.
    pub gradient_stop: u8,
    pub down_icon: Swatch,
    pub up_icon: Swatch,
}

impl VolumeView {
    pub fn for_level(level: f32) -> Self {
        let percent = (level * 100.0).round().clamp(0.0, 100.0) as u8;
        let slider = volume_swatch(level);
        Self {
            level,
            label: format!("{percent}%"),
            slider,
            gradient_stop: percent,
            down_icon: if level == 0.0 { Swatch::Neutral } else { slider },
            up_icon: if level > 0.7 { slider } else { Swatch::Muted },
        }
    }
}

impl Default for VolumeView {
    fn default() -> Self {
        Self::for_level(1.0)
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
pub enum PlayIcon {
    #[default]
    Play,
    Pause,
}

/// How a track's cover is shown.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
pub enum CoverGlyph {
    Art,
    /// The cover is missing or cannot be loaded.
    #[default]
    Placeholder,
}

impl CoverGlyph {
    /// Remote covers are assumed reachable; local ones must exist.
    pub fn for_location(location: &str) -> Self {
        let location = location.trim();
        if location.is_empty() {
            CoverGlyph::Placeholder
        } else if is_remote(location) || Path::new(location).is_file() {
            CoverGlyph::Art
        } else {
            CoverGlyph::Placeholder
        }
    }

    pub fn symbol(self) -> &'static str {
        match self {
            CoverGlyph::Art => "♪",
            CoverGlyph::Placeholder => "?",
        }
    }
}

/// Everything the UI needs to draw the now-playing area and controls.
#[derive(Clone, Debug, PartialEq, Default)]
pub struct View {
    pub title: String,
    pub artist: String,
    pub cover: String,
    pub cover_glyph: CoverGlyph,
    pub duration_label: String,
    pub elapsed_label: String,
    /// Progress bar fill, `0.0..=100.0`.
    pub progress_percent: f64,
    pub play_icon: PlayIcon,
    pub playing: bool,
    pub shuffle_active: bool,
    pub repeat_active: bool,
    pub volume: VolumeView,
}

/// One row of the queue list.
#[derive(Clone, Debug, PartialEq)]
pub struct QueueRow<'a> {
    /// Position in the active queue.
    pub position: usize,
    pub title: &'a str,
    pub artist: &'a str,
    pub cover: CoverGlyph,
    pub duration: Cow<'a, str>,
    pub active: bool,
}
