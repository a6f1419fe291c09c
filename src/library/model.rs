use std::time::Duration;

/// A playlist entry. Immutable once the playlist is built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Track {
    pub title: String,
    pub artist: String,
    /// Media location: an `http(s)://` URL or a local path.
    pub source: String,
    /// Cover art location, empty when the track has none.
    pub cover: String,
    /// Author-supplied `M:SS` label shown until the real duration is known.
    pub nominal_duration: String,
}

/// Returns true when `location` must be fetched over HTTP.
pub fn is_remote(location: &str) -> bool {
    let lower = location.trim_start().to_ascii_lowercase();
    lower.starts_with("http://") || lower.starts_with("https://")
}

/// Format a duration as `M:SS` (minutes unpadded, seconds truncated).
pub fn format_clock(d: Duration) -> String {
    let secs = d.as_secs();
    format!("{}:{:02}", secs / 60, secs % 60)
}
