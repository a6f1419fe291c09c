use std::path::Path;

use lofty::file::{AudioFile, TaggedFileExt};
use lofty::prelude::Accessor;
use walkdir::WalkDir;

use crate::config::LibrarySettings;

use super::model::{Track, format_clock};

const UNKNOWN_ARTIST: &str = "Unknown artist";

fn is_audio_file(path: &Path, settings: &LibrarySettings) -> bool {
    let exts: Vec<String> = settings
        .extensions
        .iter()
        .map(|e| e.trim().trim_start_matches('.').to_ascii_lowercase())
        .filter(|e| !e.is_empty())
        .collect();

    path.extension()
        .and_then(|s| s.to_str())
        .map(|ext| {
            let ext = ext.to_ascii_lowercase();
            exts.iter().any(|e| e == &ext)
        })
        .unwrap_or(false)
}

fn is_hidden(path: &Path) -> bool {
    path.file_name()
        .and_then(|s| s.to_str())
        .map(|name| name.starts_with('.'))
        .unwrap_or(false)
}

/// Tag metadata read from a local audio file.
#[derive(Debug, Default)]
pub(super) struct ProbedTags {
    pub title: Option<String>,
    pub artist: Option<String>,
    pub duration: Option<String>,
}

/// Read title, artist and duration from `path`. Unreadable files give empty tags.
pub(super) fn probe_tags(path: &Path) -> ProbedTags {
    let Ok(tagged) = lofty::read_from_path(path) else {
        return ProbedTags::default();
    };

    let mut probed = ProbedTags {
        duration: Some(format_clock(tagged.properties().duration())),
        ..ProbedTags::default()
    };

    if let Some(tag) = tagged.primary_tag().or_else(|| tagged.first_tag()) {
        probed.title = tag
            .title()
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty());
        probed.artist = tag
            .artist()
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty());
    }

    probed
}

/// Build a playlist from the audio files under `dir`, sorted by title.
pub fn scan(dir: &Path, settings: &LibrarySettings) -> Vec<Track> {
    let mut tracks: Vec<Track> = Vec::new();

    for entry in WalkDir::new(dir)
        .follow_links(true)
        .into_iter()
        .filter_entry(|e| e.depth() == 0 || !is_hidden(e.path()))
        .filter_map(Result::ok)
    {
        let path = entry.path();
        if !path.is_file() || !is_audio_file(path, settings) {
            continue;
        }

        let stem = path
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("UNKNOWN")
            .to_string();
        let tags = probe_tags(path);

        tracks.push(Track {
            title: tags.title.unwrap_or(stem),
            artist: tags.artist.unwrap_or_else(|| UNKNOWN_ARTIST.to_string()),
            source: path.display().to_string(),
            cover: String::new(),
            nominal_duration: tags.duration.unwrap_or_else(|| "0:00".to_string()),
        });
    }

    tracks.sort_by(|a, b| a.title.to_lowercase().cmp(&b.title.to_lowercase()));
    tracks
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn is_audio_file_matches_configured_extensions_case_insensitive() {
        let settings = LibrarySettings::default();
        assert!(is_audio_file(Path::new("/tmp/a.mp3"), &settings));
        assert!(is_audio_file(Path::new("/tmp/a.MP3"), &settings));
        assert!(is_audio_file(Path::new("/tmp/a.flac"), &settings));
        assert!(!is_audio_file(Path::new("/tmp/a.txt"), &settings));
        assert!(!is_audio_file(Path::new("/tmp/a"), &settings));
    }

    #[test]
    fn scan_filters_non_audio_and_sorts_by_title_case_insensitive() {
        let dir = tempdir().unwrap();

        fs::write(dir.path().join("b.MP3"), b"not a real mp3").unwrap();
        fs::write(dir.path().join("A.ogg"), b"not a real ogg").unwrap();
        fs::write(dir.path().join("c.txt"), b"ignore me").unwrap();

        let tracks = scan(dir.path(), &LibrarySettings::default());
        assert_eq!(tracks.len(), 2);
        assert_eq!(tracks[0].title, "A");
        assert_eq!(tracks[1].title, "b");
        assert_eq!(tracks[0].artist, UNKNOWN_ARTIST);
        assert_eq!(tracks[0].nominal_duration, "0:00");
        assert!(tracks[0].cover.is_empty());
    }

    #[test]
    fn scan_skips_hidden_files_and_recurses() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join(".hidden.mp3"), b"not real").unwrap();
        let sub = dir.path().join("sub");
        fs::create_dir_all(&sub).unwrap();
        fs::write(sub.join("child.mp3"), b"not real").unwrap();
        let hidden_dir = dir.path().join(".cache");
        fs::create_dir_all(&hidden_dir).unwrap();
        fs::write(hidden_dir.join("cached.mp3"), b"not real").unwrap();

        let tracks = scan(dir.path(), &LibrarySettings::default());
        let titles: Vec<&str> = tracks.iter().map(|t| t.title.as_str()).collect();
        assert_eq!(titles, vec!["child"]);
        assert!(tracks[0].source.ends_with("child.mp3"));
    }
}
