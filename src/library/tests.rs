use super::*;
use crate::config::LibrarySettings;
use std::fs;
use std::time::Duration;
use tempfile::tempdir;

#[test]
fn builtin_playlist_keeps_author_order() {
    let tracks = builtin_playlist();
    assert_eq!(tracks.len(), 6);
    assert_eq!(tracks[0].title, "Love Story x Golden Brown");
    assert_eq!(tracks[0].nominal_duration, "3:20");
    assert_eq!(tracks[1].artist, "Lady Gaga, Bruno Mars");
    assert_eq!(tracks[5].title, "Ranjheya Ve");
    assert!(tracks.iter().all(|t| is_remote(&t.source)));
}

#[test]
fn format_clock_pads_seconds_only() {
    assert_eq!(format_clock(Duration::ZERO), "0:00");
    assert_eq!(format_clock(Duration::from_secs(65)), "1:05");
    assert_eq!(format_clock(Duration::from_millis(200_999)), "3:20");
    assert_eq!(format_clock(Duration::from_secs(3600)), "60:00");
}

#[test]
fn is_remote_recognizes_http_schemes() {
    assert!(is_remote("https://example.com/a.mp3"));
    assert!(is_remote("HTTP://example.com/a.mp3"));
    assert!(!is_remote("/music/a.mp3"));
    assert!(!is_remote("music/https.mp3"));
}

#[test]
fn load_playlist_reads_toml_and_resolves_relative_paths() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("mix.toml");
    fs::write(
        &path,
        r#"
[[tracks]]
title = "Remote"
artist = "Someone"
src = "https://example.com/remote.mp3"
cover = "https://example.com/remote.png"
duration = "3:35"

[[tracks]]
title = "Local"
src = "songs/local.mp3"
cover = "art/local.png"
"#,
    )
    .unwrap();

    let tracks = load_playlist(&path, &LibrarySettings::default()).unwrap();
    assert_eq!(tracks.len(), 2);

    assert_eq!(tracks[0].source, "https://example.com/remote.mp3");
    assert_eq!(tracks[0].cover, "https://example.com/remote.png");
    assert_eq!(tracks[0].nominal_duration, "3:35");

    assert_eq!(tracks[1].artist, "");
    assert_eq!(
        tracks[1].source,
        dir.path().join("songs/local.mp3").display().to_string()
    );
    assert_eq!(
        tracks[1].cover,
        dir.path().join("art/local.png").display().to_string()
    );
    // Missing file: nothing to probe.
    assert_eq!(tracks[1].nominal_duration, "0:00");
}

#[test]
fn load_playlist_rejects_empty_and_malformed_files() {
    let dir = tempdir().unwrap();

    let empty = dir.path().join("empty.toml");
    fs::write(&empty, "").unwrap();
    assert!(matches!(
        load_playlist(&empty, &LibrarySettings::default()),
        Err(PlaylistError::Empty(_))
    ));

    let broken = dir.path().join("broken.toml");
    fs::write(&broken, "[[tracks]]\ntitle = 3\n").unwrap();
    assert!(matches!(
        load_playlist(&broken, &LibrarySettings::default()),
        Err(PlaylistError::Parse { .. })
    ));

    let missing = dir.path().join("missing.toml");
    assert!(matches!(
        load_playlist(&missing, &LibrarySettings::default()),
        Err(PlaylistError::Io { .. })
    ));
}

#[test]
fn load_playlist_scans_directories() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("one.mp3"), b"not real").unwrap();
    fs::write(dir.path().join("notes.txt"), b"skip").unwrap();

    let tracks = load_playlist(dir.path(), &LibrarySettings::default()).unwrap();
    assert_eq!(tracks.len(), 1);
    assert_eq!(tracks[0].title, "one");

    let empty_dir = tempdir().unwrap();
    assert!(matches!(
        load_playlist(empty_dir.path(), &LibrarySettings::default()),
        Err(PlaylistError::Empty(_))
    ));
}
