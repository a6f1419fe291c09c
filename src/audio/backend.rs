use std::sync::mpsc::{self, Sender};
use std::sync::{Arc, Mutex};
use std::thread::JoinHandle;
use std::time::Duration;

use crate::player::{BackendEvent, PlaybackBackend, SourceTicket};

use super::thread::spawn_audio_thread;
use super::types::{AudioCmd, PlaybackHandle, PlaybackInfo};

/// Playback backend built on a `rodio` sink running on its own thread.
pub struct RodioBackend {
    tx: Sender<AudioCmd>,
    playback: PlaybackHandle,
    source: Option<String>,
    volume: f32,
    join: Option<JoinHandle<()>>,
}

impl RodioBackend {
    /// Start the audio thread. Notifications are delivered on `events`.
    pub fn spawn(events: Sender<BackendEvent>) -> Self {
        let (tx, rx) = mpsc::channel::<AudioCmd>();
        let playback: PlaybackHandle = Arc::new(Mutex::new(PlaybackInfo::default()));
        let join = spawn_audio_thread(rx, tx.clone(), events, playback.clone());

        Self {
            tx,
            playback,
            source: None,
            volume: 1.0,
            join: Some(join),
        }
    }

    /// Stop playback and wait for the audio thread to exit.
    pub fn shutdown(&mut self) {
        let _ = self.tx.send(AudioCmd::Quit);
        if let Some(h) = self.join.take() {
            let _ = h.join();
        }
    }

    fn snapshot(&self) -> PlaybackInfo {
        self.playback
            .lock()
            .map(|info| info.clone())
            .unwrap_or_default()
    }
}

impl PlaybackBackend for RodioBackend {
    fn set_source(&mut self, location: &str) {
        self.source = Some(location.to_string());
    }

    fn has_source(&self) -> bool {
        self.source.is_some()
    }

    fn load(&mut self, ticket: SourceTicket) {
        let Some(location) = self.source.clone() else {
            return;
        };
        // Forget the previous source right away so queries made before the
        // audio thread catches up do not report its duration.
        if let Ok(mut info) = self.playback.lock() {
            *info = PlaybackInfo::default();
        }
        let _ = self.tx.send(AudioCmd::Load { ticket, location });
    }

    fn play(&mut self) {
        let _ = self.tx.send(AudioCmd::Play);
    }

    fn pause(&mut self) {
        let _ = self.tx.send(AudioCmd::Pause);
    }

    fn current_time(&self) -> Duration {
        self.snapshot().position
    }

    fn set_current_time(&mut self, position: Duration) {
        if let Ok(mut info) = self.playback.lock() {
            info.position = position;
        }
        let _ = self.tx.send(AudioCmd::Seek(position));
    }

    fn duration(&self) -> Option<Duration> {
        self.snapshot().duration
    }

    fn volume(&self) -> f32 {
        self.volume
    }

    fn set_volume(&mut self, level: f32) {
        self.volume = level;
        let _ = self.tx.send(AudioCmd::SetVolume(level));
    }
}

impl Drop for RodioBackend {
    fn drop(&mut self) {
        self.shutdown();
    }
}
