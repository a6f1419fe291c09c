use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::mpsc::{Receiver, RecvTimeoutError, Sender};
use std::thread;
use std::thread::JoinHandle;
use std::time::Duration;

use rodio::{OutputStream, OutputStreamBuilder, Sink};
use tracing::{debug, error, warn};

use crate::player::{BackendEvent, SourceTicket};

use super::fetch::spawn_fetch;
use super::sink::{create_sink, decode};
use super::types::{AudioCmd, BackendError, PlaybackHandle};

/// How often progress is published while playing.
const TICK: Duration = Duration::from_millis(250);

/// The sink of the source most recently loaded.
struct Current {
    ticket: SourceTicket,
    sink: Sink,
    ended: bool,
}

pub(super) fn spawn_audio_thread(
    rx: Receiver<AudioCmd>,
    tx: Sender<AudioCmd>,
    events: Sender<BackendEvent>,
    playback_info: PlaybackHandle,
) -> JoinHandle<()> {
    thread::spawn(move || {
        let stream = match OutputStreamBuilder::open_default_stream() {
            Ok(mut stream) => {
                // rodio logs to stderr when OutputStream is dropped, which would
                // scribble over the TUI.
                stream.log_on_drop(false);
                Some(stream)
            }
            Err(e) => {
                error!(error = %e, "no audio output device");
                None
            }
        };

        let mut current: Option<Current> = None;
        // Ticket of the fetch still in flight, if any.
        let mut pending: Option<SourceTicket> = None;
        // Ticket of the latest load, shared with fetch threads.
        let latest = Arc::new(AtomicU64::new(0));
        let mut want_playing = false;
        let mut volume: f32 = 1.0;

        loop {
            match rx.recv_timeout(TICK) {
                Ok(AudioCmd::Load { ticket, location }) => {
                    if let Some(cur) = current.take() {
                        cur.sink.stop();
                    }
                    pending = Some(ticket);
                    latest.store(ticket.0, Ordering::Release);
                    want_playing = false;
                    if let Ok(mut info) = playback_info.lock() {
                        info.position = Duration::ZERO;
                        info.duration = None;
                    }
                    spawn_fetch(ticket, location, latest.clone(), tx.clone());
                }

                Ok(AudioCmd::Fetched {
                    ticket,
                    location,
                    result,
                }) => {
                    if pending != Some(ticket) {
                        debug!(ticket = ticket.0, "dropping superseded fetch");
                        continue;
                    }
                    pending = None;

                    match open_source(stream.as_ref(), &location, result, volume) {
                        Ok((sink, duration)) => {
                            if want_playing {
                                sink.play();
                            }
                            if let Ok(mut info) = playback_info.lock() {
                                info.duration = duration;
                            }
                            current = Some(Current {
                                ticket,
                                sink,
                                ended: false,
                            });
                            let _ = events.send(BackendEvent::MetadataReady(ticket));
                        }
                        Err(e) => {
                            warn!(error = %e, "source unavailable");
                            want_playing = false;
                            let _ = events.send(BackendEvent::LoadFailed {
                                ticket,
                                reason: e.to_string(),
                            });
                        }
                    }
                }

                Ok(AudioCmd::Play) => {
                    want_playing = true;
                    if let Some(cur) = current.as_ref() {
                        cur.sink.play();
                    }
                }

                Ok(AudioCmd::Pause) => {
                    want_playing = false;
                    if let Some(cur) = current.as_ref() {
                        cur.sink.pause();
                    }
                }

                Ok(AudioCmd::Seek(position)) => {
                    let Some(cur) = current.as_mut() else {
                        continue;
                    };
                    if let Err(e) = cur.sink.try_seek(position) {
                        warn!(error = %e, ?position, "seek failed");
                    }
                    cur.ended = false;
                    if let Ok(mut info) = playback_info.lock() {
                        info.position = cur.sink.get_pos();
                    }
                }

                Ok(AudioCmd::SetVolume(level)) => {
                    volume = level;
                    if let Some(cur) = current.as_ref() {
                        cur.sink.set_volume(level);
                    }
                }

                Ok(AudioCmd::Quit) => {
                    if let Some(cur) = current.take() {
                        cur.sink.stop();
                    }
                    break;
                }

                Err(RecvTimeoutError::Timeout) => {
                    let Some(cur) = current.as_mut() else {
                        continue;
                    };
                    if !want_playing || cur.ended {
                        continue;
                    }

                    if let Ok(mut info) = playback_info.lock() {
                        info.position = cur.sink.get_pos();
                    }
                    let _ = events.send(BackendEvent::Progress);

                    if cur.sink.empty() {
                        cur.ended = true;
                        want_playing = false;
                        let _ = events.send(BackendEvent::Ended(cur.ticket));
                    }
                }

                Err(RecvTimeoutError::Disconnected) => break,
            }
        }
    })
}

fn open_source(
    stream: Option<&OutputStream>,
    location: &str,
    fetched: Result<Vec<u8>, BackendError>,
    volume: f32,
) -> Result<(Sink, Option<Duration>), BackendError> {
    let stream =
        stream.ok_or_else(|| BackendError::Output("no audio output device".to_string()))?;
    let (decoder, duration) = decode(location, fetched?)?;
    Ok((create_sink(stream, decoder, volume), duration))
}
