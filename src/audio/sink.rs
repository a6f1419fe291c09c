//! Decoding fetched bytes and preparing a paused `rodio` sink.

use std::io::Cursor;
use std::time::Duration;

use lofty::file::AudioFile;
use lofty::probe::Probe;
use rodio::{Decoder, OutputStream, Sink, Source};

use super::types::BackendError;

pub(super) type MediaDecoder = Decoder<Cursor<Vec<u8>>>;

/// Decode `bytes` and report the total duration when it can be determined.
///
/// Some decoders cannot tell the length of a stream; the container headers
/// are probed with `lofty` in that case.
pub(super) fn decode(
    location: &str,
    bytes: Vec<u8>,
) -> Result<(MediaDecoder, Option<Duration>), BackendError> {
    let probed = probe_duration(&bytes);
    let decoder = Decoder::new(Cursor::new(bytes)).map_err(|e| BackendError::Decode {
        location: location.to_string(),
        reason: e.to_string(),
    })?;

    let duration = decoder
        .total_duration()
        .or(probed)
        .filter(|d| !d.is_zero());
    Ok((decoder, duration))
}

/// Read the duration from the container headers.
pub(super) fn probe_duration(bytes: &[u8]) -> Option<Duration> {
    let probe = Probe::new(Cursor::new(bytes)).guess_file_type().ok()?;
    let tagged = probe.read().ok()?;
    Some(tagged.properties().duration()).filter(|d| !d.is_zero())
}

/// Create a paused `Sink` on `stream` playing `decoder` at `volume`.
pub(super) fn create_sink(stream: &OutputStream, decoder: MediaDecoder, volume: f32) -> Sink {
    let sink = Sink::connect_new(stream.mixer());
    sink.set_volume(volume);
    sink.append(decoder);
    sink.pause();
    sink
}
