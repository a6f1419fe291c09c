//! Media fetching: local files are read from disk, `http(s)` URLs are
//! downloaded with `ureq`. Fetches run on their own thread and report back
//! to the audio thread.

use std::io::Read;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::mpsc::Sender;
use std::thread;

use tracing::{debug, warn};

use crate::library::is_remote;
use crate::player::SourceTicket;

use super::types::{AudioCmd, BackendError};

/// Upper bound on a downloaded media file.
const MAX_MEDIA_BYTES: usize = 256 * 1024 * 1024;

const CHUNK: usize = 64 * 1024;

/// Read the whole media file at `location` into memory.
///
/// Returns `BackendError::Cancelled` once `still_wanted` turns `false`;
/// downloads check it between chunks.
pub(super) fn fetch_bytes(
    location: &str,
    still_wanted: impl Fn() -> bool,
) -> Result<Vec<u8>, BackendError> {
    if !still_wanted() {
        return Err(BackendError::Cancelled {
            location: location.to_string(),
        });
    }
    if !is_remote(location) {
        return std::fs::read(location).map_err(|source| BackendError::Io {
            location: location.to_string(),
            source,
        });
    }

    let response = ureq::get(location)
        .call()
        .map_err(|e| BackendError::Fetch {
            location: location.to_string(),
            reason: e.to_string(),
        })?;

    read_body(response.into_reader(), location, MAX_MEDIA_BYTES, still_wanted)
}

/// Read `reader` to the end, at most `limit` bytes.
pub(super) fn read_body(
    mut reader: impl Read,
    location: &str,
    limit: usize,
    still_wanted: impl Fn() -> bool,
) -> Result<Vec<u8>, BackendError> {
    let mut bytes = Vec::new();
    let mut chunk = vec![0u8; CHUNK];
    loop {
        if !still_wanted() {
            return Err(BackendError::Cancelled {
                location: location.to_string(),
            });
        }
        let n = reader.read(&mut chunk).map_err(|source| BackendError::Io {
            location: location.to_string(),
            source,
        })?;
        if n == 0 {
            return Ok(bytes);
        }
        bytes.extend_from_slice(&chunk[..n]);
        if bytes.len() > limit {
            warn!(%location, limit, "media file exceeds the size limit, truncating");
            bytes.truncate(limit);
            return Ok(bytes);
        }
    }
}

/// Fetch `location` in the background and hand the result to the audio thread.
///
/// `latest` holds the ticket of the most recent load; the fetch gives up as
/// soon as it no longer matches `ticket`.
pub(super) fn spawn_fetch(
    ticket: SourceTicket,
    location: String,
    latest: Arc<AtomicU64>,
    tx: Sender<AudioCmd>,
) {
    thread::spawn(move || {
        debug!(ticket = ticket.0, %location, "fetching source");
        let result = fetch_bytes(&location, || latest.load(Ordering::Acquire) == ticket.0);
        if let Err(BackendError::Cancelled { .. }) = result {
            debug!(ticket = ticket.0, %location, "fetch superseded");
            return;
        }
        let _ = tx.send(AudioCmd::Fetched {
            ticket,
            location,
            result,
        });
    });
}
