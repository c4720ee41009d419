//! Collaborator seams: content hashing and updater lifecycle callbacks.

use std::path::Path;
use std::time::SystemTime;

use crate::checksum;

/// Computes the content digest of a file.
///
/// Returns `None` when the file cannot be read or hashed; the validator
/// treats that the same as a digest mismatch.
pub trait ContentHasher {
    fn file_digest(&self, path: &Path) -> Option<String>;
}

/// Production hasher: streaming SHA-256 via [`checksum::sha256_path`].
#[derive(Debug, Default, Clone, Copy)]
pub struct Sha256Hasher;

impl ContentHasher for Sha256Hasher {
    fn file_digest(&self, path: &Path) -> Option<String> {
        match checksum::sha256_path(path) {
            Ok(digest) => Some(digest),
            Err(e) => {
                tracing::debug!("could not hash {}: {:#}", path.display(), e);
                None
            }
        }
    }
}

/// Observer owned by the updater actor that drives validation runs.
///
/// The updater records the start time for its own bookkeeping and reacts to
/// the finish flag by scheduling downloads for whatever the run found
/// missing or removed. Retrying validation after a repair cycle is entirely
/// the observer's call.
pub trait UpdaterLifecycle {
    fn validation_started(&self, started_at: SystemTime);
    fn validation_finished(&self, passed: bool);
}

/// Lifecycle that only records the events in the log.
#[derive(Debug, Default, Clone, Copy)]
pub struct LoggingLifecycle;

impl UpdaterLifecycle for LoggingLifecycle {
    fn validation_started(&self, _started_at: SystemTime) {
        tracing::info!("validation started");
    }

    fn validation_finished(&self, passed: bool) {
        tracing::info!("validation finished: passed={}", passed);
    }
}
