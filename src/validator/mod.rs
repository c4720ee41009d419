//! Pre-launch integrity validation pipeline.
//!
//! Walks an ordered checklist (fixed archives, then manifest-declared
//! libraries), stopping at the first problem. A missing file stops the pass
//! with no deletion, on the assumption a download is pending; a digest
//! mismatch deletes the file so the repair cycle re-fetches it. At most one
//! file is acted on per run; the updater re-invokes validation after each
//! repair.

mod checklist;
mod compare;
mod outcome;
mod traits;

use std::fs;
use std::path::Path;
use std::time::SystemTime;

use crate::layout::InstallLayout;
use crate::manifest::{BuildManifest, HashIndex};

use checklist::DigestKey;

pub use outcome::{StopCondition, ValidationOutcome};
pub use traits::{ContentHasher, LoggingLifecycle, Sha256Hasher, UpdaterLifecycle};

/// One-shot validator for a single build's installed files.
///
/// Construct one per run, call [`Validator::run`] once, and inspect the
/// returned outcome. `run` never panics and never returns an error; every
/// failure mode is folded into the outcome flags.
pub struct Validator<'a, H, C, L>
where
    H: HashIndex,
    C: ContentHasher,
    L: UpdaterLifecycle,
{
    layout: InstallLayout,
    manifest: &'a BuildManifest,
    index: &'a H,
    hasher: C,
    lifecycle: &'a L,
}

impl<'a, H, C, L> Validator<'a, H, C, L>
where
    H: HashIndex,
    C: ContentHasher,
    L: UpdaterLifecycle,
{
    pub fn new(
        layout: InstallLayout,
        manifest: &'a BuildManifest,
        index: &'a H,
        hasher: C,
        lifecycle: &'a L,
    ) -> Self {
        Self {
            layout,
            manifest,
            index,
            hasher,
            lifecycle,
        }
    }

    /// Run the whole pass, reporting start and finish to the lifecycle
    /// observer whatever the outcome.
    pub fn run(self) -> ValidationOutcome {
        self.lifecycle.validation_started(SystemTime::now());
        let outcome = self.validate();
        self.lifecycle.validation_finished(outcome.is_valid());
        outcome
    }

    /// Sequential, short-circuiting pass over the checklist.
    fn validate(&self) -> ValidationOutcome {
        for item in checklist::build(&self.layout, self.manifest) {
            if !item.path.exists() {
                tracing::warn!("there is no {}", item.label);
                return ValidationOutcome::missing(item.label);
            }

            let expected = self.expected_digest(&item.key);
            if !compare::check(&self.hasher, &item.label, &item.path, expected) {
                tracing::warn!("invalid {}", item.label);
                let removed = remove_corrupt(&item.path);
                return ValidationOutcome::corrupt(item.label, removed);
            }
        }
        ValidationOutcome::completed()
    }

    fn expected_digest(&self, key: &DigestKey) -> Option<String> {
        match key {
            DigestKey::ClientArchive => Some(self.manifest.client_digest().to_string()),
            DigestKey::Fixed(ty) => self
                .index
                .fixed_digest(*ty, self.manifest.client_version()),
            DigestKey::Library { name, version } => self.index.library_digest(name, version),
        }
    }
}

/// Delete a corrupt file; returns whether the delete succeeded.
fn remove_corrupt(path: &Path) -> bool {
    match fs::remove_file(path) {
        Ok(()) => true,
        Err(e) => {
            tracing::warn!("could not remove {}: {}", path.display(), e);
            false
        }
    }
}

#[cfg(test)]
mod tests;
