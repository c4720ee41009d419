//! Filesystem-level tests for the validation pipeline.

use std::fs;
use std::path::Path;
use std::sync::Mutex;
use std::time::SystemTime;

use crate::layout::InstallLayout;
use crate::manifest::{BuildManifest, FileType, StaticHashIndex};

use super::{Sha256Hasher, StopCondition, UpdaterLifecycle, Validator};

const CLIENT_VERSION: &str = "1.7.3";

// SHA-256 digests of the fixture contents written below.
const BASE_DIGEST: &str = "a4d42e4e3eeb8079bf0e01d6be3bd8c94aeb8e10798fc121d1e062648fdb73a1";
const CLIENT_DIGEST: &str = "5e569684a6cab3efd8ffaf37b296f7419efcfbe359b434b97808a18746862044";
const INPUT_DIGEST: &str = "19ce38b8e0e87937709920cd606c2cdaa19bb340c1c7413f4a38aa19bbf11dc5";
const RENDER_DIGEST: &str = "28b77d0597b47b8f0158b71998bebd7b388845dc1846a97e13d0169223fbb393";
const RENDER_UTIL_DIGEST: &str =
    "de93c9cfd32cb1692e2879f972e5b8b6538d41636dee381e9eff68e650d57bf9";
const NETIO_DIGEST: &str = "728f4c5e3d282824cd0d57336c97dbb0b3079737b7a41c85891291d6049e59d6";
const AUDIO_DIGEST: &str = "08ff81279e2b23ecaf532140940bfd695785ee7f83b1d592f6b61e7f15f61178";

/// Lifecycle stub that records callback order and the finish flag.
#[derive(Default)]
struct RecordingLifecycle {
    events: Mutex<Vec<String>>,
}

impl RecordingLifecycle {
    fn events(&self) -> Vec<String> {
        self.events.lock().unwrap().clone()
    }
}

impl UpdaterLifecycle for RecordingLifecycle {
    fn validation_started(&self, _started_at: SystemTime) {
        self.events.lock().unwrap().push("started".to_string());
    }

    fn validation_finished(&self, passed: bool) {
        self.events
            .lock()
            .unwrap()
            .push(format!("finished:{}", passed));
    }
}

struct Fixture {
    // Held so the temp dir outlives the run.
    _dir: tempfile::TempDir,
    layout: InstallLayout,
    manifest: BuildManifest,
    index: StaticHashIndex,
}

fn write(path: &Path, contents: &str) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, contents).unwrap();
}

/// A complete, correct install: five fixed archives plus two declared
/// libraries, all digest-matched by the index and manifest.
fn fixture() -> Fixture {
    let dir = tempfile::tempdir().unwrap();
    let layout = InstallLayout::new(dir.path());

    write(&layout.fixed_path(FileType::Base), "base-archive-bytes\n");
    write(&layout.client_path(), "client-archive-bytes\n");
    write(&layout.fixed_path(FileType::Input), "input-library-bytes\n");
    write(&layout.fixed_path(FileType::Render), "render-library-bytes\n");
    write(&layout.fixed_path(FileType::RenderUtil), "render-util-bytes\n");
    write(&layout.library_path("netio"), "netio-library-bytes\n");
    write(&layout.library_path("audio"), "audio-library-bytes\n");

    let manifest = BuildManifest::new(CLIENT_VERSION, CLIENT_DIGEST)
        .with_library("netio", "2.1")
        .with_library("audio", "0.9");

    let mut index = StaticHashIndex::new();
    index.insert_fixed(FileType::Base, CLIENT_VERSION, BASE_DIGEST);
    index.insert_fixed(FileType::Input, CLIENT_VERSION, INPUT_DIGEST);
    index.insert_fixed(FileType::Render, CLIENT_VERSION, RENDER_DIGEST);
    index.insert_fixed(FileType::RenderUtil, CLIENT_VERSION, RENDER_UTIL_DIGEST);
    index.insert_library("netio", "2.1", NETIO_DIGEST);
    index.insert_library("audio", "0.9", AUDIO_DIGEST);

    Fixture {
        _dir: dir,
        layout,
        manifest,
        index,
    }
}

fn run(fx: &Fixture, lifecycle: &RecordingLifecycle) -> super::ValidationOutcome {
    Validator::new(
        fx.layout.clone(),
        &fx.manifest,
        &fx.index,
        Sha256Hasher,
        lifecycle,
    )
    .run()
}

#[test]
fn all_files_valid_passes() {
    let fx = fixture();
    let lifecycle = RecordingLifecycle::default();

    let outcome = run(&fx, &lifecycle);

    assert!(outcome.is_valid());
    assert!(!outcome.has_errors());
    assert!(outcome.cleanup_ok());
    assert_eq!(outcome.stop_condition(), &StopCondition::Completed);
    assert_eq!(lifecycle.events(), ["started", "finished:true"]);

    // Nothing was deleted.
    assert!(fx.layout.client_path().exists());
    assert!(fx.layout.library_path("audio").exists());
}

#[test]
fn missing_base_archive_stops_before_later_checks() {
    let fx = fixture();
    fs::remove_file(fx.layout.fixed_path(FileType::Base)).unwrap();
    // Corrupt a later file: the early exit must leave it untouched.
    write(&fx.layout.fixed_path(FileType::Render), "tampered-bytes\n");

    let lifecycle = RecordingLifecycle::default();
    let outcome = run(&fx, &lifecycle);

    assert!(!outcome.is_valid());
    assert!(outcome.has_errors());
    assert!(outcome.cleanup_ok());
    assert_eq!(
        outcome.stop_condition(),
        &StopCondition::MissingFile {
            file: "base.jar".to_string()
        }
    );
    assert_eq!(lifecycle.events(), ["started", "finished:false"]);

    // The corrupt render.jar was never inspected, so it is still there.
    assert!(fx.layout.fixed_path(FileType::Render).exists());
}

#[test]
fn corrupt_base_archive_is_deleted_and_stops_the_run() {
    let fx = fixture();
    write(&fx.layout.fixed_path(FileType::Base), "tampered-bytes\n");
    // A later missing file must go unnoticed this run.
    fs::remove_file(fx.layout.library_path("netio")).unwrap();

    let lifecycle = RecordingLifecycle::default();
    let outcome = run(&fx, &lifecycle);

    assert!(!outcome.is_valid());
    assert!(outcome.has_errors());
    assert!(outcome.cleanup_ok());
    assert_eq!(
        outcome.stop_condition(),
        &StopCondition::CorruptFile {
            file: "base.jar".to_string(),
            removed: true
        }
    );

    assert!(!fx.layout.fixed_path(FileType::Base).exists());
    // Every other file survived the run.
    assert!(fx.layout.client_path().exists());
    assert!(fx.layout.fixed_path(FileType::Input).exists());
    assert!(fx.layout.library_path("audio").exists());
}

#[test]
fn corrupt_client_archive_is_deleted() {
    let fx = fixture();
    write(&fx.layout.client_path(), "tampered-bytes\n");

    let lifecycle = RecordingLifecycle::default();
    let outcome = run(&fx, &lifecycle);

    assert_eq!(
        outcome.stop_condition(),
        &StopCondition::CorruptFile {
            file: "client.jar".to_string(),
            removed: true
        }
    );
    assert!(!fx.layout.client_path().exists());
    // base.jar passed its check before the stop and is untouched.
    assert!(fx.layout.fixed_path(FileType::Base).exists());
}

#[test]
fn unknown_library_version_is_treated_as_mismatch() {
    let mut fx = fixture();
    // Re-declare audio at a version the index has never heard of.
    fx.manifest = BuildManifest::new(CLIENT_VERSION, CLIENT_DIGEST)
        .with_library("netio", "2.1")
        .with_library("audio", "9.9");

    let lifecycle = RecordingLifecycle::default();
    let outcome = run(&fx, &lifecycle);

    assert!(!outcome.is_valid());
    assert_eq!(
        outcome.stop_condition(),
        &StopCondition::CorruptFile {
            file: "audio.jar".to_string(),
            removed: true
        }
    );
    assert!(!fx.layout.library_path("audio").exists());
    // The resolvable library before it passed and survived.
    assert!(fx.layout.library_path("netio").exists());
}

#[test]
fn missing_declared_library_stops_without_deletion() {
    let fx = fixture();
    fs::remove_file(fx.layout.library_path("netio")).unwrap();

    let lifecycle = RecordingLifecycle::default();
    let outcome = run(&fx, &lifecycle);

    assert_eq!(
        outcome.stop_condition(),
        &StopCondition::MissingFile {
            file: "netio.jar".to_string()
        }
    );
    // audio.jar comes after netio in the manifest and was not checked.
    assert!(fx.layout.library_path("audio").exists());
}

#[test]
fn revalidation_of_a_correct_set_is_idempotent() {
    let fx = fixture();

    let first = run(&fx, &RecordingLifecycle::default());
    let second = run(&fx, &RecordingLifecycle::default());

    assert!(first.is_valid());
    assert!(second.is_valid());
    assert!(!second.has_errors());
    assert!(fx.layout.fixed_path(FileType::Base).exists());
    assert!(fx.layout.library_path("netio").exists());
}

#[test]
fn unreadable_client_digest_counts_as_mismatch() {
    let fx = fixture();
    // Replace the client archive with a directory: it "exists" but cannot be
    // hashed, so the actual digest is unresolved and the check must fail.
    fs::remove_file(fx.layout.client_path()).unwrap();
    fs::create_dir(fx.layout.client_path()).unwrap();

    let lifecycle = RecordingLifecycle::default();
    let outcome = run(&fx, &lifecycle);

    assert!(!outcome.is_valid());
    assert!(outcome.has_errors());
    // remove_file on a directory fails, which is exactly the deletion result
    // the outcome must surface.
    assert_eq!(
        outcome.stop_condition(),
        &StopCondition::CorruptFile {
            file: "client.jar".to_string(),
            removed: false
        }
    );
    assert!(!outcome.cleanup_ok());
}
