//! Build manifest model and the expected-digest catalog.
//!
//! A `BuildManifest` pins one build: the client version, the client archive's
//! digest, and the declared library versions. The catalog of per-version
//! digests for everything else lives behind [`HashIndex`]; the updater fills
//! a [`StaticHashIndex`] from whatever listing it fetched.

use std::collections::HashMap;

/// Fixed required archives, checked on every run regardless of manifest.
/// The client archive is not listed here; its digest comes straight from
/// the manifest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FileType {
    /// Core game runtime archive.
    Base,
    /// Input-device library.
    Input,
    /// Graphics subsystem library.
    Render,
    /// Graphics utility library.
    RenderUtil,
}

impl FileType {
    /// On-disk file name in the binary directory.
    pub fn file_name(self) -> &'static str {
        match self {
            FileType::Base => "base.jar",
            FileType::Input => "input.jar",
            FileType::Render => "render.jar",
            FileType::RenderUtil => "render_util.jar",
        }
    }
}

/// A library declared by the manifest: name plus pinned version.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeclaredLibrary {
    pub name: String,
    pub version: String,
}

/// Immutable record of one build's expected content.
///
/// Library order follows the manifest declaration order; the validator
/// enumerates all of them.
#[derive(Debug, Clone)]
pub struct BuildManifest {
    client_version: String,
    client_digest: String,
    libraries: Vec<DeclaredLibrary>,
}

impl BuildManifest {
    pub fn new(client_version: impl Into<String>, client_digest: impl Into<String>) -> Self {
        Self {
            client_version: client_version.into(),
            client_digest: client_digest.into(),
            libraries: Vec::new(),
        }
    }

    /// Append a declared library, keeping declaration order.
    pub fn with_library(mut self, name: impl Into<String>, version: impl Into<String>) -> Self {
        self.libraries.push(DeclaredLibrary {
            name: name.into(),
            version: version.into(),
        });
        self
    }

    pub fn client_version(&self) -> &str {
        &self.client_version
    }

    /// Expected digest of the client archive.
    pub fn client_digest(&self) -> &str {
        &self.client_digest
    }

    pub fn libraries(&self) -> &[DeclaredLibrary] {
        &self.libraries
    }
}

/// Expected-digest catalog. `None` is the sentinel for an unknown key and is
/// never treated as a match by the validator.
pub trait HashIndex {
    /// Digest of a fixed archive for the given client version.
    fn fixed_digest(&self, ty: FileType, version: &str) -> Option<String>;
    /// Digest of a declared library at the given version.
    fn library_digest(&self, name: &str, version: &str) -> Option<String>;
}

/// In-memory catalog, filled by the updater from its fetched digest listing.
#[derive(Debug, Default)]
pub struct StaticHashIndex {
    fixed: HashMap<(FileType, String), String>,
    libraries: HashMap<(String, String), String>,
}

impl StaticHashIndex {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert_fixed(
        &mut self,
        ty: FileType,
        version: impl Into<String>,
        digest: impl Into<String>,
    ) {
        self.fixed.insert((ty, version.into()), digest.into());
    }

    pub fn insert_library(
        &mut self,
        name: impl Into<String>,
        version: impl Into<String>,
        digest: impl Into<String>,
    ) {
        self.libraries
            .insert((name.into(), version.into()), digest.into());
    }
}

impl HashIndex for StaticHashIndex {
    fn fixed_digest(&self, ty: FileType, version: &str) -> Option<String> {
        self.fixed.get(&(ty, version.to_string())).cloned()
    }

    fn library_digest(&self, name: &str, version: &str) -> Option<String> {
        self.libraries
            .get(&(name.to_string(), version.to_string()))
            .cloned()
    }
}
