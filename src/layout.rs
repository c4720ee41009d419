//! Install-directory layout and path resolution.
//!
//! Pure path arithmetic; nothing here touches the filesystem. The binary
//! directory holds the fixed archives, with declared libraries one level
//! down in a subdirectory.

use std::path::{Path, PathBuf};

use anyhow::Result;

use crate::config::UpdaterConfig;
use crate::manifest::FileType;

/// Subdirectory of the install root holding the binaries.
pub const BIN_SUBDIR: &str = "bin";

/// Default subdirectory of the binary dir holding declared libraries.
pub const DEFAULT_LIBRARY_SUBDIR: &str = "lib";

/// File name of the build-specific client archive.
pub const CLIENT_ARCHIVE: &str = "client.jar";

/// Extension appended to declared library names (`<name>.jar`).
pub const ARCHIVE_EXT: &str = "jar";

/// Resolves on-disk paths for every archive the validator checks.
#[derive(Debug, Clone)]
pub struct InstallLayout {
    bin_dir: PathBuf,
    library_subdir: String,
}

impl InstallLayout {
    pub fn new(bin_dir: impl Into<PathBuf>) -> Self {
        Self {
            bin_dir: bin_dir.into(),
            library_subdir: DEFAULT_LIBRARY_SUBDIR.to_string(),
        }
    }

    /// Layout for the configured install root.
    pub fn from_config(cfg: &UpdaterConfig) -> Result<Self> {
        Ok(Self {
            bin_dir: cfg.bin_dir()?,
            library_subdir: cfg.library_subdir.clone(),
        })
    }

    pub fn bin_dir(&self) -> &Path {
        &self.bin_dir
    }

    pub fn lib_dir(&self) -> PathBuf {
        self.bin_dir.join(&self.library_subdir)
    }

    /// Path of the build-specific client archive.
    pub fn client_path(&self) -> PathBuf {
        self.bin_dir.join(CLIENT_ARCHIVE)
    }

    /// Path of a fixed required archive.
    pub fn fixed_path(&self, ty: FileType) -> PathBuf {
        self.bin_dir.join(ty.file_name())
    }

    /// Path of a declared library archive: `<lib dir>/<name>.jar`.
    pub fn library_path(&self, name: &str) -> PathBuf {
        self.lib_dir().join(format!("{}.{}", name, ARCHIVE_EXT))
    }
}
