//! Ordered check-item descriptors: fixed archives first, then manifest
//! libraries.

use std::path::PathBuf;

use crate::layout::{InstallLayout, CLIENT_ARCHIVE};
use crate::manifest::{BuildManifest, FileType};

/// Where an item's expected digest comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum DigestKey {
    /// The manifest's dedicated client-archive digest field.
    ClientArchive,
    /// Catalog lookup by fixed file type and client version.
    Fixed(FileType),
    /// Catalog lookup by library name and pinned version.
    Library { name: String, version: String },
}

/// One entry of the validation checklist.
#[derive(Debug, Clone)]
pub(crate) struct CheckItem {
    /// File name used in diagnostics.
    pub label: String,
    pub path: PathBuf,
    pub key: DigestKey,
}

impl CheckItem {
    fn fixed(layout: &InstallLayout, ty: FileType) -> Self {
        Self {
            label: ty.file_name().to_string(),
            path: layout.fixed_path(ty),
            key: DigestKey::Fixed(ty),
        }
    }
}

/// Build the checklist for one run. The order is fixed: base archive, client
/// archive, input and graphics libraries, then every manifest-declared
/// library in declaration order.
pub(crate) fn build(layout: &InstallLayout, manifest: &BuildManifest) -> Vec<CheckItem> {
    let mut items = Vec::with_capacity(5 + manifest.libraries().len());

    items.push(CheckItem::fixed(layout, FileType::Base));
    items.push(CheckItem {
        label: CLIENT_ARCHIVE.to_string(),
        path: layout.client_path(),
        key: DigestKey::ClientArchive,
    });
    items.push(CheckItem::fixed(layout, FileType::Input));
    items.push(CheckItem::fixed(layout, FileType::Render));
    items.push(CheckItem::fixed(layout, FileType::RenderUtil));

    for lib in manifest.libraries() {
        let path = layout.library_path(&lib.name);
        items.push(CheckItem {
            label: format!("{}.jar", lib.name),
            path,
            key: DigestKey::Library {
                name: lib.name.clone(),
                version: lib.version.clone(),
            },
        });
    }

    items
}
