use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

use crate::layout::{BIN_SUBDIR, DEFAULT_LIBRARY_SUBDIR};

fn default_library_subdir() -> String {
    DEFAULT_LIBRARY_SUBDIR.to_string()
}

/// Updater configuration loaded from `~/.config/prelaunch/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdaterConfig {
    /// Install root; when missing, the XDG data dir is used.
    #[serde(default)]
    pub install_dir: Option<PathBuf>,
    /// Subdirectory of the binary dir holding declared library archives.
    #[serde(default = "default_library_subdir")]
    pub library_subdir: String,
}

impl Default for UpdaterConfig {
    fn default() -> Self {
        Self {
            install_dir: None,
            library_subdir: default_library_subdir(),
        }
    }
}

impl UpdaterConfig {
    /// Effective binary directory: `<install root>/bin`.
    pub fn bin_dir(&self) -> Result<PathBuf> {
        let root = match &self.install_dir {
            Some(dir) => dir.clone(),
            None => xdg::BaseDirectories::with_prefix("prelaunch")?.get_data_home(),
        };
        Ok(root.join(BIN_SUBDIR))
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("prelaunch")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<UpdaterConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = UpdaterConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(&path)?;
    let cfg: UpdaterConfig = toml::from_str(&data)?;
    Ok(cfg)
}
