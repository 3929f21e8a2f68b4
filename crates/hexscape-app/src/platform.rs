//! OS-specific directories for config and log files.

use std::path::{Path, PathBuf};

use crate::error::AppError;

const APP_NAME: &str = "hexscape";

/// Resolved application directories.
///
/// Follows OS conventions via `dirs` (XDG on Linux, Known Folders on
/// Windows, Library on macOS).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlatformDirs {
    /// Holds `config.ron`.
    pub config_dir: PathBuf,
    /// Holds the JSON log file in debug builds.
    pub log_dir: PathBuf,
}

impl PlatformDirs {
    /// Resolve directories without creating them.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NoConfigDir`] if the OS exposes no config directory.
    pub fn resolve() -> Result<Self, AppError> {
        let app_config = dirs::config_dir().ok_or(AppError::NoConfigDir)?.join(APP_NAME);
        let log_dir = dirs::cache_dir()
            .map(|cache| cache.join(APP_NAME).join("logs"))
            .unwrap_or_else(|| app_config.join("logs"));

        Ok(Self {
            config_dir: app_config,
            log_dir,
        })
    }

    /// Directories rooted under `root`, for tests and `--config` overrides.
    pub fn resolve_with_root(root: &Path) -> Self {
        Self {
            config_dir: root.to_path_buf(),
            log_dir: root.join("logs"),
        }
    }

    /// Creates both directories on disk.
    pub fn create_dirs(&self) -> Result<(), AppError> {
        std::fs::create_dir_all(&self.config_dir)?;
        std::fs::create_dir_all(&self.log_dir)?;
        Ok(())
    }
}
