//! Path management for Inkwell configuration files.
//!
//! # Directory Structure
//!
//! ```text
//! ~/.config/inkwell/           # Config directory (or $INKWELL_CONFIG_DIR)
//! ├── config.toml              # Client configuration
//! └── session.json             # Persisted session credential
//! ```

use std::path::{Path, PathBuf};

/// Environment variable that relocates the config directory.
pub const CONFIG_DIR_ENV: &str = "INKWELL_CONFIG_DIR";

const APP_DIR: &str = "inkwell";

/// Errors that can occur during path resolution.
#[derive(Debug)]
pub enum PathError {
    /// Home/config directory could not be determined.
    ConfigDirNotFound,
}

impl std::fmt::Display for PathError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PathError::ConfigDirNotFound => write!(f, "Cannot find config directory"),
        }
    }
}

impl std::error::Error for PathError {}

/// Resolves every file Inkwell reads or writes.
#[derive(Debug, Clone)]
pub struct InkwellPaths {
    config_dir: PathBuf,
}

impl InkwellPaths {
    /// Uses `base` when given, else `$INKWELL_CONFIG_DIR`, else the
    /// platform config directory (e.g. `~/.config/inkwell`).
    pub fn new(base: Option<&Path>) -> Result<Self, PathError> {
        let config_dir = match base {
            Some(path) => path.to_path_buf(),
            None => Self::default_config_dir()?,
        };
        Ok(Self { config_dir })
    }

    fn default_config_dir() -> Result<PathBuf, PathError> {
        if let Some(dir) = std::env::var_os(CONFIG_DIR_ENV).filter(|v| !v.is_empty()) {
            return Ok(PathBuf::from(dir));
        }
        dirs::config_dir()
            .map(|dir| dir.join(APP_DIR))
            .ok_or(PathError::ConfigDirNotFound)
    }

    pub fn config_dir(&self) -> &Path {
        &self.config_dir
    }

    pub fn config_file(&self) -> PathBuf {
        self.config_dir.join("config.toml")
    }

    pub fn session_file(&self) -> PathBuf {
        self.config_dir.join("session.json")
    }
}
