//! Configuration service implementation.
//!
//! Loads [`ClientConfig`] from `config.toml` and applies environment
//! overrides. A missing file yields defaults.

use crate::paths::InkwellPaths;
use inkwell_core::config::ClientConfig;
use inkwell_core::error::Result;
use std::fs;
use std::path::PathBuf;
use std::sync::{Arc, RwLock};

/// Environment variable that overrides `api_url`.
pub const API_URL_ENV: &str = "INKWELL_API_URL";

/// Configuration service that loads and caches the client configuration.
#[derive(Debug, Clone)]
pub struct ConfigService {
    path: PathBuf,
    /// Cached configuration loaded from file.
    config: Arc<RwLock<Option<ClientConfig>>>,
}

impl ConfigService {
    pub fn new(paths: &InkwellPaths) -> Self {
        Self::with_path(paths.config_file())
    }

    /// Creates a service reading a custom file (for testing).
    pub fn with_path(path: PathBuf) -> Self {
        Self {
            path,
            config: Arc::new(RwLock::new(None)),
        }
    }

    /// Gets the configuration, loading from file if not cached.
    pub fn get_config(&self) -> Result<ClientConfig> {
        {
            let read_lock = self.config.read().unwrap_or_else(|p| p.into_inner());
            if let Some(ref cached) = *read_lock {
                return Ok(cached.clone());
            }
        }

        let env_url = std::env::var(API_URL_ENV).ok();
        let loaded = apply_overrides(self.load_file()?, env_url);

        {
            let mut write_lock = self.config.write().unwrap_or_else(|p| p.into_inner());
            *write_lock = Some(loaded.clone());
        }

        Ok(loaded)
    }

    /// Invalidates the cache, forcing a reload on next access.
    pub fn invalidate_cache(&self) {
        let mut write_lock = self.config.write().unwrap_or_else(|p| p.into_inner());
        *write_lock = None;
    }

    fn load_file(&self) -> Result<ClientConfig> {
        if !self.path.exists() {
            tracing::debug!("No config at {}, using defaults", self.path.display());
            return Ok(ClientConfig::default());
        }
        let content = fs::read_to_string(&self.path)?;
        Ok(toml::from_str(&content)?)
    }
}

/// Applies a non-blank `api_url` override.
pub fn apply_overrides(mut config: ClientConfig, api_url: Option<String>) -> ClientConfig {
    if let Some(url) = api_url.map(|u| u.trim().to_string()).filter(|u| !u.is_empty()) {
        config.api_url = url;
    }
    config
}

#[cfg(test)]
mod tests {
    use super::*;
    use inkwell_core::collection::StalePolicy;
    use inkwell_core::config::DEFAULT_API_URL;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_yields_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let service = ConfigService::with_path(temp_dir.path().join("config.toml"));
        let config = service.load_file().unwrap();
        assert_eq!(config, ClientConfig::default());
        assert_eq!(config.api_url, DEFAULT_API_URL);
    }

    #[test]
    fn test_file_values_are_loaded_and_cached() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        let content = r#"
api_url = "https://blogs.test"
request_timeout_secs = 5
stale_policy = "last_write_wins"
"#;
        fs::write(&path, content).unwrap();
        let service = ConfigService::with_path(path.clone());

        let config = service.load_file().unwrap();
        assert_eq!(config.request_timeout_secs, 5);
        assert_eq!(config.stale_policy, StalePolicy::LastWriteWins);

        let cached = service.get_config().unwrap();
        fs::write(&path, "request_timeout_secs = 9\n").unwrap();
        assert_eq!(service.get_config().unwrap(), cached);

        service.invalidate_cache();
        assert_eq!(service.get_config().unwrap().request_timeout_secs, 9);
    }

    #[test]
    fn test_invalid_toml_is_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        fs::write(&path, "api_url = ").unwrap();
        assert!(ConfigService::with_path(path).load_file().is_err());
    }

    #[test]
    fn test_override_ignores_blank() {
        let base = ClientConfig::default();
        assert_eq!(
            apply_overrides(base.clone(), Some("  ".to_string())).api_url,
            DEFAULT_API_URL
        );
        assert_eq!(
            apply_overrides(base, Some("https://x.test".to_string())).api_url,
            "https://x.test"
        );
    }
}
