use anyhow::{Context as _, Result};
use inkwell_application::InkwellApp;
use inkwell_core::config::ClientConfig;
use inkwell_core::session::SessionService;
use inkwell_infrastructure::config_service::apply_overrides;
use inkwell_infrastructure::{ConfigService, FileSessionStore, InkwellPaths};
use inkwell_interaction::HttpBlogApi;
use std::sync::Arc;

/// Everything a command needs, wired from the on-disk configuration.
pub struct Context {
    pub app: InkwellApp,
    pub config: ClientConfig,
    pub paths: InkwellPaths,
}

impl Context {
    /// Loads config and the stored session. `api_url` wins over both the
    /// config file and the environment.
    pub fn load(api_url: Option<String>) -> Result<Self> {
        let paths = InkwellPaths::new(None).context("Failed to resolve config directory")?;
        let config = ConfigService::new(&paths)
            .get_config()
            .with_context(|| format!("Failed to load {}", paths.config_file().display()))?;
        let config = apply_overrides(config, api_url);
        tracing::debug!(api_url = %config.base_url(), "Loaded client config");

        let store = FileSessionStore::with_path(paths.session_file());
        let session = Arc::new(SessionService::new(Arc::new(store)));
        let api = HttpBlogApi::from_config(&config, session.clone())
            .context("Failed to create HTTP client")?;
        let app = InkwellApp::new(session, Arc::new(api)).with_stale_policy(config.stale_policy);

        Ok(Self { app, config, paths })
    }
}
