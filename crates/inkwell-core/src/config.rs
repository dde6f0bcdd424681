//! Client configuration model.

use serde::{Deserialize, Serialize};

use crate::collection::StalePolicy;

pub const DEFAULT_API_URL: &str = "http://localhost:3000";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Settings read from `config.toml`.
///
/// ```toml
/// api_url = "https://blogs.example.com"
/// request_timeout_secs = 30
/// stale_policy = "discard_stale"
/// ```
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct ClientConfig {
    /// Base URL of the blog backend, without the `/api/v1` prefix
    pub api_url: String,
    pub request_timeout_secs: u64,
    pub stale_policy: StalePolicy,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            request_timeout_secs: DEFAULT_TIMEOUT_SECS,
            stale_policy: StalePolicy::default(),
        }
    }
}

impl ClientConfig {
    /// Base URL with any trailing slash removed.
    pub fn base_url(&self) -> &str {
        self.api_url.trim_end_matches('/')
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_toml_fills_defaults() {
        let config: ClientConfig = toml::from_str(r#"api_url = "https://blogs.test/""#).unwrap();
        assert_eq!(config.base_url(), "https://blogs.test");
        assert_eq!(config.request_timeout_secs, DEFAULT_TIMEOUT_SECS);
        assert_eq!(config.stale_policy, StalePolicy::DiscardStale);
    }

    #[test]
    fn test_stale_policy_is_snake_case() {
        let config: ClientConfig = toml::from_str(r#"stale_policy = "last_write_wins""#).unwrap();
        assert_eq!(config.stale_policy, StalePolicy::LastWriteWins);
    }
}
