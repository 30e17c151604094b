/*
[INPUT]:  YAML configuration file
[OUTPUT]: Parsed portal configuration
[POS]:    Configuration layer - connection setup
[UPDATE]: When adding new configuration options
*/

use std::time::Duration;

use serde::{Deserialize, Serialize};
use taskdesk_client::ClientConfig;

/// Top-level configuration for the portal TUI
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PortalConfig {
    /// Origin of the portal backend (no trailing path)
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Overall request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    /// Connect timeout in seconds
    #[serde(default = "default_connect_timeout_secs")]
    pub connect_timeout_secs: u64,
    /// Requested page size; the server-confirmed value wins after the
    /// first fetch
    #[serde(default = "default_page_limit")]
    pub page_limit: u32,
}

impl Default for PortalConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
            connect_timeout_secs: default_connect_timeout_secs(),
            page_limit: default_page_limit(),
        }
    }
}

fn default_base_url() -> String {
    "http://localhost:3000".to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_connect_timeout_secs() -> u64 {
    10
}

fn default_page_limit() -> u32 {
    taskdesk_client::DEFAULT_PAGE_LIMIT
}

impl PortalConfig {
    /// Load configuration from YAML file
    pub fn from_file(path: &str) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Self = serde_yaml::from_str(&content)?;
        Ok(config)
    }

    /// Client timeouts derived from this configuration
    pub fn client_config(&self) -> ClientConfig {
        ClientConfig {
            timeout: Duration::from_secs(self.timeout_secs),
            connect_timeout: Duration::from_secs(self.connect_timeout_secs),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_yaml_falls_back_to_defaults() {
        let config: PortalConfig =
            serde_yaml::from_str("base_url: \"https://portal.example.com\"\n").unwrap();

        assert_eq!(config.base_url, "https://portal.example.com");
        assert_eq!(config.timeout_secs, 30);
        assert_eq!(config.page_limit, taskdesk_client::DEFAULT_PAGE_LIMIT);
    }

    #[test]
    fn client_config_uses_configured_timeouts() {
        let config = PortalConfig {
            timeout_secs: 5,
            connect_timeout_secs: 2,
            ..PortalConfig::default()
        };

        let client_config = config.client_config();
        assert_eq!(client_config.timeout, Duration::from_secs(5));
        assert_eq!(client_config.connect_timeout, Duration::from_secs(2));
    }
}
