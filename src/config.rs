use serde::{Deserialize, Serialize};
use std::{fs, net::SocketAddr, path::Path, time::Duration};

use crate::countries::DEFAULT_GEO;
use crate::error::{Result, TrendsError};

pub const GEO_PLACEHOLDER: &str = "{geo}";
pub const DEFAULT_FEED_URL: &str = "https://trends.google.com/trending/rss?geo={geo}";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_bind")]
    pub bind: String,
    #[serde(default = "default_feed_url")]
    pub feed_url: String,
    /// Outbound request timeout. Unset means the upstream call may wait forever.
    #[serde(default)]
    pub timeout_secs: Option<u64>,
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
    #[serde(default = "default_geo")]
    pub default_geo: String,
}

fn default_bind() -> String { "127.0.0.1:3002".to_string() }
fn default_feed_url() -> String { DEFAULT_FEED_URL.to_string() }
fn default_user_agent() -> String { format!("daily-trends/{}", env!("CARGO_PKG_VERSION")) }
fn default_geo() -> String { DEFAULT_GEO.to_string() }

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: default_bind(),
            feed_url: default_feed_url(),
            timeout_secs: None,
            user_agent: default_user_agent(),
            default_geo: default_geo(),
        }
    }
}

impl ServerConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let config = Self::from_toml_str(&content)?;
        log::debug!("loaded config from {}", path.display());
        Ok(config)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: ServerConfig = toml::from_str(content)
            .map_err(|err| TrendsError::Config(format!("failed to parse config: {err}")))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if !self.feed_url.contains(GEO_PLACEHOLDER) {
            return Err(TrendsError::Config(format!(
                "feed_url must contain {GEO_PLACEHOLDER}: {}",
                self.feed_url
            )));
        }
        if self.default_geo.trim().is_empty() {
            return Err(TrendsError::Config("default_geo is empty".to_string()));
        }
        self.socket_addr()?;
        Ok(())
    }

    pub fn socket_addr(&self) -> Result<SocketAddr> {
        self.bind
            .trim()
            .parse()
            .map_err(|err| TrendsError::Config(format!("invalid bind address {}: {err}", self.bind)))
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.filter(|secs| *secs > 0).map(Duration::from_secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_uses_defaults() {
        let config = ServerConfig::from_toml_str("").unwrap();
        assert_eq!(config, ServerConfig::default());
        assert_eq!(config.bind, "127.0.0.1:3002");
        assert_eq!(config.timeout(), None);
    }

    #[test]
    fn partial_file_overrides_fields() {
        let config = ServerConfig::from_toml_str(
            "bind = \"0.0.0.0:8080\"\ntimeout_secs = 5\ndefault_geo = \"gb\"\n",
        )
        .unwrap();
        assert_eq!(config.socket_addr().unwrap().port(), 8080);
        assert_eq!(config.timeout(), Some(Duration::from_secs(5)));
        assert_eq!(config.default_geo, "gb");
        assert_eq!(config.feed_url, DEFAULT_FEED_URL);
    }

    #[test]
    fn feed_url_without_placeholder_is_rejected() {
        let err = ServerConfig::from_toml_str("feed_url = \"https://example.com/rss\"\n").unwrap_err();
        assert!(matches!(err, TrendsError::Config(_)));
    }

    #[test]
    fn bad_bind_and_bad_toml_are_rejected() {
        assert!(ServerConfig::from_toml_str("bind = \"localhost\"\n").is_err());
        assert!(ServerConfig::from_toml_str("bind = [").is_err());
    }

    #[test]
    fn zero_timeout_means_no_timeout() {
        let config = ServerConfig {
            timeout_secs: Some(0),
            ..ServerConfig::default()
        };
        assert_eq!(config.timeout(), None);
    }
}
