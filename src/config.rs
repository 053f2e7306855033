//! Reaper configuration
//!
//! Everything is fixed when the reaper is created: target host, GET suffix,
//! TLS, and the minimum interval between requests. Configs come from the
//! builder or from a YAML file; missing keys take the defaults.
//!
//! ```yaml
//! hostname: oauth.reddit.com
//! reap_suffix: ""
//! tls: true
//! rate_ms: 1000
//! timeout_ms: 10000
//! user_agent: "linux:my-bot:v0.1 (by /u/someone)"
//! ```

use crate::error::{Error, Result, ResultExt};
use crate::reaper::request;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

/// Default API host
pub const DEFAULT_HOSTNAME: &str = "www.reddit.com";

/// Suffix the public host needs to return JSON instead of HTML
pub const DEFAULT_REAP_SUFFIX: &str = ".json";

/// Default minimum interval between requests
pub const DEFAULT_RATE: Duration = Duration::from_millis(2_000);

/// Default request timeout for the reqwest transport
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Configuration for a reaper
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReaperConfig {
    /// Target hostname, optionally with a port
    pub hostname: String,
    /// Suffix appended to GET paths
    pub reap_suffix: String,
    /// Use https (true) or http (false)
    pub tls: bool,
    /// Minimum interval between requests (`rate_ms` in YAML)
    #[serde(rename = "rate_ms", with = "millis")]
    pub rate: Duration,
    /// User agent sent by the default transport
    pub user_agent: String,
    /// Request timeout for the default transport (`timeout_ms` in YAML)
    #[serde(rename = "timeout_ms", with = "millis")]
    pub timeout: Duration,
}

impl Default for ReaperConfig {
    fn default() -> Self {
        Self {
            hostname: DEFAULT_HOSTNAME.to_string(),
            reap_suffix: DEFAULT_REAP_SUFFIX.to_string(),
            tls: true,
            rate: DEFAULT_RATE,
            user_agent: format!("reaper/{}", env!("CARGO_PKG_VERSION")),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

impl ReaperConfig {
    /// Create a new config builder
    pub fn builder() -> ReaperConfigBuilder {
        ReaperConfigBuilder::default()
    }

    /// Parse a config from YAML
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a config from a YAML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(Error::FileNotFound {
                path: path.display().to_string(),
            });
        }

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        Self::from_yaml_str(&content)
    }

    /// Check the config is usable
    pub fn validate(&self) -> Result<()> {
        if self.hostname.trim().is_empty() {
            return Err(Error::invalid_value("hostname", "must not be empty"));
        }
        if self.hostname.contains("://") {
            return Err(Error::invalid_value(
                "hostname",
                "must be a bare host, use `tls` to pick the scheme",
            ));
        }
        if self.user_agent.trim().is_empty() {
            return Err(Error::invalid_value("user_agent", "must not be empty"));
        }
        if self.timeout.is_zero() {
            return Err(Error::invalid_value("timeout", "must be greater than zero"));
        }
        Ok(())
    }

    /// URL scheme selected by `tls`
    pub fn scheme(&self) -> &'static str {
        request::scheme(self.tls)
    }
}

/// Durations as whole milliseconds in config files
mod millis {
    use serde::{Deserialize, Deserializer, Serializer};
    use std::time::Duration;

    pub fn serialize<S: Serializer>(value: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u64(u64::try_from(value.as_millis()).unwrap_or(u64::MAX))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Duration, D::Error> {
        u64::deserialize(deserializer).map(Duration::from_millis)
    }
}

/// Builder for reaper config
#[derive(Debug, Default)]
pub struct ReaperConfigBuilder {
    config: ReaperConfig,
}

impl ReaperConfigBuilder {
    /// Set the hostname
    pub fn hostname(mut self, hostname: impl Into<String>) -> Self {
        self.config.hostname = hostname.into();
        self
    }

    /// Set the GET path suffix
    pub fn reap_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.config.reap_suffix = suffix.into();
        self
    }

    /// Enable or disable TLS
    pub fn tls(mut self, tls: bool) -> Self {
        self.config.tls = tls;
        self
    }

    /// Set the minimum interval between requests
    pub fn rate(mut self, rate: Duration) -> Self {
        self.config.rate = rate;
        self
    }

    /// Set user agent
    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.config.user_agent = agent.into();
        self
    }

    /// Set the request timeout
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.config.timeout = timeout;
        self
    }

    /// Build the config
    pub fn build(self) -> ReaperConfig {
        self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::io::Write;

    #[test]
    fn test_config_default() {
        let config = ReaperConfig::default();
        assert_eq!(config.hostname, "www.reddit.com");
        assert_eq!(config.reap_suffix, ".json");
        assert!(config.tls);
        assert_eq!(config.rate, Duration::from_secs(2));
        assert_eq!(config.timeout, Duration::from_secs(30));
        assert!(config.user_agent.starts_with("reaper/"));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_builder() {
        let config = ReaperConfig::builder()
            .hostname("example.com")
            .reap_suffix("")
            .tls(false)
            .rate(Duration::from_millis(250))
            .user_agent("test-agent/1.0")
            .timeout(Duration::from_secs(5))
            .build();

        assert_eq!(config.hostname, "example.com");
        assert_eq!(config.reap_suffix, "");
        assert_eq!(config.scheme(), "http");
        assert_eq!(config.rate, Duration::from_millis(250));
        assert_eq!(config.user_agent, "test-agent/1.0");
        assert_eq!(config.timeout, Duration::from_secs(5));
    }

    #[test]
    fn test_config_builder_keeps_sub_unit_durations() {
        let config = ReaperConfig::builder()
            .rate(Duration::from_micros(900))
            .timeout(Duration::from_millis(500))
            .build();

        assert_eq!(config.rate, Duration::from_micros(900));
        assert_eq!(config.timeout, Duration::from_millis(500));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_rejects_zero_timeout() {
        let config = ReaperConfig::builder().timeout(Duration::ZERO).build();
        let err = config.validate().unwrap_err();
        assert!(matches!(
            err,
            Error::InvalidConfigValue { ref field, .. } if field == "timeout"
        ));

        let err = ReaperConfig::from_yaml_str("timeout_ms: 0").unwrap_err();
        assert!(matches!(err, Error::InvalidConfigValue { .. }));
    }

    #[test]
    fn test_config_zero_rate_is_valid() {
        let config = ReaperConfig::builder().rate(Duration::ZERO).build();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_from_yaml_partial() {
        let config = ReaperConfig::from_yaml_str(
            r"
hostname: oauth.reddit.com
reap_suffix: ''
rate_ms: 1000
timeout_ms: 1500
",
        )
        .unwrap();

        assert_eq!(
            config,
            ReaperConfig {
                hostname: "oauth.reddit.com".to_string(),
                reap_suffix: String::new(),
                rate: Duration::from_secs(1),
                timeout: Duration::from_millis(1500),
                ..ReaperConfig::default()
            }
        );
    }

    #[test]
    fn test_config_from_yaml_invalid() {
        let err = ReaperConfig::from_yaml_str("tls: [not, a, bool]").unwrap_err();
        assert!(matches!(err, Error::YamlParse(_)));
    }

    #[test]
    fn test_config_rejects_empty_hostname() {
        let err = ReaperConfig::from_yaml_str("hostname: ''").unwrap_err();
        assert!(matches!(
            err,
            Error::InvalidConfigValue { ref field, .. } if field == "hostname"
        ));
    }

    #[test]
    fn test_config_rejects_url_hostname() {
        let config = ReaperConfig::builder()
            .hostname("https://www.reddit.com")
            .build();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "hostname: example.com\ntls: false").unwrap();

        let config = ReaperConfig::from_file(file.path()).unwrap();
        assert_eq!(config.hostname, "example.com");
        assert!(!config.tls);
        assert_eq!(config.reap_suffix, ".json");
    }

    #[test]
    fn test_config_from_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = ReaperConfig::from_file(dir.path().join("missing.yaml")).unwrap_err();
        assert!(matches!(err, Error::FileNotFound { .. }));
    }
}
