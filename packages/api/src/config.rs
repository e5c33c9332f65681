//! # Mock backend configuration — `blooddonate.toml`
//!
//! The file is embedded at build time and parsed once, on first use, by
//! [`config`]. It only controls how long the simulated calls take.
//!
//! ## Structure
//!
//! ```toml
//! [latency]
//! login_ms = 1000
//! register_ms = 1000
//! request_ms = 1500
//! dashboard_ms = 1000
//! ```
//!
//! Every field has a default, so a missing section or an empty file is the
//! same as the defaults above. A file that fails to parse is logged and
//! replaced by the defaults.

use std::sync::OnceLock;
use std::time::Duration;

use serde::Deserialize;
use tracing::warn;

const BUNDLED_CONFIG: &str = include_str!("../blooddonate.toml");

static CONFIG: OnceLock<ApiConfig> = OnceLock::new();

/// Top-level configuration stored in `blooddonate.toml`.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct ApiConfig {
    #[serde(default)]
    pub latency: LatencyConfig,
}

/// Simulated round-trip time of each mock call, in milliseconds.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct LatencyConfig {
    #[serde(default = "default_login_ms")]
    pub login_ms: u64,
    #[serde(default = "default_register_ms")]
    pub register_ms: u64,
    #[serde(default = "default_request_ms")]
    pub request_ms: u64,
    #[serde(default = "default_dashboard_ms")]
    pub dashboard_ms: u64,
}

fn default_login_ms() -> u64 {
    1000
}

fn default_register_ms() -> u64 {
    1000
}

fn default_request_ms() -> u64 {
    1500
}

fn default_dashboard_ms() -> u64 {
    1000
}

impl Default for LatencyConfig {
    fn default() -> Self {
        Self {
            login_ms: default_login_ms(),
            register_ms: default_register_ms(),
            request_ms: default_request_ms(),
            dashboard_ms: default_dashboard_ms(),
        }
    }
}

impl LatencyConfig {
    /// No simulated delay at all.
    pub fn none() -> Self {
        Self {
            login_ms: 0,
            register_ms: 0,
            request_ms: 0,
            dashboard_ms: 0,
        }
    }

    pub fn login(&self) -> Duration {
        Duration::from_millis(self.login_ms)
    }

    pub fn register(&self) -> Duration {
        Duration::from_millis(self.register_ms)
    }

    pub fn request(&self) -> Duration {
        Duration::from_millis(self.request_ms)
    }

    pub fn dashboard(&self) -> Duration {
        Duration::from_millis(self.dashboard_ms)
    }
}

impl ApiConfig {
    /// The well-known filename for the config file.
    pub fn filename() -> &'static str {
        "blooddonate.toml"
    }

    /// Parse from TOML string.
    pub fn from_toml(s: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(s)
    }
}

/// The bundled configuration, parsed on first access.
pub fn config() -> &'static ApiConfig {
    CONFIG.get_or_init(|| match ApiConfig::from_toml(BUNDLED_CONFIG) {
        Ok(config) => config,
        Err(e) => {
            warn!(file = ApiConfig::filename(), error = %e, "invalid config, using defaults");
            ApiConfig::default()
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_file_is_default() {
        let config = ApiConfig::from_toml("").unwrap();
        assert_eq!(config, ApiConfig::default());
        assert_eq!(config.latency.request_ms, 1500);
    }

    #[test]
    fn test_partial_section_keeps_other_defaults() {
        let config = ApiConfig::from_toml("[latency]\nlogin_ms = 10\n").unwrap();
        assert_eq!(config.latency.login(), Duration::from_millis(10));
        assert_eq!(config.latency.register_ms, 1000);
        assert_eq!(config.latency.dashboard_ms, 1000);
    }

    #[test]
    fn test_bundled_config_parses() {
        assert!(ApiConfig::from_toml(BUNDLED_CONFIG).is_ok());
        assert_eq!(config().latency, LatencyConfig::default());
    }

    #[test]
    fn test_bad_type_is_an_error() {
        assert!(ApiConfig::from_toml("[latency]\nlogin_ms = \"soon\"\n").is_err());
    }
}
