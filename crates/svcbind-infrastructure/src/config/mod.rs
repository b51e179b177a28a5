//! Configuration
//!
//! Section types with serde defaults plus the figment-based loader.

use serde::{Deserialize, Serialize};

use svcbind_application::catalog::MalformedPolicy;
use svcbind_domain::error::{Error, Result};

use crate::constants::{DEFAULT_BINDINGS_ENV_VAR, DEFAULT_LOG_LEVEL, DEFAULT_MALFORMED_POLICY};

/// Configuration loader
pub mod loader;

pub use loader::ConfigLoader;

/// Top-level application configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct AppConfig {
    /// Raw binding source settings
    pub source: SourceConfig,
    /// Catalog construction settings
    pub catalog: CatalogConfig,
    /// Logging settings
    pub logging: LoggingConfig,
}

/// Raw binding source settings
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct SourceConfig {
    /// Environment variable holding the raw binding data
    pub env_var: String,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            env_var: DEFAULT_BINDINGS_ENV_VAR.to_string(),
        }
    }
}

/// Catalog construction settings
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct CatalogConfig {
    /// What to do with a raw binding that fails to parse: "abort" or "skip"
    pub malformed_policy: String,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            malformed_policy: DEFAULT_MALFORMED_POLICY.to_string(),
        }
    }
}

impl CatalogConfig {
    /// Parse the policy token into a [`MalformedPolicy`]
    pub fn policy(&self) -> Result<MalformedPolicy> {
        match self.malformed_policy.to_lowercase().as_str() {
            "abort" => Ok(MalformedPolicy::Abort),
            "skip" => Ok(MalformedPolicy::Skip),
            other => Err(Error::config(format!(
                "invalid malformed_policy '{other}'. Use abort or skip"
            ))),
        }
    }
}

/// Logging settings
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level: trace, debug, info, warn, or error
    pub level: String,
    /// Emit JSON-formatted log lines
    pub json_format: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: DEFAULT_LOG_LEVEL.to_string(),
            json_format: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_policy_is_abort() {
        let config = CatalogConfig::default();
        assert_eq!(config.policy().unwrap(), MalformedPolicy::Abort);
    }

    #[test]
    fn policy_token_is_case_insensitive() {
        let config = CatalogConfig {
            malformed_policy: "Skip".to_string(),
        };
        assert_eq!(config.policy().unwrap(), MalformedPolicy::Skip);
    }

    #[test]
    fn unknown_policy_token_is_rejected() {
        let config = CatalogConfig {
            malformed_policy: "ignore".to_string(),
        };
        assert!(config.policy().is_err());
    }
}
