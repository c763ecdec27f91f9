//! Global and per-integration settings
//!
//! Settings are plain snapshots. They can be built in code or loaded from a
//! TOML document:
//!
//! ```toml
//! service = "mysvc"
//! env = "ci"
//!
//! [tags]
//! team = "infra"
//!
//! [integrations.pytest]
//! service = "pymysvc"
//! operation_name = "mytest"
//! ```

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::error::{Error, Result};
use crate::pin::Pin;
use crate::service;

/// Process-wide settings shared by every integration
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct GlobalConfig {
    /// Global service override
    pub service: Option<String>,
    pub env: Option<String>,
    pub version: Option<String>,
    pub tags: BTreeMap<String, String>,
}

/// Settings scoped to one instrumented tool
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct IntegrationConfig {
    /// Explicit service for this integration
    pub service: Option<String>,
    /// Older spelling of `service`, consulted after it
    pub service_name: Option<String>,
    /// Fallback chosen by the integration itself; loses to the global service
    #[serde(skip)]
    pub default_service: Option<String>,
    /// Span operation name override
    pub operation_name: Option<String>,
    pub tags: BTreeMap<String, String>,
}

impl IntegrationConfig {
    pub fn with_service(mut self, service: impl Into<String>) -> Self {
        self.service = Some(service.into());
        self
    }

    pub fn with_default_service(mut self, service: impl Into<String>) -> Self {
        self.default_service = Some(service.into());
        self
    }
}

/// Global settings plus every registered integration
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    #[serde(flatten)]
    pub global: GlobalConfig,
    pub integrations: BTreeMap<String, IntegrationConfig>,
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse settings from TOML text.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Load settings from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        tracing::debug!(?path, "Loading tracer settings");
        let content = fs::read_to_string(path).map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    /// Register an integration, returning its (possibly existing) settings.
    pub fn add_integration(&mut self, name: impl Into<String>) -> &mut IntegrationConfig {
        self.integrations.entry(name.into()).or_default()
    }

    pub fn integration(&self, name: &str) -> Option<&IntegrationConfig> {
        self.integrations.get(name)
    }

    pub fn integration_mut(&mut self, name: &str) -> Option<&mut IntegrationConfig> {
        self.integrations.get_mut(name)
    }

    /// [`service::int_service`] against this config's global snapshot.
    pub fn int_service(
        &self,
        pin: Option<&Pin>,
        integration: &IntegrationConfig,
        default: Option<&str>,
    ) -> Option<String> {
        service::int_service(pin, integration, &self.global, default)
    }

    /// [`service::ext_service`]; the global service is not consulted.
    pub fn ext_service(
        &self,
        pin: Option<&Pin>,
        integration: &IntegrationConfig,
        default: &str,
    ) -> String {
        service::ext_service(pin, integration, default)
    }

    /// [`service::merge_tags`] against this config's global snapshot.
    pub fn tags(
        &self,
        pin: Option<&Pin>,
        integration: &IntegrationConfig,
    ) -> BTreeMap<String, String> {
        service::merge_tags(&self.global, integration, pin)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_integration_is_idempotent() {
        let mut config = Config::new();
        config.add_integration("myint").service = Some("svc".into());
        config.add_integration("myint");
        assert_eq!(
            config.integration("myint").and_then(|c| c.service.as_deref()),
            Some("svc")
        );
    }

    #[test]
    fn integration_mut_edits_registered_settings() {
        let mut config = Config::new();
        config.add_integration("redis");
        if let Some(redis) = config.integration_mut("redis") {
            *redis = IntegrationConfig::default().with_service("cache");
        }
        assert_eq!(
            config.ext_service(None, &config.integrations["redis"], "redis"),
            "cache"
        );
        assert!(config.integration_mut("unknown").is_none());
    }

    #[test]
    fn empty_document_yields_defaults() {
        let config = Config::from_toml_str("").unwrap();
        assert_eq!(config, Config::default());
    }
}
