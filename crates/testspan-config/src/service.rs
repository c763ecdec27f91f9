//! Effective service name and tag resolution
//!
//! Sources are ranked. For the service of an instrumented integration:
//!
//! 1. pin service (set and non-empty)
//! 2. integration `service`, then its `service_name` alias
//! 3. global service override
//! 4. integration default, then the call-site default
//!
//! External services skip the global tier: a downstream dependency does not
//! share the identity of the process calling it.

use std::collections::BTreeMap;

use crate::pin::Pin;
use crate::settings::{GlobalConfig, IntegrationConfig};

/// Service for spans produced by an integration itself.
///
/// Returns `None` only when no source provides a value.
pub fn int_service(
    pin: Option<&Pin>,
    integration: &IntegrationConfig,
    global: &GlobalConfig,
    default: Option<&str>,
) -> Option<String> {
    if let Some(service) = pin.and_then(Pin::service) {
        return Some(service.to_string());
    }
    if let Some(service) = configured_service(integration) {
        return Some(service.to_string());
    }
    if let Some(service) = global.service.as_deref().filter(|s| !s.is_empty()) {
        return Some(service.to_string());
    }
    integration
        .default_service
        .as_deref()
        .or(default)
        .map(str::to_string)
}

/// Service for spans that describe a call to an external dependency.
pub fn ext_service(pin: Option<&Pin>, integration: &IntegrationConfig, default: &str) -> String {
    pin.and_then(Pin::service)
        .or_else(|| configured_service(integration))
        .unwrap_or(default)
        .to_string()
}

/// Union of tags, later sources overwriting earlier ones:
/// global < integration < pin.
pub fn merge_tags(
    global: &GlobalConfig,
    integration: &IntegrationConfig,
    pin: Option<&Pin>,
) -> BTreeMap<String, String> {
    let mut tags = global.tags.clone();
    tags.extend(integration.tags.clone());
    if let Some(pin) = pin {
        tags.extend(pin.tags.clone());
    }
    tags
}

// Set is enough here: an explicitly blank integration service still counts.
fn configured_service(integration: &IntegrationConfig) -> Option<&str> {
    integration
        .service
        .as_deref()
        .or(integration.service_name.as_deref())
}
