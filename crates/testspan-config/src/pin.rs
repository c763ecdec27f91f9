//! Per-call override carrier

use std::collections::BTreeMap;

/// Service and tag overrides attached to one instrumented object or call.
///
/// A pin's service always wins over configuration, but only when it is set
/// and non-empty; `Some("")` counts as unset.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Pin {
    pub service: Option<String>,
    pub tags: BTreeMap<String, String>,
}

impl Pin {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_service(mut self, service: impl Into<String>) -> Self {
        self.service = Some(service.into());
        self
    }

    pub fn with_tag(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.tags.insert(key.into(), value.into());
        self
    }

    /// The effective pin service, if it overrides anything.
    pub fn service(&self) -> Option<&str> {
        self.service.as_deref().filter(|s| !s.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_service_does_not_override() {
        assert_eq!(Pin::new().with_service("").service(), None);
        assert_eq!(Pin::new().with_service("pin-svc").service(), Some("pin-svc"));
    }
}
