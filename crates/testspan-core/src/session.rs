//! Per-test span lifecycle for the pytest integration
//!
//! [`TestTracer`] owns the resolved settings and a pin carrying CI tags, and
//! turns each collected [`TestItem`] into a span: identity tags when it
//! starts, outcome tags when it finishes.

use std::path::Path;

use testspan_config::{Config, IntegrationConfig, Pin};
use testspan_encode::encode;
use testspan_git::extract_repository_name;

use crate::Result;
use crate::item::{PhaseReport, TestItem};
use crate::outcome::record_outcome;
use crate::tags;
use crate::tracer::{Span, Tracer};

/// Name of the integration in the settings
pub const INTEGRATION: &str = "pytest";
/// Value of the `test.framework` tag, also the default service
pub const FRAMEWORK: &str = "pytest";
/// Operation name unless the integration overrides it
pub const DEFAULT_OPERATION: &str = "pytest.test";

/// Creates and finishes test spans against a [`Tracer`].
pub struct TestTracer<T: Tracer> {
    tracer: T,
    config: Config,
    pin: Pin,
}

impl<T: Tracer> TestTracer<T> {
    /// Build a test tracer, registering the pytest integration if needed.
    pub fn new(tracer: T, mut config: Config) -> Self {
        let integration = config.add_integration(INTEGRATION);
        integration
            .default_service
            .get_or_insert_with(|| FRAMEWORK.to_string());
        Self {
            tracer,
            config,
            pin: Pin::new(),
        }
    }

    /// Build a test tracer from a TOML settings file.
    pub fn from_settings(tracer: T, path: impl AsRef<Path>) -> Result<Self> {
        Ok(Self::new(tracer, Config::load(path)?))
    }

    /// Attach a pin, typically carrying CI and git tags.
    ///
    /// When the pin knows the repository URL and nothing configured a
    /// service, the repository name becomes the integration's service.
    pub fn with_pin(mut self, pin: Pin) -> Self {
        self.pin = pin;
        self.adopt_repository_service();
        self
    }

    pub fn tracer(&self) -> &T {
        &self.tracer
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    fn integration(&self) -> &IntegrationConfig {
        static UNREGISTERED: std::sync::LazyLock<IntegrationConfig> =
            std::sync::LazyLock::new(IntegrationConfig::default);
        self.config.integration(INTEGRATION).unwrap_or(&UNREGISTERED)
    }

    fn adopt_repository_service(&mut self) {
        let Some(url) = self.pin.tags.get(tags::GIT_REPOSITORY_URL) else {
            return;
        };
        let resolved = self.config.int_service(None, self.integration(), None);
        if resolved.as_deref() != Some(FRAMEWORK) {
            return;
        }

        let repository_name = extract_repository_name(url);
        tracing::debug!(%repository_name, "Using repository name as test service");
        self.config.add_integration(INTEGRATION).service = Some(repository_name);
    }

    /// Start the span for one test.
    pub fn start_test(&self, item: &TestItem) -> T::Span {
        let integration = self.integration();
        let service = self.config.int_service(Some(&self.pin), integration, None);
        let operation = integration
            .operation_name
            .as_deref()
            .unwrap_or(DEFAULT_OPERATION);
        tracing::debug!(test = %item.name, ?service, operation, "Starting test span");

        let mut span = self
            .tracer
            .start_span(operation, service.as_deref(), Some(tags::TEST_TYPE));

        for (key, value) in self.config.tags(Some(&self.pin), integration) {
            span.set_tag(&key, &value);
        }
        if let Some(env) = &self.config.global.env {
            span.set_tag(tags::ENV, env);
        }
        if let Some(version) = &self.config.global.version {
            span.set_tag(tags::VERSION, version);
        }

        span.set_tag(tags::SPAN_TYPE, tags::TEST_TYPE);
        span.set_tag(tags::FRAMEWORK, FRAMEWORK);
        span.set_tag(tags::NAME, &item.name);
        span.set_tag(tags::SUITE, &item.suite);
        span.set_tag(tags::TYPE, tags::TEST_TYPE);

        if let Some(parameters) = &item.parameters {
            span.set_tag(tags::PARAMETERS, &encode(&parameters.to_value()));
        }
        for (key, value) in &item.marker_tags {
            span.set_tag(key, value);
        }

        span
    }

    /// Record the outcome of a test and finish its span.
    pub fn finish_test(&self, mut span: T::Span, item: &TestItem, reports: &[PhaseReport]) {
        record_outcome(&mut span, reports, item.xfail.as_ref());
        if span.get_tag(tags::STATUS).is_none() {
            tracing::debug!(test = %item.name, "Test finished without a decisive report");
        }
        self.tracer.finish_span(span);
    }

    /// Start, record and finish in one go.
    pub fn trace_test(&self, item: &TestItem, reports: &[PhaseReport]) {
        let span = self.start_test(item);
        self.finish_test(span, item, reports);
    }
}
