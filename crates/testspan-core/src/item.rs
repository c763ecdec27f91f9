//! What the test runner tells us about one test

use std::collections::BTreeMap;

use testspan_encode::{Key, Value};

/// A collected test, as seen when its span starts.
#[derive(Debug, Clone, Default)]
pub struct TestItem {
    /// Node name, including the parameter id (`test_1[item0]`)
    pub name: String,
    /// Module or class path the test belongs to
    pub suite: String,
    pub parameters: Option<Parameters>,
    /// Tags requested through the `dd_tags` marker
    pub marker_tags: BTreeMap<String, String>,
    pub xfail: Option<XfailMarker>,
}

impl TestItem {
    pub fn new(suite: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            suite: suite.into(),
            ..Default::default()
        }
    }

    pub fn with_argument(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.parameters
            .get_or_insert_with(Parameters::default)
            .arguments
            .push((name.into(), value.into()));
        self
    }

    pub fn with_marker_tag(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.marker_tags.insert(key.into(), value.into());
        self
    }

    pub fn with_xfail(mut self, reason: impl Into<String>, strict: bool) -> Self {
        self.xfail = Some(XfailMarker {
            reason: reason.into(),
            strict,
        });
        self
    }
}

/// Parametrization of one test invocation
#[derive(Debug, Clone, Default)]
pub struct Parameters {
    pub arguments: Vec<(String, Value)>,
    pub metadata: Vec<(String, Value)>,
}

impl Parameters {
    /// `{"arguments": {...}, "metadata": {...}}`
    pub fn to_value(&self) -> Value {
        let section = |entries: &[(String, Value)]| {
            Value::Map(
                entries
                    .iter()
                    .map(|(name, value)| (Key::Str(name.clone()), value.clone()))
                    .collect(),
            )
        };
        Value::map([
            ("arguments", section(&self.arguments)),
            ("metadata", section(&self.metadata)),
        ])
    }
}

/// The `xfail` marker on a test
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct XfailMarker {
    pub reason: String,
    pub strict: bool,
}

/// Phase of a test run a report belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Setup,
    Call,
    Teardown,
}

/// Outcome as the test runner reports it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Passed,
    Failed,
    Skipped,
}

/// Result of one phase of a test
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhaseReport {
    pub phase: Phase,
    pub outcome: Outcome,
    pub skip_reason: Option<String>,
    /// Set by the runner when an expected failure was observed or passed
    pub was_xfail: Option<String>,
    /// Long failure representation (traceback or strict-xpass message)
    pub longrepr: Option<String>,
}

impl PhaseReport {
    pub fn new(phase: Phase, outcome: Outcome) -> Self {
        Self {
            phase,
            outcome,
            skip_reason: None,
            was_xfail: None,
            longrepr: None,
        }
    }

    pub fn passed(phase: Phase) -> Self {
        Self::new(phase, Outcome::Passed)
    }

    pub fn failed(phase: Phase, longrepr: impl Into<String>) -> Self {
        Self {
            longrepr: Some(longrepr.into()),
            ..Self::new(phase, Outcome::Failed)
        }
    }

    pub fn skipped(phase: Phase, reason: impl Into<String>) -> Self {
        Self {
            skip_reason: Some(reason.into()),
            ..Self::new(phase, Outcome::Skipped)
        }
    }

    pub fn with_was_xfail(mut self, reason: impl Into<String>) -> Self {
        self.was_xfail = Some(reason.into());
        self
    }
}
