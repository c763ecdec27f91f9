//! The tracer seam
//!
//! Span storage and export belong to a real tracer. This crate only needs to
//! start spans, tag them and finish them, so that is all the traits ask for.
//! [`MemoryTracer`] keeps finished spans in memory for tests and embedders.

use std::collections::BTreeMap;
use std::sync::{Mutex, PoisonError};

/// A span being recorded.
pub trait Span {
    fn name(&self) -> &str;
    fn service(&self) -> Option<&str>;
    fn set_tag(&mut self, key: &str, value: &str);
    fn get_tag(&self, key: &str) -> Option<&str>;
}

/// Starts and finishes spans.
pub trait Tracer {
    type Span: Span;

    fn start_span(&self, name: &str, service: Option<&str>, span_type: Option<&str>) -> Self::Span;
    fn finish_span(&self, span: Self::Span);
}

/// A span held in memory
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordedSpan {
    pub name: String,
    pub service: Option<String>,
    pub span_type: Option<String>,
    pub tags: BTreeMap<String, String>,
}

impl Span for RecordedSpan {
    fn name(&self) -> &str {
        &self.name
    }

    fn service(&self) -> Option<&str> {
        self.service.as_deref()
    }

    fn set_tag(&mut self, key: &str, value: &str) {
        self.tags.insert(key.to_string(), value.to_string());
    }

    fn get_tag(&self, key: &str) -> Option<&str> {
        self.tags.get(key).map(String::as_str)
    }
}

/// Tracer that records finished spans in order.
#[derive(Debug, Default)]
pub struct MemoryTracer {
    finished: Mutex<Vec<RecordedSpan>>,
}

impl MemoryTracer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Take every span finished so far.
    pub fn pop_spans(&self) -> Vec<RecordedSpan> {
        std::mem::take(&mut *self.finished.lock().unwrap_or_else(PoisonError::into_inner))
    }
}

impl Tracer for MemoryTracer {
    type Span = RecordedSpan;

    fn start_span(&self, name: &str, service: Option<&str>, span_type: Option<&str>) -> RecordedSpan {
        RecordedSpan {
            name: name.to_string(),
            service: service.map(str::to_string),
            span_type: span_type.map(str::to_string),
            tags: BTreeMap::new(),
        }
    }

    fn finish_span(&self, span: RecordedSpan) {
        self.finished
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(span);
    }
}
