//! Span tagging and outcome capture for traced test runs
//!
//! This crate is the glue between a test runner and a tracer. Each test
//! becomes one span tagged with:
//!
//! - **identity**: framework, name, suite, type
//! - **parameters**: the test's arguments, encoded by `testspan-encode`
//! - **service**: resolved by `testspan-config` from pin, integration and
//!   global settings, falling back to the repository name from `testspan-git`
//! - **outcome**: status, skip reason, expected-failure result
//!
//! # Example
//!
//! ```
//! use testspan_config::Config;
//! use testspan_core::{MemoryTracer, Phase, PhaseReport, TestItem, TestTracer, tags};
//!
//! let tests = TestTracer::new(MemoryTracer::new(), Config::new());
//! let item = TestItem::new("test_module.py", "test_1[item0]").with_argument("item", 1);
//! tests.trace_test(&item, &[PhaseReport::passed(Phase::Setup), PhaseReport::passed(Phase::Call)]);
//!
//! let spans = tests.tracer().pop_spans();
//! assert_eq!(spans[0].tags[tags::STATUS], "pass");
//! assert_eq!(spans[0].tags[tags::PARAMETERS], r#"{"arguments":{"item":1},"metadata":{}}"#);
//! ```

pub mod error;
pub mod item;
pub mod logging;
pub mod outcome;
pub mod session;
pub mod tags;
pub mod tracer;

pub use error::{Error, Result};
pub use item::{Outcome, Parameters, Phase, PhaseReport, TestItem, XfailMarker};
pub use outcome::{Verdict, classify, record_outcome};
pub use session::{DEFAULT_OPERATION, FRAMEWORK, INTEGRATION, TestTracer};
pub use tags::TestStatus;
pub use tracer::{MemoryTracer, RecordedSpan, Span, Tracer};
