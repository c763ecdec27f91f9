//! Service and tag resolution for traced test runs
//!
//! Three overlapping sources decide a span's service and tags: a per-call
//! [`Pin`], the settings of the integration that produced the span, and the
//! process-wide [`GlobalConfig`]. Resolution is pure and total; loading a
//! settings file is the only operation that can fail.
//!
//! # Example
//!
//! ```
//! use testspan_config::{Config, Pin};
//!
//! let mut config = Config::new();
//! config.global.service = Some("global-svc".into());
//! let pytest = config.add_integration("pytest").clone();
//!
//! assert_eq!(
//!     config.int_service(Some(&Pin::new()), &pytest, Some("pytest")).as_deref(),
//!     Some("global-svc")
//! );
//! assert_eq!(config.ext_service(None, &pytest, "pytest"), "pytest");
//! ```

pub mod error;
pub mod pin;
pub mod service;
pub mod settings;

pub use error::{Error, Result};
pub use pin::Pin;
pub use service::{ext_service, int_service, merge_tags};
pub use settings::{Config, GlobalConfig, IntegrationConfig};
