//! Shared test utilities for the testspan workspace.
//!
//! This crate is a dev-dependency only, never published.
//!
//! # Modules
//!
//! - [`logs`] captures `tracing` events so tests can assert on warnings

pub mod logs;

pub use logs::{CapturedEvent, LogCapture, capture_logs};
