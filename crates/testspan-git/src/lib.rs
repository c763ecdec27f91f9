//! Repository URL helpers for testspan
//!
//! Turns the many spellings of a git remote into the bare repository name
//! used as a fallback service name.

pub mod repository;

pub use repository::extract_repository_name;
