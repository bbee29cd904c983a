//! Core error types for notable-core.
//!
//! Uses `thiserror` for structured, matchable error variants.

use thiserror::Error;

/// Errors produced by the notable-core crate.
#[derive(Debug, Error)]
pub enum CoreError {
    /// A run-status string outside the known transition vocabulary.
    #[error("unknown run state: '{value}' (expected run, pause, stop, or resume)")]
    UnknownRunState { value: String },
}
