//! Application state shared across handlers.
//!
//! The API is stateless by design: handlers echo validated input or serve
//! fixed data. [`AppState`] therefore carries only the immutable instrument
//! catalog behind an `Arc`, which is safe for unrestricted concurrent reads
//! with no locking.

use std::sync::Arc;

use notable_core::Catalog;

/// Shared application state for the HTTP server.
#[derive(Clone)]
pub struct AppState {
    /// The fixed instrument catalog served by the preparation endpoints.
    pub catalog: Arc<Catalog>,
}

impl AppState {
    /// Creates the state with the built-in instrument catalog.
    pub fn new() -> Self {
        AppState {
            catalog: Arc::new(Catalog::default()),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
