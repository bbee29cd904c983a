//! HTTP/JSON API server for the Notable liquid-handling robot.
//!
//! Exposes the planned control surface as a mock REST API: hardware status
//! toggles, experiment-preparation queries, per-step transfer configuration,
//! step availability and time estimation, and run-state transitions. Every
//! handler either echoes its validated input or returns a fixed payload; no
//! hardware is driven and nothing is persisted. This crate contains the
//! server framework, API schema types, error handling, and route
//! definitions.

pub mod error;
pub mod extract;
pub mod handlers;
pub mod router;
pub mod schema;
pub mod state;
