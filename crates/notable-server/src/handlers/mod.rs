//! HTTP handler modules for the Notable API.
//!
//! Each sub-module implements thin handlers that validate the request body
//! at the boundary and either echo the typed value back or return a fixed
//! payload. No hardware is driven and nothing is persisted.

pub mod hardware;
pub mod info;
pub mod preparation;
pub mod run;
pub mod step;
