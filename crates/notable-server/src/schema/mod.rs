//! API schema types for request/response definitions.
//!
//! Each sub-module defines the request and response types for a specific
//! API domain. Types use serde derives for JSON serialization/deserialization.
//! The echo endpoints exchange the domain records from `notable-core`
//! directly, so only the fixed-payload shapes live here.

pub mod info;
pub mod preparation;
pub mod step;
