//! Service metadata served at the API root.

use serde::Serialize;

/// Service identification returned by `GET /`.
#[derive(Debug, Clone, Serialize)]
pub struct ServiceInfoResponse {
    pub title: String,
    pub version: String,
    pub contact: ContactInfo,
}

/// Maintainer contact block.
#[derive(Debug, Clone, Serialize)]
pub struct ContactInfo {
    pub name: String,
    pub url: String,
    pub email: String,
}
