//! Service metadata handler.

use axum::Json;

use crate::schema::info::{ContactInfo, ServiceInfoResponse};

/// Identifies the service and its maintainer.
///
/// `GET /`
pub async fn service_info() -> Json<ServiceInfoResponse> {
    Json(ServiceInfoResponse {
        title: "ABLE Labs Notable API".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        contact: ContactInfo {
            name: "ABLE Labs Notable".to_string(),
            url: "https://ablelabsinc.com/en/home/".to_string(),
            email: "sophie@ablelabsinc.com".to_string(),
        },
    })
}
