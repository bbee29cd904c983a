//! Hardware control handler for sensors and LEDs inside the instrument.

use axum::Json;
use notable_core::HwStatus;
use tracing::info;

use crate::extract::ValidatedJson;

/// Records a requested hardware status toggle and confirms it.
///
/// `POST /hw_status`
///
/// The hardware is not actually touched; the response string embeds the
/// received value as confirmation.
pub async fn set_hw_status(ValidatedJson(hw_status): ValidatedJson<HwStatus>) -> Json<String> {
    info!(hw = %hw_status.hw, status = hw_status.status, "hw status requested");
    Json(format!("{} Set Complete", hw_status))
}
