//! Run-state transition handler.

use axum::Json;
use notable_core::RunStatus;
use tracing::{info, warn};

use crate::extract::ValidatedJson;

/// Accepts a run-state transition request and echoes it back.
///
/// `POST /run_status`
///
/// The status is a free string. Values outside the known vocabulary
/// (run/pause/stop/resume) are logged but still accepted and echoed.
pub async fn set_run_status(ValidatedJson(run_status): ValidatedJson<RunStatus>) -> Json<RunStatus> {
    match run_status.state() {
        Ok(state) => info!(status = state.as_str(), "run status requested"),
        Err(err) => warn!(status = %run_status.status, "{err}"),
    }
    Json(run_status)
}
