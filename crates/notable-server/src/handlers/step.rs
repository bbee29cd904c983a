//! Step handlers: transfer configuration, availability, and time estimation.

use axum::Json;
use notable_core::StepInfo;
use tracing::info;

use crate::extract::ValidatedJson;
use crate::schema::step::{
    StepAvailableResponse, StepEstimationResponse, StepNumberRequest, TipInfo,
};

/// Deck slot of the tip rack reported for an available step.
const TIP_DECK_NUMBER: i32 = 7;
/// Tip-occupancy pattern per row of the reported rack.
const TIP_WELL_PATTERN: &str = "111111000000";
/// Row count of the reported rack.
const TIP_ROWS: usize = 8;
/// Tips reported missing for an unavailable step.
const LACKING_TIP: u32 = 30;
/// Placeholder duration reported for every step.
const ESTIMATED_TIME: &str = "00:00:05";

/// Accepts one transfer-step configuration and echoes it back.
///
/// `POST /step_info`
pub async fn set_step_info(ValidatedJson(step_info): ValidatedJson<StepInfo>) -> Json<StepInfo> {
    info!(
        step_number = step_info.step_number,
        step_name = %step_info.step_name,
        "step info received"
    );
    Json(step_info)
}

/// Reports whether a step has the tips it needs.
///
/// `POST /step_available`
///
/// Placeholder policy: step 1 is available with a fixed tip-rack location;
/// every other step number is unavailable and lacks a fixed number of tips.
pub async fn get_step_available(
    ValidatedJson(req): ValidatedJson<StepNumberRequest>,
) -> Json<StepAvailableResponse> {
    let response = if req.step_number == 1 {
        StepAvailableResponse {
            step_number: req.step_number,
            is_available: true,
            tip_info: Some(TipInfo {
                deck_number: TIP_DECK_NUMBER,
                well: vec![TIP_WELL_PATTERN.to_string(); TIP_ROWS],
            }),
            lacking_tip: None,
        }
    } else {
        StepAvailableResponse {
            step_number: req.step_number,
            is_available: false,
            tip_info: None,
            lacking_tip: Some(LACKING_TIP),
        }
    };
    Json(response)
}

/// Estimates the duration of a step.
///
/// `POST /step_estimation_time`
///
/// Always reports the same placeholder duration.
pub async fn get_step_estimation_time(
    ValidatedJson(req): ValidatedJson<StepNumberRequest>,
) -> Json<StepEstimationResponse> {
    Json(StepEstimationResponse {
        step_number: req.step_number,
        estimated_time: ESTIMATED_TIME.to_string(),
    })
}
