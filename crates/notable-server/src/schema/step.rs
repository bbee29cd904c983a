//! Step query request/response types.

use serde::{Deserialize, Serialize};

/// Request body identifying a step by its 1-based number.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct StepNumberRequest {
    pub step_number: u32,
}

/// Location of the tips a step would draw from.
#[derive(Debug, Clone, Serialize)]
pub struct TipInfo {
    /// Deck slot holding the tip rack.
    pub deck_number: i32,
    /// Per-row tip-occupancy strings, in physical row order.
    pub well: Vec<String>,
}

/// Response for `POST /step_available`.
///
/// Exactly one of `tip_info` (available) or `lacking_tip` (unavailable) is
/// present; the absent field is omitted from the JSON body.
#[derive(Debug, Clone, Serialize)]
pub struct StepAvailableResponse {
    pub step_number: u32,
    pub is_available: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tip_info: Option<TipInfo>,
    /// Number of tips missing for the step to run.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lacking_tip: Option<u32>,
}

/// Response for `POST /step_estimation_time`.
#[derive(Debug, Clone, Serialize)]
pub struct StepEstimationResponse {
    pub step_number: u32,
    /// Estimated duration as `HH:MM:SS`.
    pub estimated_time: String,
}
