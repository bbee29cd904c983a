//! Preparation handlers: instrument catalog reads and preparation submission.

use axum::extract::State;
use axum::Json;
use notable_core::PreparationInfo;
use tracing::info;

use crate::extract::ValidatedJson;
use crate::schema::preparation::{LabwareInfoResponse, PipetteInfoResponse};
use crate::state::AppState;

/// Lists the supported pipette models.
///
/// `GET /pipette_info`
pub async fn get_pipette_info(State(state): State<AppState>) -> Json<PipetteInfoResponse> {
    Json(PipetteInfoResponse {
        pipettes: state.catalog.pipettes().to_vec(),
    })
}

/// Lists the supported labware models.
///
/// `GET /labware_info`
pub async fn get_labware_info(State(state): State<AppState>) -> Json<LabwareInfoResponse> {
    Json(LabwareInfoResponse {
        labwares: state.catalog.labwares().to_vec(),
    })
}

/// Accepts a preparation-stage submission and echoes it back.
///
/// `POST /preparation_info`
pub async fn set_preparation_info(
    ValidatedJson(preparation_info): ValidatedJson<PreparationInfo>,
) -> Json<PreparationInfo> {
    info!(
        pipettes = preparation_info.pipette.len(),
        decks = preparation_info.deck.len(),
        "preparation info received"
    );
    Json(preparation_info)
}
