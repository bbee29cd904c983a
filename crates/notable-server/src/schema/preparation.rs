//! Preparation catalog response types.

use notable_core::{LabwareModel, PipetteModel};
use serde::Serialize;

/// Response for `GET /pipette_info`: the supported pipette models.
#[derive(Debug, Clone, Serialize)]
pub struct PipetteInfoResponse {
    pub pipettes: Vec<PipetteModel>,
}

/// Response for `GET /labware_info`: the supported labware models.
#[derive(Debug, Clone, Serialize)]
pub struct LabwareInfoResponse {
    pub labwares: Vec<LabwareModel>,
}
