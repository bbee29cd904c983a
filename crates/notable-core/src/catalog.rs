//! The fixed instrument catalog: pipette models and labware the Notable
//! supports during the preparation stage.
//!
//! Catalog contents are compiled in. Repeated reads always return the same
//! data, so the catalog endpoints are pure functions of no input.

use serde::{Deserialize, Serialize};

/// A supported pipette model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PipetteModel {
    /// Model code, e.g. `"8ch200p"`.
    pub code: String,
    /// Channel count.
    pub channel: u32,
    /// Maximum volume per channel, in microliters.
    pub volume: u32,
}

/// A supported labware model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LabwareModel {
    /// Labware kind, e.g. `"tiprack"`.
    #[serde(rename = "type")]
    pub kind: String,
    /// Labware code, e.g. `"tiprack_ablelabs_200tip"`.
    pub code: String,
    /// Volume per position, in microliters.
    pub volume: u32,
    /// Physical row count.
    pub rows: u32,
}

/// The instrument catalog served by the preparation-info endpoints.
#[derive(Debug, Clone)]
pub struct Catalog {
    pipettes: Vec<PipetteModel>,
    labwares: Vec<LabwareModel>,
}

impl Catalog {
    pub fn pipettes(&self) -> &[PipetteModel] {
        &self.pipettes
    }

    pub fn labwares(&self) -> &[LabwareModel] {
        &self.labwares
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Catalog {
            pipettes: vec![
                PipetteModel {
                    code: "8ch200p".to_string(),
                    channel: 8,
                    volume: 200,
                },
                PipetteModel {
                    code: "1ch1000p".to_string(),
                    channel: 1,
                    volume: 1000,
                },
            ],
            labwares: vec![LabwareModel {
                kind: "tiprack".to_string(),
                code: "tiprack_ablelabs_200tip".to_string(),
                volume: 200,
                rows: 8,
            }],
        }
    }
}
