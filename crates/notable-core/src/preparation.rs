//! Experiment preparation records: mounted pipettes and loaded decks.

use serde::{Deserialize, Serialize};

/// A pipette mounted on the instrument head.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pipette {
    /// Mount position, e.g. `"left"` or `"right"`.
    pub pipette_position: String,
    /// Pipette model code, e.g. `"8ch200p"`.
    pub code: String,
}

/// Labware loaded on one numbered deck slot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Deck {
    /// Deck slot number.
    pub deck_number: i32,
    /// Labware code, e.g. `"tiprack_ablelabs_200tip"`.
    pub code: String,
    /// Per-row tip presence strings, in physical row order. Only present
    /// for tip racks; absent entries round-trip as absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub available_tip: Option<Vec<String>>,
}

/// The full preparation-stage submission: what is mounted and what is
/// loaded where. No cross-field constraint is enforced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PreparationInfo {
    pub pipette: Vec<Pipette>,
    pub deck: Vec<Deck>,
}
