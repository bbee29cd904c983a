//! Domain value types for the Notable liquid-handling robot control API.
//!
//! Every type here is a transient value record: constructed from an incoming
//! request body, validated by serde at the boundary, optionally echoed back
//! in a response, then dropped. There is no identity, no persistence, and no
//! mutation after construction.
//!
//! JSON field names follow the instrument's wire protocol exactly so that
//! echo responses are byte-faithful to their requests.

pub mod catalog;
pub mod error;
pub mod hardware;
pub mod preparation;
pub mod run;
pub mod transfer;

// Re-export commonly used types
pub use catalog::{Catalog, LabwareModel, PipetteModel};
pub use error::CoreError;
pub use hardware::HwStatus;
pub use preparation::{Deck, Pipette, PreparationInfo};
pub use run::{RunState, RunStatus};
pub use transfer::{Mix, PausePipette, Source, StepInfo, Target};
