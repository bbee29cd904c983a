//! Hardware subsystem status toggles.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A requested on/off state for one hardware subsystem inside the
/// instrument (e.g. `"led"`, `"safety_lock"`).
///
/// The subsystem name is accepted as a free string; the mock layer does not
/// check it against an inventory.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HwStatus {
    /// Subsystem identifier.
    pub hw: String,
    /// Desired state: `true` = on/engaged, `false` = off/released.
    pub status: bool,
}

impl fmt::Display for HwStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "hw='{}' status={}", self.hw, self.status)
    }
}
