//! Per-step liquid-transfer configuration.
//!
//! A [`StepInfo`] describes one transfer step: which pipette moves how much
//! liquid from a [`Source`] to a [`Target`], with optional agitation
//! ([`Mix`]) and mid-motion holds ([`PausePipette`]) on either side.

use serde::{Deserialize, Serialize};

/// Agitation performed before aspiration (pre-mix) or after dispense
/// (post-mix).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Mix {
    /// Volume drawn per agitation cycle, in microliters.
    pub mix_volume: f64,
    /// Number of agitation cycles.
    pub mix_iteration: u32,
    pub mix_speed: u32,
    /// Settle delay after the last cycle, in seconds.
    pub mix_delay: f64,
}

/// A mid-motion hold of the pipette at a given height.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PausePipette {
    pub height: f64,
    pub z_speed: i32,
    /// Hold duration in seconds.
    pub duration: f64,
}

/// Aspiration side of a transfer step.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Source {
    pub deck_number: i32,
    /// Well-occupancy strings, in physical row order.
    pub well: Vec<String>,
    /// Whether to pre-wet the tip before the real aspiration.
    pub pre_wet: bool,
    pub tip_depth: i32,
    pub aspirate_speed: i32,
    pub pre_mix: Mix,
    pub pause_pipette: PausePipette,
}

/// Dispense side of a transfer step.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Target {
    pub deck_number: i32,
    /// Well-occupancy strings, in physical row order.
    pub well: Vec<String>,
    pub tip_depth: i32,
    pub post_mix: Mix,
    pub pause_pipette: PausePipette,
    /// Location for forced expulsion of residual liquid, e.g. `"trash"`.
    pub blowout: String,
}

/// One configured liquid-transfer step within a run.
///
/// `step_number` is 1-based and uniquely identifies the step within its run;
/// uniqueness is the caller's responsibility, not enforced here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StepInfo {
    pub step_number: u32,
    pub step_name: String,
    pub pipette_position: String,
    /// Transfer volume in microliters.
    pub volume: f64,
    /// Transfer method, e.g. `"single"`.
    pub transfer_method: String,
    /// Pipetting route, e.g. `"serial"`.
    pub pipette_route: String,
    pub prevent_contam: bool,
    pub reuse_tip: bool,
    pub source: Source,
    pub target: Target,
}
