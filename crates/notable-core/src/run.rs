//! Run-state transitions for the instrument.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// A requested run-state transition.
///
/// The status is carried as a free string: the control surface accepts any
/// value and echoes it back. [`RunStatus::state`] resolves it against the
/// known vocabulary for callers that want the typed form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunStatus {
    pub status: String,
}

impl RunStatus {
    /// Resolves the status string against the known transition vocabulary.
    pub fn state(&self) -> Result<RunState, CoreError> {
        self.status.parse()
    }
}

/// The known run-state transition vocabulary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RunState {
    Run,
    Pause,
    Stop,
    Resume,
}

impl RunState {
    pub fn as_str(&self) -> &'static str {
        match self {
            RunState::Run => "run",
            RunState::Pause => "pause",
            RunState::Stop => "stop",
            RunState::Resume => "resume",
        }
    }
}

impl FromStr for RunState {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "run" => Ok(RunState::Run),
            "pause" => Ok(RunState::Pause),
            "stop" => Ok(RunState::Stop),
            "resume" => Ok(RunState::Resume),
            other => Err(CoreError::UnknownRunState {
                value: other.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_states_parse() {
        for (text, state) in [
            ("run", RunState::Run),
            ("pause", RunState::Pause),
            ("stop", RunState::Stop),
            ("resume", RunState::Resume),
        ] {
            assert_eq!(text.parse::<RunState>().unwrap(), state);
            assert_eq!(state.as_str(), text);
        }
    }

    #[test]
    fn unknown_state_is_reported_but_carried() {
        let status = RunStatus {
            status: "calibrate".to_string(),
        };
        let err = status.state().unwrap_err();
        assert!(err.to_string().contains("calibrate"));
        // The record itself still round-trips unchanged.
        let json = serde_json::to_string(&status).unwrap();
        assert_eq!(json, r#"{"status":"calibrate"}"#);
    }
}
