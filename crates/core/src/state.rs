//! Flow-run lifecycle states as reported by the orchestration server.
//!
//! The wire format is SCREAMING_SNAKE_CASE (`"COMPLETED"`, `"RUNNING"`,
//! ...). Terminal states are the ones the server will never transition
//! out of on its own; a forced transition may only target one of these.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Lifecycle state of a flow run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RunState {
    Scheduled,
    Pending,
    Running,
    Paused,
    Completed,
    Failed,
    Cancelled,
    Crashed,
}

/// All states, in wire-format order.
pub const ALL_STATES: &[RunState] = &[
    RunState::Scheduled,
    RunState::Pending,
    RunState::Running,
    RunState::Paused,
    RunState::Completed,
    RunState::Failed,
    RunState::Cancelled,
    RunState::Crashed,
];

impl RunState {
    /// Return the wire string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Scheduled => "SCHEDULED",
            Self::Pending => "PENDING",
            Self::Running => "RUNNING",
            Self::Paused => "PAUSED",
            Self::Completed => "COMPLETED",
            Self::Failed => "FAILED",
            Self::Cancelled => "CANCELLED",
            Self::Crashed => "CRASHED",
        }
    }

    /// Parse from a wire string, returning an error for unknown states.
    pub fn from_str(s: &str) -> Result<Self, CoreError> {
        match s {
            "SCHEDULED" => Ok(Self::Scheduled),
            "PENDING" => Ok(Self::Pending),
            "RUNNING" => Ok(Self::Running),
            "PAUSED" => Ok(Self::Paused),
            "COMPLETED" => Ok(Self::Completed),
            "FAILED" => Ok(Self::Failed),
            "CANCELLED" => Ok(Self::Cancelled),
            "CRASHED" => Ok(Self::Crashed),
            other => Err(CoreError::Validation(format!(
                "Unknown run state: '{other}'. Valid states: {}",
                ALL_STATES
                    .iter()
                    .map(|s| s.as_str())
                    .collect::<Vec<_>>()
                    .join(", ")
            ))),
        }
    }

    /// Whether the server considers this state final.
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            Self::Completed | Self::Failed | Self::Cancelled | Self::Crashed
        )
    }
}

impl std::fmt::Display for RunState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    // -- as_str / from_str ----------------------------------------------------

    #[test]
    fn as_str_matches_wire_format() {
        assert_eq!(RunState::Completed.as_str(), "COMPLETED");
        assert_eq!(RunState::Running.as_str(), "RUNNING");
        assert_eq!(RunState::Crashed.as_str(), "CRASHED");
    }

    #[test]
    fn from_str_round_trips_all_states() {
        for state in ALL_STATES {
            assert_eq!(RunState::from_str(state.as_str()).unwrap(), *state);
        }
    }

    #[test]
    fn from_str_rejects_unknown() {
        assert!(RunState::from_str("DONE").is_err());
        assert!(RunState::from_str("completed").is_err());
        assert!(RunState::from_str("").is_err());
    }

    // -- serde ----------------------------------------------------------------

    #[test]
    fn serializes_to_screaming_snake_case() {
        assert_eq!(
            serde_json::to_string(&RunState::Completed).unwrap(),
            "\"COMPLETED\""
        );
        assert_eq!(
            serde_json::to_string(&RunState::Crashed).unwrap(),
            "\"CRASHED\""
        );
    }

    #[test]
    fn deserializes_from_wire_strings() {
        let state: RunState = serde_json::from_str("\"CANCELLED\"").unwrap();
        assert_eq!(state, RunState::Cancelled);
    }

    #[test]
    fn deserialize_rejects_unknown_state() {
        assert!(serde_json::from_str::<RunState>("\"UNKNOWN\"").is_err());
    }

    // -- is_terminal ----------------------------------------------------------

    #[test]
    fn terminal_states() {
        assert!(RunState::Completed.is_terminal());
        assert!(RunState::Failed.is_terminal());
        assert!(RunState::Cancelled.is_terminal());
        assert!(RunState::Crashed.is_terminal());
    }

    #[test]
    fn non_terminal_states() {
        assert!(!RunState::Scheduled.is_terminal());
        assert!(!RunState::Pending.is_terminal());
        assert!(!RunState::Running.is_terminal());
        assert!(!RunState::Paused.is_terminal());
    }
}
