//! Wire types for the orchestration server's flow-run API.

use serde::{Deserialize, Serialize};

use flowclean_core::retention::RunFilter;
use flowclean_core::state::RunState;
use flowclean_core::types::{RunId, Timestamp};

/// A flow run as returned by the orchestration server.
///
/// Only the fields the retention tools actually read are modeled; the
/// server sends more and serde ignores the rest.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FlowRun {
    /// Server-assigned identifier.
    pub id: RunId,
    /// Human-readable run name.
    pub name: String,
    /// Current lifecycle state.
    pub state_type: RunState,
    /// When execution began. `None` for runs that never started.
    pub start_time: Option<Timestamp>,
}

/// Request body for `POST /flow_runs/filter`.
#[derive(Debug, Serialize)]
pub struct RunFilterBody {
    /// Candidate states (any-of).
    pub states: Vec<RunState>,
    /// Exclusive upper bound on `start_time`.
    pub started_before: Timestamp,
    /// Maximum number of runs to return.
    pub limit: i64,
}

impl RunFilterBody {
    /// Build the request body from a sweep filter and a page size.
    pub fn from_filter(filter: &RunFilter, limit: i64) -> Self {
        Self {
            states: filter.states().to_vec(),
            started_before: filter.started_before(),
            limit,
        }
    }
}

/// Request body for `POST /flow_runs/{id}/set_state`.
#[derive(Debug, Serialize)]
pub struct SetStateBody {
    /// Target state.
    pub state: RunState,
    /// Bypass the server's state-transition validation.
    pub force: bool,
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
