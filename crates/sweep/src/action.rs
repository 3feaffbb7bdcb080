//! Remediation strategies applied to each candidate run.
//!
//! The delete and force-state sweeps share one loop; only the
//! per-record mutation differs, so it is injected as a strategy the
//! sweeper calls for every run in a page.

use async_trait::async_trait;

use flowclean_client::models::FlowRun;
use flowclean_client::orchestrator::{OrchestratorApi, OrchestratorApiError};
use flowclean_core::error::CoreError;
use flowclean_core::state::RunState;

/// A per-record remediation operation.
#[async_trait]
pub trait RemediationAction: Send + Sync {
    /// Short verb for log lines, e.g. `"delete"`.
    fn verb(&self) -> &'static str;

    /// Apply the remediation to one run. Errors are absorbed by the
    /// sweep loop: they fail the record, never the sweep.
    async fn remediate(&self, run: &FlowRun) -> Result<(), OrchestratorApiError>;
}

/// Delete the run and all of its server-side records.
pub struct DeleteRun {
    api: OrchestratorApi,
}

impl DeleteRun {
    pub fn new(api: OrchestratorApi) -> Self {
        Self { api }
    }
}

#[async_trait]
impl RemediationAction for DeleteRun {
    fn verb(&self) -> &'static str {
        "delete"
    }

    async fn remediate(&self, run: &FlowRun) -> Result<(), OrchestratorApiError> {
        self.api.delete_flow_run(run.id).await
    }
}

/// Force the run into a terminal state, bypassing the server's normal
/// transition validation.
pub struct ForceSetState {
    api: OrchestratorApi,
    target: RunState,
}

impl ForceSetState {
    /// Create the action. The target must be a terminal state; forcing
    /// a run into a non-terminal state would leave it eligible for the
    /// same sweep forever.
    pub fn new(api: OrchestratorApi, target: RunState) -> Result<Self, CoreError> {
        if !target.is_terminal() {
            return Err(CoreError::Validation(format!(
                "Forced transition target must be terminal, got {target}"
            )));
        }
        Ok(Self { api, target })
    }

    /// The terminal state runs are forced into.
    pub fn target(&self) -> RunState {
        self.target
    }
}

#[async_trait]
impl RemediationAction for ForceSetState {
    fn verb(&self) -> &'static str {
        "force-transition"
    }

    async fn remediate(&self, run: &FlowRun) -> Result<(), OrchestratorApiError> {
        self.api.set_flow_run_state(run.id, self.target).await
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn force_set_state_accepts_terminal_targets() {
        let api = OrchestratorApi::new("http://127.0.0.1:4200/api".into());
        assert!(ForceSetState::new(api.clone(), RunState::Crashed).is_ok());
        assert!(ForceSetState::new(api.clone(), RunState::Cancelled).is_ok());
        assert!(ForceSetState::new(api, RunState::Failed).is_ok());
    }

    #[test]
    fn force_set_state_rejects_non_terminal_targets() {
        let api = OrchestratorApi::new("http://127.0.0.1:4200/api".into());
        assert!(ForceSetState::new(api.clone(), RunState::Running).is_err());
        assert!(ForceSetState::new(api, RunState::Pending).is_err());
    }
}
