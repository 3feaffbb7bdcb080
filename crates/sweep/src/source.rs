//! Page source seam for the sweep loop.

use async_trait::async_trait;

use flowclean_client::models::FlowRun;
use flowclean_client::orchestrator::{OrchestratorApi, OrchestratorApiError};
use flowclean_core::retention::RunFilter;

/// Supplies pages of candidate flow runs matching a filter.
///
/// The sweep loop only needs this one query; abstracting it keeps the
/// loop testable without a live server.
#[async_trait]
pub trait RunSource: Send + Sync {
    /// Fetch up to `limit` runs matching `filter`. Order is whatever
    /// the backing service returns.
    async fn fetch_page(
        &self,
        filter: &RunFilter,
        limit: i64,
    ) -> Result<Vec<FlowRun>, OrchestratorApiError>;
}

#[async_trait]
impl RunSource for OrchestratorApi {
    async fn fetch_page(
        &self,
        filter: &RunFilter,
        limit: i64,
    ) -> Result<Vec<FlowRun>, OrchestratorApiError> {
        self.filter_flow_runs(filter, limit).await
    }
}
