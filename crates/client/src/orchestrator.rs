//! REST client for the orchestration server's flow-run endpoints.
//!
//! Wraps the flow-run HTTP API (filtered paginated listing, deletion,
//! forced state transition) using [`reqwest`].

use std::time::Duration;

use flowclean_core::retention::RunFilter;
use flowclean_core::state::RunState;
use flowclean_core::types::RunId;

use crate::config::OrchestratorConfig;
use crate::models::{FlowRun, RunFilterBody, SetStateBody};

/// HTTP client for one orchestration server.
#[derive(Clone)]
pub struct OrchestratorApi {
    client: reqwest::Client,
    api_url: String,
}

/// Errors from the orchestration REST API layer.
#[derive(Debug, thiserror::Error)]
pub enum OrchestratorApiError {
    /// The HTTP request itself failed (network, DNS, TLS, timeout).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The server returned a non-2xx status code.
    #[error("Orchestrator API error ({status}): {body}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Raw response body for debugging.
        body: String,
    },
}

impl OrchestratorApi {
    /// Create a new API client for an orchestration server.
    ///
    /// * `api_url` - Base API URL, e.g. `http://host:4200/api`.
    pub fn new(api_url: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_url,
        }
    }

    /// Create an API client reusing an existing [`reqwest::Client`]
    /// (useful for connection pooling across multiple API handles).
    pub fn with_client(client: reqwest::Client, api_url: String) -> Self {
        Self { client, api_url }
    }

    /// Create an API client from environment-derived configuration,
    /// applying the configured request timeout.
    pub fn from_config(config: &OrchestratorConfig) -> Result<Self, OrchestratorApiError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()?;
        Ok(Self::with_client(client, config.api_url.clone()))
    }

    /// Fetch one page of flow runs matching the filter.
    ///
    /// Sends `POST /flow_runs/filter` with the state set, the start-time
    /// cutoff, and the page size. The server returns at most `limit`
    /// runs, in no guaranteed order.
    pub async fn filter_flow_runs(
        &self,
        filter: &RunFilter,
        limit: i64,
    ) -> Result<Vec<FlowRun>, OrchestratorApiError> {
        let body = RunFilterBody::from_filter(filter, limit);

        let response = self
            .client
            .post(format!("{}/flow_runs/filter", self.api_url))
            .json(&body)
            .send()
            .await?;

        Self::parse_response(response).await
    }

    /// Delete a flow run and all of its server-side records.
    ///
    /// Sends `DELETE /flow_runs/{id}`. Deleting an already-deleted run
    /// surfaces as an [`OrchestratorApiError::Api`] with a 404 status.
    pub async fn delete_flow_run(&self, id: RunId) -> Result<(), OrchestratorApiError> {
        let response = self
            .client
            .delete(format!("{}/flow_runs/{}", self.api_url, id))
            .send()
            .await?;

        Self::check_status(response).await
    }

    /// Force a flow run into the given state.
    ///
    /// Sends `POST /flow_runs/{id}/set_state` with `force = true`, which
    /// bypasses the server's normal state-transition validation.
    pub async fn set_flow_run_state(
        &self,
        id: RunId,
        state: RunState,
    ) -> Result<(), OrchestratorApiError> {
        let body = SetStateBody { state, force: true };

        let response = self
            .client
            .post(format!("{}/flow_runs/{}/set_state", self.api_url, id))
            .json(&body)
            .send()
            .await?;

        Self::check_status(response).await
    }

    // ---- private helpers ----

    /// Ensure the response has a success status code. Returns the
    /// response unchanged on success, or an [`OrchestratorApiError::Api`]
    /// containing the status and body text on failure.
    async fn ensure_success(
        response: reqwest::Response,
    ) -> Result<reqwest::Response, OrchestratorApiError> {
        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<unreadable body>".to_string());
            return Err(OrchestratorApiError::Api {
                status: status.as_u16(),
                body,
            });
        }
        Ok(response)
    }

    /// Parse a successful JSON response body into the expected type.
    async fn parse_response<T: serde::de::DeserializeOwned>(
        response: reqwest::Response,
    ) -> Result<T, OrchestratorApiError> {
        let response = Self::ensure_success(response).await?;
        Ok(response.json::<T>().await?)
    }

    /// Assert the response has a success status code, discarding the body.
    async fn check_status(response: reqwest::Response) -> Result<(), OrchestratorApiError> {
        Self::ensure_success(response).await?;
        Ok(())
    }
}
