//! Read-only client for the task-tracking service.
//!
//! A separate service with its own state vocabulary. The tools only
//! ever issue one filtered query against it -- no pagination, no
//! mutation.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use flowclean_core::types::{RunId, Timestamp};

use crate::config::TaskApiConfig;

/// Lifecycle state of a tracked task. Lowercase on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TaskState {
    Pending,
    Running,
    Completed,
    Failed,
    Cancelled,
}

/// A task as returned by the task-tracking service.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Task {
    /// Server-assigned identifier.
    pub id: RunId,
    /// Short human-readable description.
    pub title: String,
    /// Current lifecycle state.
    pub state: TaskState,
    /// When the task was created.
    pub created_at: Timestamp,
    /// Last state change.
    pub updated_at: Timestamp,
}

/// Request body for `POST /tasks/filter`.
#[derive(Debug, Serialize)]
struct TaskFilterBody<'a> {
    states: &'a [TaskState],
}

/// Errors from the task-tracking REST API layer.
#[derive(Debug, thiserror::Error)]
pub enum TaskApiError {
    /// The HTTP request itself failed (network, DNS, TLS, timeout).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The server returned a non-2xx status code.
    #[error("Task API error ({status}): {body}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Raw response body for debugging.
        body: String,
    },
}

/// HTTP client for the task-tracking service.
#[derive(Clone)]
pub struct TaskApi {
    client: reqwest::Client,
    api_url: String,
}

impl TaskApi {
    /// Create a new API client for a task-tracking service.
    ///
    /// * `api_url` - Base API URL, e.g. `http://host:8000/api`.
    pub fn new(api_url: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_url,
        }
    }

    /// Create an API client from environment-derived configuration,
    /// applying the configured request timeout.
    pub fn from_config(config: &TaskApiConfig) -> Result<Self, TaskApiError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()?;
        Ok(Self {
            client,
            api_url: config.api_url.clone(),
        })
    }

    /// Fetch all tasks currently in any of the given states.
    ///
    /// Sends `POST /tasks/filter` and returns the matching tasks in one
    /// response; the task API does not paginate this query.
    pub async fn filter_tasks(&self, states: &[TaskState]) -> Result<Vec<Task>, TaskApiError> {
        let body = TaskFilterBody { states };

        let response = self
            .client
            .post(format!("{}/tasks/filter", self.api_url))
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<unreadable body>".to_string());
            return Err(TaskApiError::Api {
                status: status.as_u16(),
                body,
            });
        }

        Ok(response.json::<Vec<Task>>().await?)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
