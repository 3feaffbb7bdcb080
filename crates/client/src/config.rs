//! Client configuration loaded from environment variables.
//!
//! All fields have defaults suitable for local development. In
//! production, override via environment variables.

/// Configuration for the orchestration server client.
#[derive(Debug, Clone)]
pub struct OrchestratorConfig {
    /// Base API URL, e.g. `http://orchestrator:4200/api`.
    pub api_url: String,
    /// HTTP request timeout in seconds.
    pub request_timeout_secs: u64,
}

impl OrchestratorConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                     | Default                     |
    /// |-----------------------------|-----------------------------|
    /// | `ORCHESTRATOR_API_URL`      | `http://127.0.0.1:4200/api` |
    /// | `ORCHESTRATOR_TIMEOUT_SECS` | `30`                        |
    pub fn from_env() -> Self {
        let api_url = std::env::var("ORCHESTRATOR_API_URL")
            .unwrap_or_else(|_| "http://127.0.0.1:4200/api".into());

        let request_timeout_secs: u64 = std::env::var("ORCHESTRATOR_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("ORCHESTRATOR_TIMEOUT_SECS must be a valid u64");

        Self {
            api_url,
            request_timeout_secs,
        }
    }
}

/// Configuration for the task-tracking service client.
#[derive(Debug, Clone)]
pub struct TaskApiConfig {
    /// Base API URL, e.g. `http://taskhub:8000/api`.
    pub api_url: String,
    /// HTTP request timeout in seconds.
    pub request_timeout_secs: u64,
}

impl TaskApiConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                 | Default                     |
    /// |-------------------------|-----------------------------|
    /// | `TASK_API_URL`          | `http://127.0.0.1:8000/api` |
    /// | `TASK_API_TIMEOUT_SECS` | `30`                        |
    pub fn from_env() -> Self {
        let api_url =
            std::env::var("TASK_API_URL").unwrap_or_else(|_| "http://127.0.0.1:8000/api".into());

        let request_timeout_secs: u64 = std::env::var("TASK_API_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("TASK_API_TIMEOUT_SECS must be a valid u64");

        Self {
            api_url,
            request_timeout_secs,
        }
    }
}
