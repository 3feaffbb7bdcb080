//! `list-running-tasks` -- print pending and running tasks from the
//! task-tracking service.
//!
//! Usage: `list-running-tasks`
//!
//! Issues one filtered query and prints the matching tasks as a single
//! JSON array on stdout. Logs go to stderr so stdout stays
//! machine-readable.
//!
//! # Environment variables
//!
//! | Variable                | Required | Default                     |
//! |-------------------------|----------|-----------------------------|
//! | `TASK_API_URL`          | no       | `http://127.0.0.1:8000/api` |
//! | `TASK_API_TIMEOUT_SECS` | no       | `30`                        |

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use flowclean_client::config::TaskApiConfig;
use flowclean_client::tasks::{TaskApi, TaskState};

/// Active task states: queued or currently executing.
const ACTIVE_TASK_STATES: &[TaskState] = &[TaskState::Pending, TaskState::Running];

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "list_running_tasks=info,flowclean_client=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = TaskApiConfig::from_env();
    let api = TaskApi::from_config(&config).unwrap_or_else(|e| {
        tracing::error!(error = %e, "Failed to build task API client");
        std::process::exit(1);
    });

    let tasks = api.filter_tasks(ACTIVE_TASK_STATES).await.unwrap_or_else(|e| {
        tracing::error!(error = %e, "Task query failed");
        std::process::exit(1);
    });

    tracing::info!(count = tasks.len(), "Fetched active tasks");

    let json = serde_json::to_string(&tasks).expect("tasks serialize to JSON");
    println!("{json}");
}
