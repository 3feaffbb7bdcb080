//! HTTP-level tests for the task-tracking client, against a local mock
//! server.

use assert_matches::assert_matches;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use flowclean_client::tasks::{TaskApi, TaskApiError, TaskState};

/// The task query posts the state list and parses the returned tasks.
#[tokio::test]
async fn filter_tasks_sends_states_and_parses_tasks() {
    let server = MockServer::start().await;

    let tasks = serde_json::json!([
        {
            "id": "7ad2f0d4-6b58-4a27-9a1c-2f8f6ed0d3b1",
            "title": "Sync repository",
            "state": "running",
            "created_at": "2025-06-01T10:00:00Z",
            "updated_at": "2025-06-01T10:05:00Z",
        },
        {
            "id": "0c3d7f9e-4f1b-48f2-8df0-6a3f5a9b77aa",
            "title": "Generate artifacts",
            "state": "pending",
            "created_at": "2025-06-01T10:02:00Z",
            "updated_at": "2025-06-01T10:02:00Z",
        },
    ]);

    Mock::given(method("POST"))
        .and(path("/api/tasks/filter"))
        .and(body_json(serde_json::json!({
            "states": ["pending", "running"],
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(tasks))
        .expect(1)
        .mount(&server)
        .await;

    let api = TaskApi::new(format!("{}/api", server.uri()));
    let tasks = api
        .filter_tasks(&[TaskState::Pending, TaskState::Running])
        .await
        .unwrap();

    assert_eq!(tasks.len(), 2);
    assert_eq!(tasks[0].state, TaskState::Running);
    assert_eq!(tasks[1].title, "Generate artifacts");
}

/// No matching tasks is an empty array, not an error.
#[tokio::test]
async fn filter_tasks_handles_empty_result() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/tasks/filter"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([])))
        .mount(&server)
        .await;

    let api = TaskApi::new(format!("{}/api", server.uri()));
    let tasks = api.filter_tasks(&[TaskState::Pending]).await.unwrap();
    assert!(tasks.is_empty());
}

/// A non-2xx response surfaces as an API error with status and body.
#[tokio::test]
async fn filter_tasks_propagates_server_error() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/tasks/filter"))
        .respond_with(ResponseTemplate::new(503).set_body_string("maintenance window"))
        .mount(&server)
        .await;

    let api = TaskApi::new(format!("{}/api", server.uri()));
    let err = api.filter_tasks(&[TaskState::Running]).await.unwrap_err();

    assert_matches!(
        err,
        TaskApiError::Api { status: 503, ref body } if body == "maintenance window"
    );
}
