//! HTTP clients for the two external services.
//!
//! [`orchestrator`] wraps the orchestration server's flow-run API
//! (paginated filter query, delete, forced state transition).
//! [`tasks`] wraps the task-tracking service's read-only task query.
//! Both are thin [`reqwest`] clients; all state lives server-side.

pub mod config;
pub mod models;
pub mod orchestrator;
pub mod tasks;
