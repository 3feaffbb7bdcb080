//! The batch remediation sweeper.
//!
//! One loop serves every retention script: fetch a bounded page of
//! candidate flow runs from the orchestration server, apply an injected
//! remediation action to each, tolerate per-record failures, throttle
//! with fixed pauses, and re-fetch until no candidates remain.

pub mod action;
pub mod pacing;
pub mod source;
pub mod sweeper;

pub use action::{DeleteRun, ForceSetState, RemediationAction};
pub use pacing::Pacing;
pub use source::RunSource;
pub use sweeper::{SweepError, SweepReport, Sweeper};
