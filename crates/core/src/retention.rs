//! Retention windows and the sweep filter predicate.
//!
//! A [`RetentionWindow`] is an age threshold in whole days; runs that
//! started before `now - window` are eligible for remediation. A
//! [`RunFilter`] fixes the predicate (state set + cutoff) for the
//! duration of one sweep, so records remediated mid-sweep cannot
//! re-qualify under a moving cutoff.

use crate::error::CoreError;
use crate::state::RunState;
use crate::types::Timestamp;

/// Age threshold beyond which runs become eligible for remediation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetentionWindow {
    days: i64,
}

impl RetentionWindow {
    /// Create a window of `days` whole days. Negative values are rejected;
    /// zero is allowed and makes every already-started run eligible.
    pub fn days(days: i64) -> Result<Self, CoreError> {
        if days < 0 {
            return Err(CoreError::Validation(format!(
                "Retention window must be non-negative, got {days} days"
            )));
        }
        Ok(Self { days })
    }

    /// Number of days in the window.
    pub fn num_days(&self) -> i64 {
        self.days
    }

    /// The cutoff timestamp for a sweep starting at `now`.
    pub fn cutoff_from(&self, now: Timestamp) -> Timestamp {
        now - chrono::Duration::days(self.days)
    }
}

/// The immutable predicate for one sweep: runs in any of `states` that
/// started strictly before `started_before`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunFilter {
    states: Vec<RunState>,
    started_before: Timestamp,
}

impl RunFilter {
    /// Build a filter. The state set must be non-empty; an empty set
    /// would match nothing and silently turn the sweep into a no-op.
    pub fn new(states: Vec<RunState>, started_before: Timestamp) -> Result<Self, CoreError> {
        if states.is_empty() {
            return Err(CoreError::Validation(
                "Sweep state set must not be empty".to_string(),
            ));
        }
        Ok(Self {
            states,
            started_before,
        })
    }

    /// States a candidate run may be in.
    pub fn states(&self) -> &[RunState] {
        &self.states
    }

    /// Exclusive upper bound on a candidate run's start time.
    pub fn started_before(&self) -> Timestamp {
        self.started_before
    }
}

/// Validate a page size for the paginated filter query.
pub fn validate_page_size(page_size: i64) -> Result<(), CoreError> {
    if page_size <= 0 {
        return Err(CoreError::Validation(format!(
            "Page size must be positive, got {page_size}"
        )));
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
