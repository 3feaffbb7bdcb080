//! Fixed-interval throttling for the sweep loop.
//!
//! The intervals are flat, not adaptive: the loop pauses after every
//! `pause_every`-th successful action within a batch, and once more
//! after each full page. Deployments tune these to their server's API
//! capacity via environment variables.

use std::time::Duration;

/// Default number of successes between intra-batch pauses.
const DEFAULT_PAUSE_EVERY: u64 = 10;

/// Default intra-batch pause.
const DEFAULT_INTRA_PAUSE_MS: u64 = 500;

/// Default inter-batch pause. Longer than the intra-batch pause.
const DEFAULT_INTER_PAUSE_MS: u64 = 1_000;

/// Throttling configuration for one sweep.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pacing {
    /// Pause after every this-many successful actions within a batch.
    /// Failures do not advance the counter.
    pub pause_every: u64,
    /// Length of the intra-batch pause.
    pub intra_batch_pause: Duration,
    /// Length of the pause between page fetches.
    pub inter_batch_pause: Duration,
}

impl Default for Pacing {
    fn default() -> Self {
        Self {
            pause_every: DEFAULT_PAUSE_EVERY,
            intra_batch_pause: Duration::from_millis(DEFAULT_INTRA_PAUSE_MS),
            inter_batch_pause: Duration::from_millis(DEFAULT_INTER_PAUSE_MS),
        }
    }
}

impl Pacing {
    /// Load pacing overrides from environment variables, falling back to
    /// the defaults for anything unset or unparseable.
    ///
    /// | Env Var               | Default |
    /// |-----------------------|---------|
    /// | `SWEEP_PAUSE_EVERY`   | `10`    |
    /// | `SWEEP_INTRA_PAUSE_MS`| `500`   |
    /// | `SWEEP_INTER_PAUSE_MS`| `1000`  |
    ///
    /// A `SWEEP_PAUSE_EVERY` of zero is ignored; the success-counter
    /// check is a modulus.
    pub fn from_env() -> Self {
        let pause_every = std::env::var("SWEEP_PAUSE_EVERY")
            .ok()
            .and_then(|v| v.parse::<u64>().ok())
            .filter(|&n| n > 0)
            .unwrap_or(DEFAULT_PAUSE_EVERY);

        let intra_ms = std::env::var("SWEEP_INTRA_PAUSE_MS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(DEFAULT_INTRA_PAUSE_MS);

        let inter_ms = std::env::var("SWEEP_INTER_PAUSE_MS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(DEFAULT_INTER_PAUSE_MS);

        Self {
            pause_every,
            intra_batch_pause: Duration::from_millis(intra_ms),
            inter_batch_pause: Duration::from_millis(inter_ms),
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
