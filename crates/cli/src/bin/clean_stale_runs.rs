//! `clean-stale-runs` -- force long-stuck running flow runs into the
//! crashed state.
//!
//! Usage: `clean-stale-runs <DAYS_TO_KEEP> <BATCH_SIZE>`
//!
//! Sweeps the orchestration server for runs still marked running that
//! started more than `DAYS_TO_KEEP` days ago (their workers are long
//! gone) and forces them to `CRASHED`, bypassing the server's normal
//! transition validation, `BATCH_SIZE` runs per page.
//!
//! # Environment variables
//!
//! | Variable                    | Required | Default                     |
//! |-----------------------------|----------|-----------------------------|
//! | `ORCHESTRATOR_API_URL`      | no       | `http://127.0.0.1:4200/api` |
//! | `ORCHESTRATOR_TIMEOUT_SECS` | no       | `30`                        |
//! | `SWEEP_PAUSE_EVERY`         | no       | `10`                        |
//! | `SWEEP_INTRA_PAUSE_MS`      | no       | `500`                       |
//! | `SWEEP_INTER_PAUSE_MS`      | no       | `1000`                      |

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use flowclean_cli::SweepArgs;
use flowclean_client::config::OrchestratorConfig;
use flowclean_client::orchestrator::OrchestratorApi;
use flowclean_core::retention::RetentionWindow;
use flowclean_core::state::RunState;
use flowclean_sweep::{ForceSetState, Pacing, Sweeper};

/// Only runs the server still believes are executing are stale
/// candidates.
const STALE_RUN_STATES: &[RunState] = &[RunState::Running];

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "clean_stale_runs=info,flowclean_sweep=info,flowclean_client=info".into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let args = SweepArgs::parse();

    let window = RetentionWindow::days(args.days_to_keep).unwrap_or_else(|e| {
        tracing::error!(error = %e, "Invalid retention window");
        std::process::exit(1);
    });

    let config = OrchestratorConfig::from_env();
    let api = OrchestratorApi::from_config(&config).unwrap_or_else(|e| {
        tracing::error!(error = %e, "Failed to build orchestrator client");
        std::process::exit(1);
    });

    let action = ForceSetState::new(api.clone(), RunState::Crashed).unwrap_or_else(|e| {
        tracing::error!(error = %e, "Invalid remediation target");
        std::process::exit(1);
    });
    let sweeper = Sweeper::new(api, action).with_pacing(Pacing::from_env());

    match sweeper.sweep(window, STALE_RUN_STATES, args.batch_size).await {
        Ok(report) => {
            tracing::info!(
                total = report.total_processed,
                batches = report.batches,
                failed = report.failed.len(),
                "Stale-run cleanup complete"
            );
        }
        Err(e) => {
            tracing::error!(error = %e, "Sweep aborted");
            std::process::exit(1);
        }
    }
}
