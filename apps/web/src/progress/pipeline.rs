//! Analysis flow pipeline — two independent timers per submitted form.
//!
//! 1. Step-advance timer: period 1500 ms, bounded to the four simulator
//!    steps, self-terminating.
//! 2. Submission timer: one-shot at 6000 ms, fires the real upstream
//!    submission exactly once.
//!
//! The two are deliberately NOT linked: the displayed progress is cosmetic
//! and the real submission always fires at the fixed mark, whether or not the
//! ring has reached 100%. This mirrors the shipped page behavior; see
//! DESIGN.md for why it is flagged rather than fixed. A cancel request before
//! the submission mark clears both timers; after it, cancel is rejected
//! upstream of this module (the registry checks the phase).

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::oneshot;
use tracing::{info, warn};

use crate::progress::simulator::ProgressSimulator;
use crate::progress::view::AnalysisView;
use crate::upstream::{ResumeUpload, Submitter};

/// Period of the cosmetic step-advance timer.
pub const STEP_PERIOD: Duration = Duration::from_millis(1500);
/// Fixed delay before the real submission fires.
pub const SUBMIT_DELAY: Duration = Duration::from_millis(6000);

/// Drives the cosmetic step sequence: one tick per period until the simulator
/// is terminal, then stops for good. The display stays frozen at the last
/// applied step.
pub async fn drive_steps(view: Arc<dyn AnalysisView>) {
    let mut simulator = ProgressSimulator::new();
    simulator.start();

    while !simulator.is_complete() {
        tokio::time::sleep(STEP_PERIOD).await;
        if let Some(step) = simulator.advance() {
            view.apply_step(step);
        }
    }
}

/// Runs one complete analysis flow: shows the overlay, arms both timers, and
/// either submits at the fixed mark or honors a cancel that arrives first.
///
/// The submitter is invoked from exactly one place, after the submission
/// timer elapses; the cancel branch aborts the ticker and never submits.
pub async fn run_analysis_flow(
    view: Arc<dyn AnalysisView>,
    upload: ResumeUpload,
    submitter: Arc<dyn Submitter>,
    cancel: oneshot::Receiver<()>,
) {
    view.show_overlay();
    let ticker = tokio::spawn(drive_steps(view.clone()));

    tokio::select! {
        _ = cancel => {
            ticker.abort();
            view.mark_cancelled();
            info!("Analysis flow cancelled before submission");
        }
        _ = tokio::time::sleep(SUBMIT_DELAY) => {
            view.mark_submitting();
            let outcome = submitter.submit(&upload).await;
            if let Err(e) = &outcome {
                warn!("Analysis submission failed: {e}");
            }
            view.record_outcome(outcome);
        }
    }
}
