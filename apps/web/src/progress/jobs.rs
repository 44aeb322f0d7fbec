//! In-memory analysis job registry.
//!
//! One entry per submitted flow, living for the process lifetime (the page's
//! lifecycle is per-load; nothing persists). The pipeline writes job state
//! through [`JobView`]; the progress endpoint reads snapshots out of it.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};

use serde::Serialize;
use tokio::sync::oneshot;
use uuid::Uuid;

use crate::progress::simulator::{
    indicator_states, ring_offset, IndicatorState, ProgressStep, PROGRESS_RING_CIRCUMFERENCE,
};
use crate::progress::view::AnalysisView;
use crate::upstream::{AnalysisOutcome, SubmitError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum JobPhase {
    /// Overlay visible, cosmetic steps ticking, real submission pending.
    Running,
    /// The 6000 ms mark passed; the real submission is in flight.
    Submitting,
    Submitted,
    Failed,
    Cancelled,
}

/// Mutable display + lifecycle state of one analysis flow.
#[derive(Debug)]
pub struct JobState {
    pub phase: JobPhase,
    pub overlay_visible: bool,
    pub percentage: u8,
    pub message: String,
    pub indicators: Vec<IndicatorState>,
    pub outcome: Option<AnalysisOutcome>,
    pub error: Option<String>,
}

impl JobState {
    fn new() -> Self {
        Self {
            phase: JobPhase::Running,
            overlay_visible: false,
            percentage: 0,
            message: String::new(),
            indicators: indicator_states(0),
            outcome: None,
            error: None,
        }
    }
}

/// What the page polls while the overlay is up.
#[derive(Debug, Clone, Serialize)]
pub struct ProgressSnapshot {
    pub phase: JobPhase,
    pub overlay_visible: bool,
    pub percentage: u8,
    pub message: String,
    /// stroke-dashoffset for the r45 overlay ring.
    pub ring_offset: f64,
    pub indicators: Vec<IndicatorState>,
    pub can_cancel: bool,
}

/// Production [`AnalysisView`]: writes into the registry entry's shared state.
#[derive(Clone)]
pub struct JobView {
    state: Arc<Mutex<JobState>>,
}

impl JobView {
    fn lock(&self) -> MutexGuard<'_, JobState> {
        self.state.lock().unwrap()
    }
}

impl AnalysisView for JobView {
    fn show_overlay(&self) {
        self.lock().overlay_visible = true;
    }

    fn apply_step(&self, step: &'static ProgressStep) {
        let mut state = self.lock();
        state.percentage = step.percentage;
        state.message = step.label.to_string();
        state.indicators = indicator_states(step.stage);
    }

    fn mark_submitting(&self) {
        self.lock().phase = JobPhase::Submitting;
    }

    fn record_outcome(&self, outcome: Result<AnalysisOutcome, SubmitError>) {
        let mut state = self.lock();
        match outcome {
            Ok(result) => {
                state.phase = JobPhase::Submitted;
                state.outcome = Some(result);
            }
            Err(e) => {
                state.phase = JobPhase::Failed;
                state.error = Some(e.to_string());
            }
        }
    }

    fn mark_cancelled(&self) {
        let mut state = self.lock();
        state.phase = JobPhase::Cancelled;
        state.overlay_visible = false;
    }
}

struct JobHandle {
    state: Arc<Mutex<JobState>>,
    cancel: Option<oneshot::Sender<()>>,
}

/// Why a cancel request was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CancelRejection {
    NotFound,
    /// The real submission already fired (or is firing); "submission happens
    /// at most once" also means it cannot be un-happened.
    TooLate,
}

#[derive(Clone, Default)]
pub struct JobRegistry {
    jobs: Arc<Mutex<HashMap<Uuid, JobHandle>>>,
}

impl JobRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a fresh job. Returns its id, the view the pipeline writes
    /// through, and the cancel receiver the pipeline selects on.
    pub fn create(&self) -> (Uuid, JobView, oneshot::Receiver<()>) {
        let id = Uuid::new_v4();
        let state = Arc::new(Mutex::new(JobState::new()));
        let (cancel_tx, cancel_rx) = oneshot::channel();

        self.jobs.lock().unwrap().insert(
            id,
            JobHandle {
                state: state.clone(),
                cancel: Some(cancel_tx),
            },
        );

        (id, JobView { state }, cancel_rx)
    }

    pub fn snapshot(&self, id: Uuid) -> Option<ProgressSnapshot> {
        let jobs = self.jobs.lock().unwrap();
        let handle = jobs.get(&id)?;
        let state = handle.state.lock().unwrap();
        Some(ProgressSnapshot {
            phase: state.phase,
            overlay_visible: state.overlay_visible,
            percentage: state.percentage,
            message: state.message.clone(),
            ring_offset: ring_offset(state.percentage as f64, PROGRESS_RING_CIRCUMFERENCE),
            indicators: state.indicators.clone(),
            can_cancel: state.phase == JobPhase::Running && handle.cancel.is_some(),
        })
    }

    /// Requests cancellation. Only a job still in `Running` can be cancelled;
    /// once `Submitting` (or later) the request is rejected.
    pub fn cancel(&self, id: Uuid) -> Result<(), CancelRejection> {
        let mut jobs = self.jobs.lock().unwrap();
        let handle = jobs.get_mut(&id).ok_or(CancelRejection::NotFound)?;

        let phase = handle.state.lock().unwrap().phase;
        if phase != JobPhase::Running {
            return Err(CancelRejection::TooLate);
        }

        match handle.cancel.take() {
            Some(tx) => {
                // Send failure means the pipeline already finished; treat as late.
                tx.send(()).map_err(|_| CancelRejection::TooLate)
            }
            None => Err(CancelRejection::TooLate),
        }
    }

    /// The upstream results page for a submitted job, if available yet.
    pub fn result(&self, id: Uuid) -> Option<JobResult> {
        let jobs = self.jobs.lock().unwrap();
        let handle = jobs.get(&id)?;
        let state = handle.state.lock().unwrap();
        Some(match state.phase {
            JobPhase::Submitted => match &state.outcome {
                Some(outcome) => JobResult::Ready(outcome.clone()),
                None => JobResult::Pending,
            },
            JobPhase::Failed => {
                JobResult::Failed(state.error.clone().unwrap_or_else(|| "unknown".to_string()))
            }
            JobPhase::Cancelled => JobResult::Cancelled,
            JobPhase::Running | JobPhase::Submitting => JobResult::Pending,
        })
    }
}

/// Resolution of a flow's real submission, as seen by the results endpoint.
#[derive(Debug, Clone)]
pub enum JobResult {
    Pending,
    Ready(AnalysisOutcome),
    Failed(String),
    Cancelled,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::progress::simulator::PROGRESS_STEPS;

    #[test]
    fn test_fresh_job_snapshot_is_zeroed_and_cancellable() {
        let registry = JobRegistry::new();
        let (id, _view, _cancel) = registry.create();

        let snap = registry.snapshot(id).unwrap();
        assert_eq!(snap.phase, JobPhase::Running);
        assert_eq!(snap.percentage, 0);
        assert!(snap.can_cancel);
        // 0% draws the full gap.
        assert!((snap.ring_offset - PROGRESS_RING_CIRCUMFERENCE).abs() < 1e-9);
    }

    #[test]
    fn test_snapshot_unknown_job_is_none() {
        let registry = JobRegistry::new();
        assert!(registry.snapshot(Uuid::new_v4()).is_none());
    }

    #[test]
    fn test_view_applies_step_to_snapshot() {
        let registry = JobRegistry::new();
        let (id, view, _cancel) = registry.create();

        view.show_overlay();
        view.apply_step(&PROGRESS_STEPS[1]);

        let snap = registry.snapshot(id).unwrap();
        assert!(snap.overlay_visible);
        assert_eq!(snap.percentage, 60);
        assert_eq!(snap.message, "Analyzing skills and experience...");
        assert_eq!(snap.indicators[0], IndicatorState::Completed);
        assert_eq!(snap.indicators[1], IndicatorState::Active);
    }

    #[test]
    fn test_cancel_running_job_once() {
        let registry = JobRegistry::new();
        let (id, _view, mut cancel_rx) = registry.create();

        assert!(registry.cancel(id).is_ok());
        assert!(cancel_rx.try_recv().is_ok());
        // Second cancel has no sender left.
        assert_eq!(registry.cancel(id), Err(CancelRejection::TooLate));
    }

    #[test]
    fn test_cancel_rejected_once_submitting() {
        let registry = JobRegistry::new();
        let (id, view, _cancel) = registry.create();

        view.mark_submitting();
        assert_eq!(registry.cancel(id), Err(CancelRejection::TooLate));
        assert!(!registry.snapshot(id).unwrap().can_cancel);
    }

    #[test]
    fn test_cancel_unknown_job() {
        let registry = JobRegistry::new();
        assert_eq!(registry.cancel(Uuid::new_v4()), Err(CancelRejection::NotFound));
    }

    #[test]
    fn test_outcome_recorded_on_view_reaches_result() {
        let registry = JobRegistry::new();
        let (id, view, _cancel) = registry.create();

        view.record_outcome(Ok(AnalysisOutcome {
            status: 200,
            body: "<html>results</html>".to_string(),
        }));

        match registry.result(id).unwrap() {
            JobResult::Ready(outcome) => assert_eq!(outcome.status, 200),
            other => panic!("expected ready result, got {other:?}"),
        }
        assert_eq!(registry.snapshot(id).unwrap().phase, JobPhase::Submitted);
    }

    #[test]
    fn test_result_pending_until_submission_completes() {
        let registry = JobRegistry::new();
        let (id, view, _cancel) = registry.create();

        assert!(matches!(registry.result(id).unwrap(), JobResult::Pending));
        view.mark_submitting();
        assert!(matches!(registry.result(id).unwrap(), JobResult::Pending));
    }

    #[test]
    fn test_failed_submission_surfaces_error() {
        let registry = JobRegistry::new();
        let (id, view, _cancel) = registry.create();

        view.record_outcome(Err(SubmitError::Status { status: 503 }));

        match registry.result(id).unwrap() {
            JobResult::Failed(msg) => assert!(msg.contains("503")),
            other => panic!("expected failed result, got {other:?}"),
        }
    }
}
