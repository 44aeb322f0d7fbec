//! The view capability the pipeline drives.
//!
//! The flow logic never touches a rendering surface directly; it writes
//! through this narrow interface. Production binds it to the shared job state
//! the progress endpoint reads ([`crate::progress::jobs::JobView`]); pipeline
//! tests bind it to a recording fake.

use crate::progress::simulator::ProgressStep;
use crate::upstream::{AnalysisOutcome, SubmitError};

pub trait AnalysisView: Send + Sync + 'static {
    /// The progress overlay becomes visible; submission can no longer be
    /// aborted by anything but an explicit cancel.
    fn show_overlay(&self);

    /// One simulator tick: update percentage, status message, and indicators.
    fn apply_step(&self, step: &'static ProgressStep);

    /// The real submission is about to fire; cancel is no longer possible.
    fn mark_submitting(&self);

    /// The real submission finished (exactly once per flow).
    fn record_outcome(&self, outcome: Result<AnalysisOutcome, SubmitError>);

    /// The flow was cancelled before the real submission fired.
    fn mark_cancelled(&self);
}
