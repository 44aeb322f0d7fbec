use std::sync::Arc;

use crate::config::Config;
use crate::progress::jobs::JobRegistry;
use crate::upstream::Submitter;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Retained for handlers that need runtime settings; currently only read
    /// at startup.
    #[allow(dead_code)]
    pub config: Config,
    /// In-memory registry of running/finished analysis flows.
    pub jobs: JobRegistry,
    /// The real submission boundary. Production: `HttpSubmitter`; tests swap
    /// in fakes to pin the exactly-once invariant.
    pub submitter: Arc<dyn Submitter>,
}
