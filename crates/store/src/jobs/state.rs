// crates/store/src/jobs/state.rs
//! State of the jobs listing.

use jobs_board_core::JobsPayload;

use super::types::{FetchState, JobsSnapshot};

/// Fetch phase plus the jobs slot.
///
/// `loading` and `error` are both derived from the single `fetch` value, so
/// a failed state can never still report loading.
#[derive(Debug, Clone, PartialEq)]
pub struct JobsState {
    fetch: FetchState,
    jobs: JobsPayload,
}

impl JobsState {
    /// `Idle` with an empty `{}` jobs slot.
    pub fn new() -> Self {
        Self {
            fetch: FetchState::Idle,
            jobs: JobsPayload::empty(),
        }
    }

    pub fn fetch_state(&self) -> &FetchState {
        &self.fetch
    }

    pub fn jobs(&self) -> &JobsPayload {
        &self.jobs
    }

    pub fn snapshot(&self) -> JobsSnapshot {
        JobsSnapshot {
            loading: self.fetch.is_loading(),
            error: self.fetch.error(),
            jobs: self.jobs.clone(),
        }
    }

    /// A fetch went out. The previous payload stays in the slot until it settles.
    pub(crate) fn begin(&mut self) {
        self.fetch = FetchState::Loading;
    }

    pub(crate) fn succeed(&mut self, payload: JobsPayload) {
        self.fetch = FetchState::Loaded;
        self.jobs = payload;
    }

    pub(crate) fn fail(&mut self, message: Option<String>) {
        self.fetch = FetchState::Failed(message.unwrap_or_default());
        self.jobs = JobsPayload::failed();
    }

    /// Overwrite the jobs slot without touching the fetch phase.
    pub(crate) fn set_jobs(&mut self, payload: JobsPayload) {
        self.jobs = payload;
    }
}

impl Default for JobsState {
    fn default() -> Self {
        Self::new()
    }
}
