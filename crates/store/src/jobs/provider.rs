// crates/store/src/jobs/provider.rs
//! The store handle consumers are given.

use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::Arc;

use jobs_board_core::{FetchConfig, JobsFetcher, JobsPayload};
use tokio::sync::watch;
use tokio::task::JoinHandle;

use super::state::JobsState;
use super::types::{FetchState, JobError, JobsSnapshot};

/// Owns the jobs listing state and the fetcher that fills it.
///
/// Cheap to clone; every clone shares the same state. Pass it explicitly to
/// whatever needs to read or refresh the listing. The state is dropped with
/// the last handle.
///
/// Overlapping [`handle_job_fetch`](Self::handle_job_fetch) calls are
/// sequenced: only the most recently *started* request may write its
/// outcome, so a slow earlier response can't overwrite a newer one. Earlier
/// requests are not aborted; their results are discarded.
#[derive(Clone)]
pub struct JobsProvider {
    inner: Arc<Inner>,
}

struct Inner {
    fetcher: Arc<dyn JobsFetcher>,
    config: FetchConfig,
    state_tx: watch::Sender<JobsState>,
    latest_request: AtomicU64,
    activated: AtomicBool,
}

impl JobsProvider {
    /// Create an idle provider. Nothing is fetched until [`activate`](Self::activate).
    pub fn new(fetcher: Arc<dyn JobsFetcher>, config: FetchConfig) -> Self {
        let (state_tx, _) = watch::channel(JobsState::new());
        Self {
            inner: Arc::new(Inner {
                fetcher,
                config,
                state_tx,
                latest_request: AtomicU64::new(0),
                activated: AtomicBool::new(false),
            }),
        }
    }

    /// Create a provider and activate it. Must be called within a tokio runtime.
    pub fn mount(fetcher: Arc<dyn JobsFetcher>, config: FetchConfig) -> Self {
        let provider = Self::new(fetcher, config);
        // Detached; the spawned task holds its own clone.
        provider.activate();
        provider
    }

    /// First activation: switch to loading and spawn the fetch of
    /// `config.initial_path`. Later calls do nothing and return `None`.
    pub fn activate(&self) -> Option<JoinHandle<()>> {
        if self.inner.activated.swap(true, Ordering::SeqCst) {
            return None;
        }

        let url = self.inner.config.initial_path.clone();
        let request = self.begin_request(&url);
        let provider = self.clone();
        Some(tokio::spawn(async move {
            provider.settle(request, &url).await;
        }))
    }

    /// Fetch `url` and replace the state with the outcome.
    ///
    /// Failures are absorbed into the state, never returned. Dropping the
    /// future before it settles marks the request failed, unless a newer
    /// request has started since.
    pub async fn handle_job_fetch(&self, url: &str) {
        let request = self.begin_request(url);
        self.settle(request, url).await;
    }

    /// Overwrite the jobs slot. Loading and error are left as they are.
    pub fn set_jobs(&self, jobs: impl Into<JobsPayload>) {
        let jobs = jobs.into();
        self.inner.state_tx.send_modify(|state| state.set_jobs(jobs));
    }

    /// Watch the state. The receiver sees the current value immediately.
    pub fn subscribe(&self) -> watch::Receiver<JobsState> {
        self.inner.state_tx.subscribe()
    }

    pub fn state(&self) -> JobsState {
        self.inner.state_tx.borrow().clone()
    }

    pub fn snapshot(&self) -> JobsSnapshot {
        self.inner.state_tx.borrow().snapshot()
    }

    pub fn fetch_state(&self) -> FetchState {
        self.inner.state_tx.borrow().fetch_state().clone()
    }

    pub fn job_loading(&self) -> bool {
        self.inner.state_tx.borrow().fetch_state().is_loading()
    }

    pub fn job_error(&self) -> JobError {
        self.inner.state_tx.borrow().fetch_state().error()
    }

    pub fn jobs(&self) -> JobsPayload {
        self.inner.state_tx.borrow().jobs().clone()
    }

    pub fn config(&self) -> &FetchConfig {
        &self.inner.config
    }

    fn begin_request(&self, url: &str) -> u64 {
        // Numbering and the switch to loading are one step under the state lock.
        let latest = &self.inner.latest_request;
        let mut request = 0;
        self.inner.state_tx.send_modify(|state| {
            request = latest.fetch_add(1, Ordering::SeqCst) + 1;
            state.begin();
        });
        tracing::info!(
            url,
            request,
            fetcher = self.inner.fetcher.name(),
            "Fetching jobs"
        );
        request
    }

    async fn settle(&self, request: u64, url: &str) {
        let mut guard = PendingRequest {
            inner: &self.inner,
            request,
            url,
            settled: false,
        };
        let result = self.inner.fetcher.fetch(url).await;
        guard.settled = true;

        match &result {
            Ok(_) => tracing::debug!(url, request, "Jobs fetched"),
            Err(e) => tracing::error!(url, request, error = %e, "Failed to fetch jobs"),
        }

        let latest = &self.inner.latest_request;
        let applied = self.inner.state_tx.send_if_modified(|state| {
            if latest.load(Ordering::SeqCst) != request {
                return false;
            }
            match result {
                Ok(payload) => state.succeed(payload),
                Err(e) => state.fail(e.message()),
            }
            true
        });

        if !applied {
            tracing::debug!(url, request, "Discarding superseded jobs response");
        }
    }
}

const ABANDONED_MESSAGE: &str = "jobs fetch dropped before it settled";

/// Fails its request on drop unless the fetch settled first.
struct PendingRequest<'a> {
    inner: &'a Inner,
    request: u64,
    url: &'a str,
    settled: bool,
}

impl Drop for PendingRequest<'_> {
    fn drop(&mut self) {
        if self.settled {
            return;
        }
        let latest = &self.inner.latest_request;
        let request = self.request;
        let abandoned = self.inner.state_tx.send_if_modified(|state| {
            if latest.load(Ordering::SeqCst) != request {
                return false;
            }
            state.fail(Some(ABANDONED_MESSAGE.to_string()));
            true
        });
        if abandoned {
            tracing::warn!(url = self.url, request, "Jobs fetch dropped before settling");
        }
    }
}
