// crates/core/src/fetch/provider.rs
//! JobsFetcher trait defining the interface to the jobs backend.

use async_trait::async_trait;

use crate::error::FetchError;
use crate::types::JobsPayload;

/// Fetches a jobs listing from a URL.
///
/// Implementations include:
/// - `HttpJobsFetcher` — GET over reqwest
/// - scripted fetchers in tests
#[async_trait]
pub trait JobsFetcher: Send + Sync {
    /// Fetch the resource at `url` (caller-constructed, e.g. `/jobs?page=2`).
    async fn fetch(&self, url: &str) -> Result<JobsPayload, FetchError>;

    /// Fetcher name for logging (e.g. "http").
    fn name(&self) -> &str;
}
