// crates/store/src/jobs/mod.rs
//! Jobs listing state and the provider that owns it.
//!
//! Provides:
//! - `JobsProvider` — cloneable store handle: fetch, overwrite, subscribe
//! - `JobsState` — fetch phase plus the jobs slot
//! - `JobsSnapshot` — flat `{ loading, error, jobs }` read view

pub mod provider;
pub mod state;
pub mod types;

pub use provider::JobsProvider;
pub use state::JobsState;
pub use types::{FetchState, JobError, JobsSnapshot};
