// crates/store/src/lib.rs
//! Client-side jobs store.
//!
//! A [`JobsProvider`] owns the jobs listing state, fetches page 1 on
//! activation, and hands out read access, change notification, `set_jobs`
//! and `handle_job_fetch` to whatever it is passed to.

pub mod jobs;

pub use jobs::{FetchState, JobError, JobsProvider, JobsSnapshot, JobsState};
