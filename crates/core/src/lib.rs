// crates/core/src/lib.rs
//! Shared building blocks for the jobs board: the opaque jobs payload,
//! the fetch collaborator seam and its HTTP implementation, and config.

pub mod config;
pub mod error;
pub mod fetch;
pub mod types;

pub use config::FetchConfig;
pub use error::{ConfigError, FetchError};
pub use fetch::{HttpJobsFetcher, JobsFetcher};
pub use types::{JobsPayload, DEFAULT_JOBS_PATH};
