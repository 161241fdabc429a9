// crates/core/src/fetch/mod.rs
//! The fetch collaborator: trait seam plus the reqwest-backed implementation.

pub mod http;
pub mod provider;

pub use http::HttpJobsFetcher;
pub use provider::JobsFetcher;
