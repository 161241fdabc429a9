// crates/store/src/jobs/types.rs
//! Types for the jobs store.

use jobs_board_core::JobsPayload;
use serde::Serialize;

/// Phase of the most recent fetch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchState {
    /// Constructed but never activated.
    Idle,
    Loading,
    Loaded,
    /// Carries the failure message, empty when the fetcher gave none.
    Failed(String),
}

impl FetchState {
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    pub fn error(&self) -> JobError {
        match self {
            Self::Failed(message) => JobError {
                present: true,
                message: message.clone(),
            },
            _ => JobError::default(),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Loading => "loading",
            Self::Loaded => "loaded",
            Self::Failed(_) => "failed",
        }
    }
}

/// Error half of the read view.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct JobError {
    pub present: bool,
    pub message: String,
}

/// Flat read view handed to consumers.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JobsSnapshot {
    pub loading: bool,
    pub error: JobError,
    pub jobs: JobsPayload,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_fetch_state_flags() {
        assert!(!FetchState::Idle.is_loading());
        assert!(FetchState::Loading.is_loading());
        assert!(!FetchState::Loaded.is_loading());
        assert!(!FetchState::Failed(String::new()).is_loading());

        assert_eq!(FetchState::Loading.error(), JobError::default());
        assert_eq!(
            FetchState::Failed("network down".into()).error(),
            JobError {
                present: true,
                message: "network down".into()
            }
        );
        assert_eq!(FetchState::Failed("x".into()).as_str(), "failed");
    }

    #[test]
    fn test_snapshot_serialize() {
        let snapshot = JobsSnapshot {
            loading: false,
            error: JobError::default(),
            jobs: JobsPayload::new(json!({ "list": [] })),
        };
        let json = serde_json::to_value(&snapshot).unwrap();
        assert_eq!(
            json,
            json!({
                "loading": false,
                "error": { "present": false, "message": "" },
                "jobs": { "list": [] }
            })
        );
    }
}
