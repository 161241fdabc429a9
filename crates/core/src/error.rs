// crates/core/src/error.rs
use thiserror::Error;

/// Failure reported by a [`JobsFetcher`](crate::JobsFetcher).
///
/// The store does not distinguish between variants; every one of them ends
/// up as the same failed state carrying [`FetchError::message`].
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("API error {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    #[error("Fetch failed: {}", .message.as_deref().unwrap_or("<no message>"))]
    Other { message: Option<String> },
}

impl FetchError {
    /// Rejection carrying a message.
    pub fn other(message: impl Into<String>) -> Self {
        Self::Other {
            message: Some(message.into()),
        }
    }

    /// Rejection with no message at all.
    pub fn silent() -> Self {
        Self::Other { message: None }
    }

    /// Human-readable message, if the failure carries one.
    pub fn message(&self) -> Option<String> {
        match self {
            Self::Other { message } => message.clone(),
            other => Some(other.to_string()),
        }
    }
}

/// Invalid configuration values.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid value for {var}: {value:?} ({reason})")]
    InvalidEnvVar {
        var: &'static str,
        value: String,
        reason: String,
    },
}
