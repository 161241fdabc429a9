// crates/core/src/types.rs
//! The jobs listing payload as this layer sees it.

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

/// Default fetch target: page 1 of the jobs listing.
pub const DEFAULT_JOBS_PATH: &str = "/jobs?page=1";

/// Response body of the jobs listing endpoint.
///
/// The shape belongs to the backend; nothing here inspects it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct JobsPayload(Value);

impl JobsPayload {
    pub fn new(value: Value) -> Self {
        Self(value)
    }

    /// `{}` — the slot's value before any fetch has settled.
    pub fn empty() -> Self {
        Self(Value::Object(Default::default()))
    }

    /// `{"status": false}` — written into the slot when a fetch fails.
    pub fn failed() -> Self {
        Self(json!({ "status": false }))
    }

    pub fn as_value(&self) -> &Value {
        &self.0
    }

    pub fn into_value(self) -> Value {
        self.0
    }
}

impl Default for JobsPayload {
    fn default() -> Self {
        Self::empty()
    }
}

impl From<Value> for JobsPayload {
    fn from(value: Value) -> Self {
        Self(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_and_failed_payloads() {
        assert_eq!(JobsPayload::empty().as_value(), &json!({}));
        assert_eq!(JobsPayload::failed().as_value(), &json!({ "status": false }));
        assert_eq!(JobsPayload::default(), JobsPayload::empty());
    }

    #[test]
    fn test_payload_is_transparent_json() {
        let payload: JobsPayload =
            serde_json::from_str(r#"{"list":[{"id":1}],"totalPages":3}"#).unwrap();
        assert_eq!(payload.as_value()["list"][0]["id"], 1);

        let json = serde_json::to_string(&JobsPayload::failed()).unwrap();
        assert_eq!(json, r#"{"status":false}"#);
    }
}
