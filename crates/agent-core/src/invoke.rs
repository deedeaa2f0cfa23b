//! Invoke Wire Contract
//!
//! Request/response types for the `POST /invoke` endpoint. The input and
//! context objects are deliberately untyped maps: the contract promises
//! only "serializable JSON", not any particular shape.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Untyped JSON object, used for agent input and context
pub type JsonMap = serde_json::Map<String, Value>;

/// Body of `POST /invoke`
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct InvokeRequest {
    /// End user id
    pub user_id: String,

    /// Agent input (e.g. `{ "question": "..." }`)
    #[serde(default)]
    pub input: JsonMap,

    /// Caller-supplied context, passed through to the handler
    #[serde(default)]
    pub context: JsonMap,
}

/// Timing metrics attached to every successful invocation
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct InvokeMetrics {
    /// Wall-clock handler latency in milliseconds
    pub latency_ms: u64,
}

/// Body of a successful `POST /invoke` response
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct InvokeResponse {
    /// Handler output, opaque JSON
    pub output: Value,

    /// Timing metrics
    pub metrics: InvokeMetrics,

    /// Agent version string
    pub version: String,

    /// Request id (echoed from `x-request-id` or minted by the server)
    pub request_id: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_ui_body() {
        // Exact shape the frontend sends
        let body = r#"{"user_id":"demo","input":{"question":"What is momentum?"},"context":{}}"#;
        let req: InvokeRequest = serde_json::from_str(body).unwrap();

        assert_eq!(req.user_id, "demo");
        assert_eq!(req.input["question"], "What is momentum?");
        assert!(req.context.is_empty());
    }

    #[test]
    fn test_input_and_context_default_empty() {
        let req: InvokeRequest = serde_json::from_str(r#"{"user_id":"u1"}"#).unwrap();

        assert!(req.input.is_empty());
        assert!(req.context.is_empty());
    }

    #[test]
    fn test_response_round_trips_request_id() {
        let response = InvokeResponse {
            output: serde_json::json!({"answer": "mv"}),
            metrics: InvokeMetrics { latency_ms: 12 },
            version: "v1.0.0".into(),
            request_id: "req-1".into(),
        };

        let value = serde_json::to_value(&response).unwrap();
        assert_eq!(value["metrics"]["latency_ms"], 12);
        assert_eq!(value["request_id"], "req-1");
    }
}
