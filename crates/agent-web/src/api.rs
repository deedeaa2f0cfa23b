//! API Client

use serde_json::{Value, json};

/// Caller identity sent with every invocation
const USER_ID: &str = "demo";

/// Wire body for `POST /invoke`
pub fn invoke_body(query: &str) -> Value {
    json!({
        "user_id": USER_ID,
        "input": { "question": query },
        "context": {},
    })
}

/// Run one invocation against the agent.
///
/// A non-success status surfaces the whole response body as the error
/// message. A success body that fails to parse as JSON takes the same
/// error path.
pub async fn invoke(query: &str) -> Result<Value, String> {
    let client = reqwest::Client::new();

    let response = client
        .post("/invoke")
        .json(&invoke_body(query))
        .send()
        .await
        .map_err(|e| e.to_string())?;

    if response.status().is_success() {
        response.json::<Value>().await.map_err(|e| e.to_string())
    } else {
        Err(response.text().await.unwrap_or_else(|e| e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invoke_body_shape() {
        let body = invoke_body("What is momentum?");

        assert_eq!(
            body,
            json!({
                "user_id": "demo",
                "input": { "question": "What is momentum?" },
                "context": {},
            })
        );
    }

    #[test]
    fn test_invoke_body_wraps_query_verbatim() {
        let body = invoke_body("");
        assert_eq!(body["input"]["question"], "");
        assert_eq!(body["user_id"], "demo");
    }
}
