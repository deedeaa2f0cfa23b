//! Tutor Agent
//!
//! Canned physics-tutor handler. Stands in for LLM calls/tools while
//! keeping the invoke contract stable.

use async_trait::async_trait;
use serde_json::{json, Value};

use crate::error::Result;
use crate::handler::AgentHandler;
use crate::invoke::JsonMap;

/// Question used when the caller's input carries none
pub const DEFAULT_QUESTION: &str = "What is Newton's second law?";

/// Fixed reasoning outline returned with every answer
const NEXT_STEPS: [&str; 4] = [
    "Identify known quantities",
    "Recall F = m * a",
    "Solve for the unknown",
    "Check units and reasonability",
];

/// Physics tutor handler
#[derive(Clone, Debug, Default)]
pub struct TutorAgent;

impl TutorAgent {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl AgentHandler for TutorAgent {
    fn name(&self) -> &str {
        "tutor"
    }

    async fn invoke(&self, user_id: &str, input: &JsonMap, _context: &JsonMap) -> Result<Value> {
        let question = input
            .get("question")
            .and_then(Value::as_str)
            .unwrap_or(DEFAULT_QUESTION);

        tracing::debug!(user_id, question, "running tutor agent");

        Ok(json!({
            "message": format!("Hello {user_id}! Let's reason together."),
            "answer": format!("Prompt: {question}"),
            "next_steps": NEXT_STEPS,
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input_with_question(question: &str) -> JsonMap {
        let mut input = JsonMap::new();
        input.insert("question".into(), Value::String(question.into()));
        input
    }

    #[tokio::test]
    async fn test_answer_echoes_question() {
        let agent = TutorAgent::new();
        let input = input_with_question("What is momentum?");

        let out = agent.invoke("demo", &input, &JsonMap::new()).await.unwrap();

        assert_eq!(out["answer"], "Prompt: What is momentum?");
        assert_eq!(out["message"], "Hello demo! Let's reason together.");
    }

    #[tokio::test]
    async fn test_missing_question_falls_back_to_default() {
        let agent = TutorAgent::new();

        let out = agent
            .invoke("demo", &JsonMap::new(), &JsonMap::new())
            .await
            .unwrap();

        assert_eq!(out["answer"], format!("Prompt: {DEFAULT_QUESTION}"));
    }

    #[tokio::test]
    async fn test_next_steps_outline_is_stable() {
        let agent = TutorAgent::new();

        let out = agent
            .invoke("demo", &JsonMap::new(), &JsonMap::new())
            .await
            .unwrap();

        let steps = out["next_steps"].as_array().unwrap();
        assert_eq!(steps.len(), 4);
        assert_eq!(steps[1], "Recall F = m * a");
    }

    #[tokio::test]
    async fn test_non_string_question_uses_default() {
        let agent = TutorAgent::new();
        let mut input = JsonMap::new();
        input.insert("question".into(), json!(42));

        let out = agent.invoke("demo", &input, &JsonMap::new()).await.unwrap();

        assert_eq!(out["answer"], format!("Prompt: {DEFAULT_QUESTION}"));
    }
}
