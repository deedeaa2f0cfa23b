//! Agent Handler Strategy Pattern
//!
//! Defines the interface between the HTTP surface and the agent logic,
//! allowing the server to run any handler implementation without code
//! changes.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use agent_core::{AgentHandler, TutorAgent};
//!
//! let agent: Arc<dyn AgentHandler> = Arc::new(TutorAgent::new());
//! let output = agent.invoke("demo", &input, &context).await?;
//! ```

use async_trait::async_trait;
use serde_json::Value;

use crate::error::Result;
use crate::invoke::JsonMap;

/// An agent that can service one invocation
#[async_trait]
pub trait AgentHandler: Send + Sync {
    /// Human-readable handler name, used in logs
    fn name(&self) -> &str;

    /// Run the agent once. Keep I/O stable: input object in, output object out.
    async fn invoke(&self, user_id: &str, input: &JsonMap, context: &JsonMap) -> Result<Value>;
}
