//! Application State

use std::sync::Arc;

use agent_core::{AgentConfig, AgentHandler};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Agent handler servicing `/invoke`
    pub agent: Arc<dyn AgentHandler>,

    /// Service configuration (resolved once at startup)
    pub config: Arc<AgentConfig>,
}
