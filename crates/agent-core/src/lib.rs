//! # agent-core
//!
//! Core types for the TutorAgent service.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                      agent-server                            │
//! │  ┌─────────────┐  ┌──────────────┐  ┌───────────────────┐   │
//! │  │   Invoke    │  │ AgentConfig  │  │   AgentHandler    │   │
//! │  │  contract   │──│  (from env)  │──│   (Strategy)      │   │
//! │  └─────────────┘  └──────────────┘  └───────────────────┘   │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! The `AgentHandler` trait is the seam between the HTTP surface and the
//! agent logic, so the canned `TutorAgent` can later be swapped for an
//! LLM-backed implementation without changing the server.

pub mod config;
pub mod error;
pub mod handler;
pub mod invoke;
pub mod tutor;

pub use config::AgentConfig;
pub use error::{AgentError, Result};
pub use handler::AgentHandler;
pub use invoke::{InvokeMetrics, InvokeRequest, InvokeResponse, JsonMap};
pub use tutor::TutorAgent;
