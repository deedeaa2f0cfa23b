//! Service Configuration
//!
//! Environment-driven configuration for the agent service. Every field has
//! a default so the server boots with no environment at all.

use std::path::PathBuf;

use serde_json::Value;

use crate::error::Result;

/// Agent service configuration
#[derive(Clone, Debug)]
pub struct AgentConfig {
    /// Display name (`APP_NAME`)
    pub app_name: String,

    /// Version string reported by health and invoke responses (`AGENT_VERSION`)
    pub version: String,

    /// Directory holding the built WASM frontend (`FRONTEND_DIR`)
    pub frontend_dir: PathBuf,

    /// Comma-separated allowed CORS origins, or "*" (`CORS_ORIGINS`)
    pub cors_origins: String,

    /// Path to an optional agent manifest JSON (`MANIFEST_PATH`)
    pub manifest_path: PathBuf,

    /// Treat a missing `OPENAI_API_KEY` as a readiness problem (`REQUIRE_OPENAI`)
    pub require_openai: bool,

    /// Listen address (`BIND_ADDR`)
    pub bind_addr: String,
}

impl Default for AgentConfig {
    fn default() -> Self {
        Self {
            app_name: "TutorAgent".into(),
            version: "v1.0.0".into(),
            frontend_dir: "/srv/ui-dist".into(),
            cors_origins: "*".into(),
            manifest_path: "/srv/agent.manifest.json".into(),
            require_openai: false,
            bind_addr: "0.0.0.0:3000".into(),
        }
    }
}

impl AgentConfig {
    /// Build from environment variables, falling back to defaults
    pub fn from_env() -> Self {
        let defaults = Self::default();

        Self {
            app_name: env_or("APP_NAME", defaults.app_name),
            version: env_or("AGENT_VERSION", defaults.version),
            frontend_dir: env_or("FRONTEND_DIR", defaults.frontend_dir),
            cors_origins: env_or("CORS_ORIGINS", defaults.cors_origins),
            manifest_path: env_or("MANIFEST_PATH", defaults.manifest_path),
            require_openai: std::env::var("REQUIRE_OPENAI")
                .map(|v| truthy(&v))
                .unwrap_or(false),
            bind_addr: env_or("BIND_ADDR", defaults.bind_addr),
        }
    }

    /// Allowed CORS origins; `None` means any origin
    pub fn allowed_origins(&self) -> Option<Vec<String>> {
        if self.cors_origins.trim() == "*" {
            return None;
        }

        Some(
            self.cors_origins
                .split(',')
                .map(str::trim)
                .filter(|o| !o.is_empty())
                .map(String::from)
                .collect(),
        )
    }

    /// Read and parse the manifest file at `manifest_path`
    pub fn load_manifest(&self) -> Result<Value> {
        let raw = std::fs::read_to_string(&self.manifest_path)?;
        Ok(serde_json::from_str(&raw)?)
    }
}

fn env_or<T: From<String>>(key: &str, default: T) -> T {
    std::env::var(key).map(T::from).unwrap_or(default)
}

fn truthy(value: &str) -> bool {
    matches!(value.to_ascii_lowercase().as_str(), "1" | "true" | "yes")
}
