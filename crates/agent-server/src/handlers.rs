//! HTTP Handlers

use std::time::Instant;

use axum::{
    Extension, Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::json;

use agent_core::{AgentConfig, InvokeMetrics, InvokeRequest, InvokeResponse};

use crate::middleware::RequestId;
use crate::state::AppState;

// ============================================================================
// Response Types
// ============================================================================

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: String,
    pub name: String,
}

#[derive(Serialize)]
pub struct ReadyResponse {
    pub status: &'static str,
    pub version: String,
    pub problems: Vec<String>,
}

#[derive(Serialize)]
pub struct RootResponse {
    pub name: String,
    pub version: String,
    pub ui: &'static str,
    pub health: &'static str,
    pub ready: &'static str,
    pub invoke: &'static str,
    pub manifest: &'static str,
    pub ok: bool,
}

#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub request_id: String,
    pub detail: Option<String>,
}

// ============================================================================
// Handlers
// ============================================================================

/// Liveness: process is up
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: state.config.version.clone(),
        name: state.config.app_name.clone(),
    })
}

/// Readiness: check minimal dependencies. Tighten as needed.
pub async fn ready_check(State(state): State<AppState>) -> Json<ReadyResponse> {
    let problems = readiness_problems(
        &state.config,
        std::env::var("OPENAI_API_KEY").is_ok(),
    );

    Json(ReadyResponse {
        status: if problems.is_empty() { "ok" } else { "degraded" },
        version: state.config.version.clone(),
        problems,
    })
}

fn readiness_problems(config: &AgentConfig, has_openai_key: bool) -> Vec<String> {
    let mut problems = Vec::new();

    if config.require_openai && !has_openai_key {
        problems.push("OPENAI_API_KEY missing".into());
    }

    problems
}

/// Return the agent manifest if present (useful for hub debugging)
pub async fn manifest(State(state): State<AppState>) -> Response {
    match state.config.load_manifest() {
        Ok(value) => Json(value).into_response(),
        Err(e) if e.is_not_found() => Json(json!({
            "warning": "manifest not found",
            "path": state.config.manifest_path.display().to_string(),
        }))
        .into_response(),
        Err(e) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            format!("manifest read failed: {e}"),
        )
            .into_response(),
    }
}

/// Service index
pub async fn root_index(State(state): State<AppState>) -> Json<RootResponse> {
    Json(RootResponse {
        name: state.config.app_name.clone(),
        version: state.config.version.clone(),
        ui: "/ui",
        health: "/healthz",
        ready: "/readyz",
        invoke: "/invoke",
        manifest: "/manifest",
        ok: true,
    })
}

/// Main invoke endpoint
pub async fn invoke_handler(
    State(state): State<AppState>,
    Extension(request_id): Extension<RequestId>,
    Json(payload): Json<InvokeRequest>,
) -> Result<Json<InvokeResponse>, (StatusCode, Json<ErrorResponse>)> {
    let started = Instant::now();

    let output = state
        .agent
        .invoke(&payload.user_id, &payload.input, &payload.context)
        .await
        .map_err(|e| {
            tracing::error!("Invoke error [{}]: {}", request_id.0, e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: "internal_server_error".into(),
                    request_id: request_id.0.clone(),
                    detail: Some(e.to_string()),
                }),
            )
        })?;

    let latency_ms = u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX);

    Ok(Json(InvokeResponse {
        output,
        metrics: InvokeMetrics { latency_ms },
        version: state.config.version.clone(),
        request_id: request_id.0,
    }))
}

/// Fallback for `/ui` when the frontend build is missing
pub async fn ui_missing(State(state): State<AppState>) -> (StatusCode, String) {
    (
        StatusCode::NOT_FOUND,
        format!(
            "UI build not found at FRONTEND_DIR={}. \
             Build the frontend (e.g. `trunk build --release`) and point FRONTEND_DIR at the output.",
            state.config.frontend_dir.display()
        ),
    )
}
