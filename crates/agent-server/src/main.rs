//! tutor-agent HTTP Server
//!
//! Axum-based server exposing the tutor agent: `POST /invoke` plus
//! health/readiness/manifest endpoints and the static WASM UI under `/ui`.

mod handlers;
mod middleware;
mod state;

use std::sync::Arc;

use axum::{
    Router,
    http::HeaderValue,
    routing::{get, post},
};
use tower_http::{
    cors::{AllowOrigin, Any, CorsLayer},
    services::ServeDir,
    trace::TraceLayer,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use agent_core::{AgentConfig, TutorAgent};

use crate::handlers::{
    health_check, invoke_handler, manifest, ready_check, root_index, ui_missing,
};
use crate::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info,tower_http=debug".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load environment
    dotenvy::dotenv().ok();

    let config = Arc::new(AgentConfig::from_env());

    let state = AppState {
        agent: Arc::new(TutorAgent::new()),
        config: config.clone(),
    };

    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;

    tracing::info!("══════════════════════════════════════════════════");
    tracing::info!("🎓 {} {} running on http://{}", config.app_name, config.version, config.bind_addr);
    tracing::info!("══════════════════════════════════════════════════");
    tracing::info!("");
    tracing::info!("Endpoints:");
    tracing::info!("  GET  /healthz   - Liveness");
    tracing::info!("  GET  /readyz    - Readiness");
    tracing::info!("  GET  /manifest  - Agent manifest");
    tracing::info!("  POST /invoke    - Run the agent");
    tracing::info!("  GET  /ui        - Web frontend");
    tracing::info!("");

    axum::serve(listener, app).await?;

    Ok(())
}

/// Build the application router for the given state
fn build_router(state: AppState) -> Router {
    // CORS configuration ("*" or a comma-separated origin list)
    let cors = match state.config.allowed_origins() {
        None => CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any),
        Some(origins) => {
            let list: Vec<HeaderValue> =
                origins.iter().filter_map(|o| o.parse().ok()).collect();
            CorsLayer::new()
                .allow_origin(AllowOrigin::list(list))
                .allow_methods(Any)
                .allow_headers(Any)
        }
    };

    let router = Router::new()
        .route("/healthz", get(health_check))
        .route("/readyz", get(ready_check))
        .route("/manifest", get(manifest))
        .route("/invoke", post(invoke_handler))
        .route("/", get(root_index));

    // Static WASM frontend
    let router = if state.config.frontend_dir.is_dir() {
        tracing::info!("Serving UI from {} at /ui", state.config.frontend_dir.display());
        router.nest_service("/ui", ServeDir::new(&state.config.frontend_dir))
    } else {
        tracing::warn!(
            "FRONTEND_DIR not found: {} (build UI or set FRONTEND_DIR)",
            state.config.frontend_dir.display()
        );
        router.route("/ui", get(ui_missing))
    };

    router
        .layer(axum::middleware::from_fn(middleware::request_id_and_timing))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
