use std::sync::Arc;

use axum::{
    Json, Router,
    extract::State,
    response::Html,
    routing::{get, post},
};
use serde::{Deserialize, Serialize};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::warn;

use crate::{
    config::AppConfig,
    error::ServiceError,
    orchestrator::PromptOrchestrator,
    prompt::{Creativity, Mode},
};

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub orchestrator: Arc<PromptOrchestrator>,
}

#[derive(Debug, Deserialize)]
pub struct GenerateRequest {
    pub snippet: String,
    pub mode: Mode,
    pub creativity: Creativity,
}

#[derive(Debug, Serialize)]
pub struct GenerateResponse {
    pub text: String,
    pub model: String,
}

pub fn build_router(config: Arc<AppConfig>, orchestrator: Arc<PromptOrchestrator>) -> Router {
    let state = AppState {
        config,
        orchestrator,
    };

    Router::new()
        .route("/", get(index))
        .route("/health", get(health))
        .route("/api/generate", post(generate))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}

async fn index() -> Html<&'static str> {
    Html(include_str!("../assets/index.html"))
}

async fn health() -> &'static str {
    "ok"
}

async fn generate(
    State(state): State<AppState>,
    Json(request): Json<GenerateRequest>,
) -> Result<Json<GenerateResponse>, ServiceError> {
    let text = state
        .orchestrator
        .generate(&request.snippet, request.mode, request.creativity)
        .await
        .map_err(|err| {
            warn!(%err, "generation request failed");
            err
        })?;

    Ok(Json(GenerateResponse {
        text,
        model: state.config.model_id.clone(),
    }))
}
