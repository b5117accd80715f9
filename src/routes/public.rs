use std::sync::Arc;

use axum::{Json, Router, extract::State, routing::get};
use serde::Serialize;

use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct BannerResponse {
    pub message: String,
    pub version: String,
    pub docs: &'static str,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub service: String,
}

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(banner))
        .route("/health", get(health))
        .with_state(state)
}

async fn banner(State(state): State<Arc<AppState>>) -> Json<BannerResponse> {
    let general = &state.config.general;
    Json(BannerResponse {
        message: format!("Welcome to {}", general.app_name),
        version: general.app_version.clone(),
        docs: "/docs",
    })
}

// Liveness only; the database is not probed.
async fn health(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        service: state.config.general.app_name.clone(),
    })
}
