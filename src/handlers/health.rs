//! Health check handler

use axum::{extract::State, Json};
use serde::Serialize;

use crate::scoring::ModelType;
use crate::AppState;

#[derive(Serialize)]
pub struct HealthResponse {
    status: &'static str,
    version: &'static str,
    model_type: ModelType,
    timestamp: i64,
}

pub async fn check(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        version: env!("CARGO_PKG_VERSION"),
        model_type: state.scorer.model_type(),
        timestamp: chrono::Utc::now().timestamp(),
    })
}
