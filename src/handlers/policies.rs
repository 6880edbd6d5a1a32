//! Policies handlers

use axum::extract::{Path, Query, State};
use serde::{Deserialize, Serialize};

use crate::reports::PolicyRecommendation;
use crate::response::ApiResponse;
use crate::{AppError, AppResult, AppState};

#[derive(Debug, Deserialize)]
pub struct RecommendationQuery {
    pub severity: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct RecommendationList {
    pub recommendations: Vec<PolicyRecommendation>,
    pub total: usize,
}

/// Recommendations, most severe first
pub async fn recommendations(
    State(state): State<AppState>,
    Query(query): Query<RecommendationQuery>,
) -> AppResult<ApiResponse<RecommendationList>> {
    let mut recommendations = state.reports.policy_recommendations();

    if let Some(severity) = query.severity.as_deref().filter(|s| !s.is_empty()) {
        recommendations.retain(|r| r.severity.as_str() == severity);
    }
    recommendations.sort_by_key(|r| r.severity);

    Ok(ApiResponse::ok(RecommendationList {
        total: recommendations.len(),
        recommendations,
    }))
}

/// Get single recommendation
pub async fn get(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<ApiResponse<PolicyRecommendation>> {
    let not_found = || AppError::NotFound("Policy not found".to_string());
    let id: u32 = id.parse().map_err(|_| not_found())?;

    let policy = state
        .reports
        .policy_recommendations()
        .into_iter()
        .find(|r| r.id == id)
        .ok_or_else(not_found)?;

    Ok(ApiResponse::ok(policy))
}
