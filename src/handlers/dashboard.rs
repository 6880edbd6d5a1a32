//! Dashboard handlers

use axum::extract::{Query, State};
use serde::{Deserialize, Serialize};

use crate::reports::generator::{DashboardSummary, DistrictCount, StateDetail, StateOverview};
use crate::response::ApiResponse;
use crate::{AppError, AppResult, AppState};

#[derive(Debug, Deserialize)]
pub struct StateQuery {
    pub state: Option<String>,
}

impl StateQuery {
    fn required_state(self) -> AppResult<String> {
        self.state
            .filter(|s| !s.is_empty())
            .ok_or_else(|| AppError::ValidationError("State parameter is required".to_string()))
    }
}

#[derive(Debug, Serialize)]
pub struct StateDistricts {
    pub state: String,
    pub districts: Vec<DistrictCount>,
}

/// Dashboard summary statistics
pub async fn summary(State(state): State<AppState>) -> AppResult<ApiResponse<DashboardSummary>> {
    let summary = state.reports.dashboard_summary(&mut rand::thread_rng());
    Ok(ApiResponse::ok(summary))
}

/// Per-state overview for map coloring
pub async fn all_states(State(state): State<AppState>) -> AppResult<ApiResponse<Vec<StateOverview>>> {
    let states = state.reports.all_states(&mut rand::thread_rng());
    Ok(ApiResponse::ok(states))
}

/// Detail for one state
pub async fn state_detail(
    State(state): State<AppState>,
    Query(query): Query<StateQuery>,
) -> AppResult<ApiResponse<StateDetail>> {
    let name = query.required_state()?;
    let detail = state.reports.state_detail(&mut rand::thread_rng(), &name);
    Ok(ApiResponse::ok(detail))
}

/// District breakdown for one state
pub async fn state_districts(
    State(state): State<AppState>,
    Query(query): Query<StateQuery>,
) -> AppResult<ApiResponse<StateDistricts>> {
    let name = query.required_state()?;
    let detail = state.reports.state_detail(&mut rand::thread_rng(), &name);

    Ok(ApiResponse::ok(StateDistricts {
        state: name,
        districts: detail.district_distribution,
    }))
}
