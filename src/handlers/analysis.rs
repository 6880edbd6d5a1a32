//! Analysis handlers

use axum::extract::{Query, State};
use serde::{Deserialize, Serialize};

use crate::reports::generator::{AgeDistribution, AnalysisReport, AnomalyCount, GenderDistribution};
use crate::response::ApiResponse;
use crate::{AppResult, AppState};

const DEFAULT_PER_PAGE: usize = 50;
const MAX_PER_PAGE: usize = 500;

#[derive(Debug, Deserialize)]
pub struct AnomalyQuery {
    /// Accepted for API compatibility; the generated list is not per state.
    pub state: Option<String>,
    #[serde(rename = "type")]
    pub anomaly_type: Option<String>,
    pub page: Option<String>,
    pub per_page: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct AnomalyPage {
    pub anomalies: Vec<AnomalyCount>,
    pub total: usize,
    pub page: usize,
    pub per_page: usize,
    pub total_pages: usize,
}

#[derive(Debug, Serialize)]
pub struct Distributions {
    pub age_distribution: AgeDistribution,
    pub gender_distribution: GenderDistribution,
}

/// Unparseable values fall back to the defaults.
fn page_bounds(page: Option<&str>, per_page: Option<&str>) -> (usize, usize) {
    let page = page
        .and_then(|p| p.trim().parse::<usize>().ok())
        .unwrap_or(1)
        .max(1);
    let per_page = per_page
        .and_then(|p| p.trim().parse::<usize>().ok())
        .unwrap_or(DEFAULT_PER_PAGE)
        .clamp(1, MAX_PER_PAGE);
    (page, per_page)
}

fn paginate(items: Vec<AnomalyCount>, page: usize, per_page: usize) -> AnomalyPage {
    let total = items.len();
    let start = (page - 1).saturating_mul(per_page);

    AnomalyPage {
        anomalies: items.into_iter().skip(start).take(per_page).collect(),
        total,
        page,
        per_page,
        total_pages: total.div_ceil(per_page),
    }
}

/// Full analysis report
pub async fn report(State(state): State<AppState>) -> AppResult<ApiResponse<AnalysisReport>> {
    let report = state.reports.analysis_report(&mut rand::thread_rng());
    Ok(ApiResponse::ok(report))
}

/// Anomaly frequencies, filtered by type and paginated
pub async fn anomalies(
    State(state): State<AppState>,
    Query(query): Query<AnomalyQuery>,
) -> AppResult<ApiResponse<AnomalyPage>> {
    if let Some(region) = query.state.as_deref() {
        tracing::debug!(region, "Generated anomaly list is not broken down by state");
    }

    let report = state.reports.analysis_report(&mut rand::thread_rng());

    let anomalies: Vec<AnomalyCount> = match query.anomaly_type.as_deref().filter(|t| !t.is_empty()) {
        Some(wanted) => report
            .anomaly_frequency
            .into_iter()
            .filter(|a| a.anomaly_type == wanted)
            .collect(),
        None => report.anomaly_frequency,
    };

    let (page, per_page) = page_bounds(query.page.as_deref(), query.per_page.as_deref());
    Ok(ApiResponse::ok(paginate(anomalies, page, per_page)))
}

/// Age and gender distributions for charts
pub async fn distributions(State(state): State<AppState>) -> AppResult<ApiResponse<Distributions>> {
    let report = state.reports.analysis_report(&mut rand::thread_rng());

    Ok(ApiResponse::ok(Distributions {
        age_distribution: report.age_distribution,
        gender_distribution: report.gender_distribution,
    }))
}
