//! Anomaly Dashboard Backend
//!
//! Serves the data-quality anomaly dashboard: a rule-based risk scorer,
//! a remediation task list, and generated analytics.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                    ANOMALY DASHBOARD                        │
//! ├─────────────────────────────────────────────────────────────┤
//! │  ┌───────────┐  ┌─────────────┐  ┌───────────────────────┐  │
//! │  │  API      │  │ RiskScorer  │  │  ReportGenerator      │  │
//! │  │  (Axum)   │─▶│ (pure)      │  │  (generated payloads) │  │
//! │  └─────┬─────┘  └─────────────┘  └───────────────────────┘  │
//! │        ▼                                                    │
//! │  ┌───────────┐    empty / unreachable   ┌───────────────┐   │
//! │  │ TaskStore │ ───────────────────────▶ │ Sample tasks  │   │
//! │  └─────┬─────┘                          └───────────────┘   │
//! │        ▼                                                    │
//! │  PostgreSQL or in-memory                                    │
//! └─────────────────────────────────────────────────────────────┘
//! ```

pub mod config;
pub mod db;
pub mod error;
pub mod handlers;
pub mod models;
pub mod reports;
pub mod response;
pub mod scoring;
pub mod store;

use axum::{
    routing::{get, patch, post},
    Router,
};
use std::sync::Arc;
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

pub use error::{AppError, AppResult};

use reports::ReportGenerator;
use scoring::RiskScorer;
use store::TaskStore;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub tasks: Arc<dyn TaskStore>,
    pub scorer: Arc<RiskScorer>,
    pub reports: ReportGenerator,
}

impl AppState {
    pub fn new(tasks: Arc<dyn TaskStore>, scorer: RiskScorer) -> Self {
        Self {
            tasks,
            scorer: Arc::new(scorer),
            reports: ReportGenerator::new(),
        }
    }
}

/// Create the main router with all routes
pub fn create_router(state: AppState) -> Router {
    let dashboard_routes = Router::new()
        .route("/api/dashboard/summary", get(handlers::dashboard::summary))
        .route("/api/dashboard/states", get(handlers::dashboard::all_states))
        .route("/api/dashboard/state", get(handlers::dashboard::state_detail))
        .route("/api/dashboard/state/districts", get(handlers::dashboard::state_districts));

    let analysis_routes = Router::new()
        .route("/analysis/api/report", get(handlers::analysis::report))
        .route("/analysis/api/anomalies", get(handlers::analysis::anomalies))
        .route("/analysis/api/distributions", get(handlers::analysis::distributions));

    let prediction_routes = Router::new()
        .route("/prediction/api/predict", post(handlers::prediction::predict))
        .route("/prediction/api/states", get(handlers::prediction::states));

    let policy_routes = Router::new()
        .route("/policies/api/recommendations", get(handlers::policies::recommendations))
        .route("/policies/api/policy/:id", get(handlers::policies::get));

    let task_routes = Router::new()
        .route("/todo/api/tasks", get(handlers::tasks::list).post(handlers::tasks::create))
        .route("/todo/api/tasks/stats", get(handlers::tasks::stats))
        .route(
            "/todo/api/tasks/:id",
            patch(handlers::tasks::update).delete(handlers::tasks::delete),
        );

    Router::new()
        .route("/health", get(handlers::health::check))
        .merge(dashboard_routes)
        .merge(analysis_routes)
        .merge(prediction_routes)
        .merge(policy_routes)
        .merge(task_routes)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any)
        )
        .with_state(state)
}
