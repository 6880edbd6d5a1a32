//! Anomaly Dashboard Backend Server

use anyhow::Context;
use std::net::SocketAddr;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use anomaly_dashboard::config::{Config, LogFormat};
use anomaly_dashboard::scoring::RiskScorer;
use anomaly_dashboard::store::{MemoryTaskStore, PgTaskStore, TaskStore};
use anomaly_dashboard::{create_router, db, AppState};

fn init_logging(config: &Config) {
    let default_filter = if config.is_production() {
        "anomaly_dashboard=info,tower_http=info"
    } else {
        "anomaly_dashboard=debug,tower_http=debug"
    };
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| default_filter.into());

    let registry = tracing_subscriber::registry().with(filter);
    match config.log_format {
        LogFormat::Json => registry.with(tracing_subscriber::fmt::layer().json()).init(),
        LogFormat::Text => registry.with(tracing_subscriber::fmt::layer()).init(),
    }
}

async fn build_task_store(config: &Config) -> anyhow::Result<Arc<dyn TaskStore>> {
    let Some(database_url) = config.database_url.as_deref() else {
        tracing::warn!("DATABASE_URL not set; tasks are kept in memory");
        return Ok(Arc::new(MemoryTaskStore::new()));
    };

    tracing::info!("Database: {}", database_url.split('@').last().unwrap_or("***"));

    let pool = db::create_pool(database_url, config.db_max_connections)
        .context("invalid DATABASE_URL")?;

    let store = PgTaskStore::new(pool);

    // Reads fall back to sample data while the database is down; the schema
    // is applied again on the first query once it is back
    tracing::info!("Running database migrations...");
    if let Err(e) = store.ensure_schema().await {
        tracing::warn!(error = %e, "Database unreachable at startup; continuing with fallback reads");
    }

    Ok(Arc::new(store))
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration
    dotenvy::dotenv().ok();
    let config = Config::from_env();

    init_logging(&config);
    tracing::info!(environment = %config.environment, "Anomaly Dashboard starting...");

    let tasks = build_task_store(&config).await?;
    let scorer = RiskScorer::from_model_path(config.model_path.as_deref());

    let app = create_router(AppState::new(tasks, scorer));

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!("Server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;
    axum::serve(listener, app).await.context("server error")?;

    Ok(())
}
