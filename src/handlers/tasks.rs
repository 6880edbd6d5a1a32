//! Remediation task handlers

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use serde::Serialize;
use validator::Validate;

use crate::models::{CreateTask, Task, TaskFilter, TaskStats, UpdateTask};
use crate::response::{ApiJson, ApiResponse};
use crate::store::{self, TaskSource};
use crate::{AppError, AppResult, AppState};

#[derive(Debug, Serialize)]
pub struct TaskList {
    pub tasks: Vec<Task>,
    pub total: usize,
    pub source: TaskSource,
}

fn task_not_found() -> AppError {
    AppError::NotFound("Task not found".to_string())
}

/// Non-numeric ids cannot name a task.
fn parse_id(raw: &str) -> AppResult<i64> {
    raw.parse().map_err(|_| task_not_found())
}

/// List tasks, falling back to the sample dataset
pub async fn list(
    State(state): State<AppState>,
    Query(filter): Query<TaskFilter>,
) -> AppResult<ApiResponse<TaskList>> {
    let filter = filter.normalized();
    let listing = store::list_tasks(state.tasks.as_ref(), &filter).await?;

    Ok(ApiResponse::ok(TaskList {
        total: listing.tasks.len(),
        tasks: listing.tasks,
        source: listing.source,
    }))
}

/// Create a task
pub async fn create(
    State(state): State<AppState>,
    ApiJson(req): ApiJson<CreateTask>,
) -> AppResult<(StatusCode, ApiResponse<Task>)> {
    req.validate()?;
    let new_task = req
        .into_new_task()
        .ok_or_else(|| AppError::ValidationError("Title is required".to_string()))?;

    let task = state.tasks.create(new_task).await?;
    tracing::info!(task_id = task.id, "Task created");

    Ok((StatusCode::CREATED, ApiResponse::ok(task)))
}

/// Partially update a task
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    ApiJson(req): ApiJson<UpdateTask>,
) -> AppResult<ApiResponse<Task>> {
    let id = parse_id(&id)?;
    if req.is_empty() {
        return Err(AppError::ValidationError("Request body is required".to_string()));
    }
    req.validate()?;

    let task = state.tasks.update(id, req).await?;
    Ok(ApiResponse::ok(task))
}

/// Delete a task
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<ApiResponse<()>> {
    let id = parse_id(&id)?;
    state.tasks.delete(id).await?;
    tracing::info!(task_id = id, "Task deleted");

    Ok(ApiResponse::message("Task deleted successfully"))
}

/// Counts by status and priority
pub async fn stats(State(state): State<AppState>) -> AppResult<ApiResponse<TaskStats>> {
    let listing = store::list_tasks(state.tasks.as_ref(), &TaskFilter::default()).await?;
    Ok(ApiResponse::ok(TaskStats::from_tasks(&listing.tasks)))
}
