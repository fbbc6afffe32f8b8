//! Task endpoints.

use std::sync::Arc;

use axum::body::Bytes;
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::Json;
use scheduler_core::dates::parse_date;
use scheduler_core::error::CoreError;
use scheduler_core::models::{parse_task_id, CompletionResult, Task, TaskDraft};
use scheduler_core::normalizer::normalize;
use scheduler_core::recurrence;
use scheduler_core::repository::DEFAULT_LIST_LIMIT;

use super::error::{status_for, ApiError};
use super::routes::AppState;
use super::types::{EmptyResponse, IdParams, NextDateParams, TaskIdResponse, TasksResponse};

/// `GET /api/nextdate` — plain-text next occurrence.
///
/// An empty `now` means today.
pub async fn next_date(
    State(state): State<Arc<AppState>>,
    Query(params): Query<NextDateParams>,
) -> Result<String, (StatusCode, String)> {
    let into_plain = |err: CoreError| (status_for(&err), err.to_string());

    let now = if params.now.is_empty() {
        state.clock.today()
    } else {
        parse_date(&params.now).map_err(into_plain)?
    };
    recurrence::next_date(now, &params.date, &params.repeat).map_err(into_plain)
}

/// `POST /api/task`
pub async fn create_task(
    State(state): State<Arc<AppState>>,
    body: Bytes,
) -> Result<Json<TaskIdResponse>, ApiError> {
    let draft = decode_draft(&body)?;
    let data = normalize(draft, state.clock.today())?;
    let id = state.repo.add_task(data).await?;
    tracing::info!(id, "task created");
    Ok(Json(TaskIdResponse { id }))
}

/// `GET /api/task?id=`
pub async fn get_task(
    State(state): State<Arc<AppState>>,
    Query(params): Query<IdParams>,
) -> Result<Json<Task>, ApiError> {
    let id = parse_task_id(&params.id)?;
    let task = state
        .repo
        .find_task_by_id(id)
        .await?
        .ok_or_else(|| CoreError::NotFound(params.id.clone()))?;
    Ok(Json(task))
}

/// `PUT /api/task`
pub async fn update_task(
    State(state): State<Arc<AppState>>,
    body: Bytes,
) -> Result<Json<EmptyResponse>, ApiError> {
    let draft = decode_draft(&body)?;
    let id_text = draft.id.clone();
    let data = normalize(draft, state.clock.today())?;
    let id = parse_task_id(&id_text)?;
    state.repo.update_task(id, data).await?;
    tracing::info!(id, "task updated");
    Ok(Json(EmptyResponse::default()))
}

/// `DELETE /api/task?id=`
pub async fn delete_task(
    State(state): State<Arc<AppState>>,
    Query(params): Query<IdParams>,
) -> Result<Json<EmptyResponse>, ApiError> {
    let id = parse_task_id(&params.id)?;
    state.repo.delete_task(id).await?;
    tracing::info!(id, "task deleted");
    Ok(Json(EmptyResponse::default()))
}

/// `GET /api/tasks`
pub async fn list_tasks(State(state): State<Arc<AppState>>) -> Result<Json<TasksResponse>, ApiError> {
    let tasks = state.repo.find_tasks(DEFAULT_LIST_LIMIT).await?;
    Ok(Json(TasksResponse { tasks }))
}

/// `POST /api/task/done?id=`
pub async fn complete_task(
    State(state): State<Arc<AppState>>,
    Query(params): Query<IdParams>,
) -> Result<Json<EmptyResponse>, ApiError> {
    let id = parse_task_id(&params.id)?;
    match state.repo.complete_task(id, state.clock.today()).await? {
        CompletionResult::Deleted(_) => tracing::info!(id, "task done"),
        CompletionResult::Rescheduled(task) => {
            tracing::info!(id, next = %task.date, "task done, rescheduled")
        }
    }
    Ok(Json(EmptyResponse::default()))
}

// Decoded by hand: any Content-Type is accepted and malformed JSON must
// still produce an `{"error": ...}` body.
fn decode_draft(body: &[u8]) -> Result<TaskDraft, CoreError> {
    serde_json::from_slice(body).map_err(|e| CoreError::InvalidPayload(e.to_string()))
}
