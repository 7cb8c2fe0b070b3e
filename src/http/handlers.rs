//! Route handlers for tasks and audit logs.

use super::dto::{
    AuditLogPageResponse, ListLogsQuery, ListTasksQuery, MessageResponse, TaskPageResponse,
    TaskPayload, TaskResponse,
};
use super::{ApiError, AppState};
use crate::pagination::PageNumber;
use crate::task::domain::{SearchTerm, TaskId};
use crate::task::services::{CreateTaskRequest, ListTasksRequest, UpdateTaskRequest};
use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;

type ApiResult<T> = Result<T, ApiError>;

pub(crate) async fn list_tasks(
    State(state): State<AppState>,
    Query(query): Query<ListTasksQuery>,
) -> ApiResult<Json<TaskPageResponse>> {
    let request = ListTasksRequest::new(PageNumber::parse_lenient(query.page.as_deref()))
        .with_search(SearchTerm::parse(query.search.as_deref()));
    let page = state.tasks().list(request).await?;
    Ok(Json(TaskPageResponse::from(page)))
}

pub(crate) async fn create_task(
    State(state): State<AppState>,
    payload: Result<Json<TaskPayload>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<TaskResponse>)> {
    let Json(body) = payload.map_err(|rejection| ApiError::invalid_body(&rejection))?;
    let task = state
        .mutations()
        .create(CreateTaskRequest::from_parts(body.title, body.description))
        .await
        .map_err(|err| ApiError::from_mutation(err, "Failed to create task."))?;
    Ok((StatusCode::CREATED, Json(TaskResponse::from(&task))))
}

pub(crate) async fn update_task(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
    payload: Result<Json<TaskPayload>, JsonRejection>,
) -> ApiResult<Json<TaskResponse>> {
    let id = parse_task_id(&raw_id)?;
    let Json(body) = payload.map_err(|rejection| ApiError::invalid_body(&rejection))?;
    let task = state
        .mutations()
        .update(id, UpdateTaskRequest::from_parts(body.title, body.description))
        .await
        .map_err(|err| ApiError::from_mutation(err, "Failed to update task."))?;
    Ok(Json(TaskResponse::from(&task)))
}

pub(crate) async fn delete_task(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> ApiResult<Json<MessageResponse>> {
    let id = parse_task_id(&raw_id)?;
    state
        .mutations()
        .delete(id)
        .await
        .map_err(|err| ApiError::from_mutation(err, "Failed to delete task."))?;
    Ok(Json(MessageResponse::new("Task deleted successfully")))
}

pub(crate) async fn list_audit_logs(
    State(state): State<AppState>,
    Query(query): Query<ListLogsQuery>,
) -> ApiResult<Json<AuditLogPageResponse>> {
    let page = state
        .audit_logs()
        .list(PageNumber::parse_lenient(query.page.as_deref()))
        .await?;
    Ok(Json(AuditLogPageResponse::from(page)))
}

/// An identifier that cannot name a task is answered like a missing task.
fn parse_task_id(raw: &str) -> ApiResult<TaskId> {
    raw.parse::<TaskId>().map_err(|_| ApiError::NotFound)
}
