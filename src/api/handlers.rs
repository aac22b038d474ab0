//! Request handlers for the inspection tracker API.

use super::{
    ApiError, ApiResponse, AppState,
    payload::{CreateTaskBody, ListTasksQuery, SendEmailBody, UpdateTaskBody},
};
use crate::inspection::{
    domain::{InspectionStatus, InspectionTask, InspectionTaskFilter, InspectionTaskId},
    services::UpdateInspectionTaskRequest,
};
use crate::property::domain::PropertyAddress;
use axum::{
    Json,
    extract::{
        Path, Query, State,
        rejection::{JsonRejection, QueryRejection},
    },
};
use serde::Serialize;

type ApiResult<T> = Result<ApiResponse<T>, ApiError>;

/// Result of the store round-trip check.
#[derive(Debug, Clone, Serialize)]
pub struct HealthReport {
    /// Always `"ok"` when returned.
    pub status: &'static str,
    /// Number of registered property addresses.
    pub properties: usize,
}

pub(super) async fn health(State(state): State<AppState>) -> ApiResult<HealthReport> {
    let addresses = state.registry.list_addresses().await?;
    Ok(ApiResponse::ok(HealthReport {
        status: "ok",
        properties: addresses.len(),
    }))
}

pub(super) async fn list_properties(
    State(state): State<AppState>,
) -> ApiResult<Vec<PropertyAddress>> {
    Ok(ApiResponse::ok(state.registry.list_addresses().await?))
}

pub(super) async fn list_tasks(
    State(state): State<AppState>,
    query: Result<Query<ListTasksQuery>, QueryRejection>,
) -> ApiResult<Vec<InspectionTask>> {
    let Query(query) = query?;
    let filter = query
        .filter
        .as_deref()
        .map(InspectionTaskFilter::try_from)
        .transpose()
        .map_err(|err| ApiError::bad_request(err.to_string()))?
        .unwrap_or_default();
    Ok(ApiResponse::ok(state.tasks.list(filter).await?))
}

pub(super) async fn list_completed_tasks(
    State(state): State<AppState>,
) -> ApiResult<Vec<InspectionTask>> {
    Ok(ApiResponse::ok(
        state.tasks.list(InspectionTaskFilter::Completed).await?,
    ))
}

pub(super) async fn create_task(
    State(state): State<AppState>,
    body: Result<Json<CreateTaskBody>, JsonRejection>,
) -> ApiResult<InspectionTask> {
    let Json(body) = body?;
    Ok(ApiResponse::ok(state.tasks.create(body.into()).await?))
}

pub(super) async fn get_task(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> ApiResult<InspectionTask> {
    let id = parse_task_id(&raw_id)?;
    Ok(ApiResponse::ok(state.tasks.get(id).await?))
}

pub(super) async fn update_task(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
    body: Result<Json<UpdateTaskBody>, JsonRejection>,
) -> ApiResult<InspectionTask> {
    let id = parse_task_id(&raw_id)?;
    let Json(changes) = body?;
    Ok(ApiResponse::ok(state.tasks.update(id, changes.into()).await?))
}

pub(super) async fn delete_task(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> ApiResult<()> {
    let id = parse_task_id(&raw_id)?;
    state.tasks.delete(id).await?;
    Ok(ApiResponse::empty())
}

pub(super) async fn advance_task(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> ApiResult<InspectionTask> {
    let id = parse_task_id(&raw_id)?;
    Ok(ApiResponse::ok(state.tasks.advance_status(id).await?))
}

/// Sends the inspection notice for a task.
///
/// The task is moved to [`InspectionStatus::EmailSent`] only when the caller
/// sets `markAsSent` and delivery succeeded; the updated task is returned in
/// that case. If that status write fails, the 500 error says the notice was
/// already delivered.
pub(super) async fn send_email(
    State(state): State<AppState>,
    body: Result<Json<SendEmailBody>, JsonRejection>,
) -> ApiResult<InspectionTask> {
    let Json(request) = body?;
    let raw_id = request
        .task_id
        .as_deref()
        .map(str::trim)
        .filter(|raw| !raw.is_empty())
        .ok_or_else(|| ApiError::bad_request("required field missing: taskId"))?;
    let id = parse_task_id(raw_id)?;

    let task = state.tasks.get(id).await?;
    state.notifier.send(&task).await?;

    if !request.mark_as_sent {
        return Ok(ApiResponse::empty());
    }
    let updated = state
        .tasks
        .update(
            id,
            UpdateInspectionTaskRequest::new().with_status(InspectionStatus::EmailSent.as_str()),
        )
        .await
        .map_err(|err| {
            tracing::error!(
                task_id = %id,
                error = %err,
                "notice delivered but task not marked as sent"
            );
            ApiError::internal(format!(
                "notice delivered but task {id} was not marked as sent: {err}"
            ))
        })?;
    Ok(ApiResponse::ok(updated))
}

fn parse_task_id(raw: &str) -> Result<InspectionTaskId, ApiError> {
    InspectionTaskId::parse(raw)
        .map_err(|_| ApiError::not_found(format!("inspection task not found: {raw}")))
}
