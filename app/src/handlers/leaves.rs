use std::sync::Arc;

use axum::{extract::State, http::StatusCode};
use tracing::info;

use crate::{
    core::state::AppState,
    models::leave::{LeaveChanges, Model as Leave, NewLeave, STATUS_APPROVED, STATUS_REJECTED},
    repos::leaves::LeavesRepo,
    utils::{
        contract::ResourceContract,
        extract::{Json, Path},
        response::{APIError, APIResponse},
    },
};

pub const LEAVE_CONTRACT: ResourceContract = ResourceContract::standard("Leave");

pub async fn list_leaves(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<Leave>>, APIError> {
    let repo = LeavesRepo::new(state.database.clone());

    Ok(Json(repo.list().await?))
}

pub async fn get_leave(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i32>,
) -> Result<Json<Leave>, APIError> {
    let repo = LeavesRepo::new(state.database.clone());

    LEAVE_CONTRACT.found(repo.get(id).await?)
}

pub async fn create_leave(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<NewLeave>,
) -> Result<(StatusCode, Json<Leave>), APIError> {
    let repo = LeavesRepo::new(state.database.clone());
    let leave = repo.create(payload).await?;

    info!(
        "Employee {} applied for {} leave {}",
        leave.employee_id, leave.leave_type, leave.id
    );
    Ok((StatusCode::CREATED, Json(leave)))
}

pub async fn update_leave(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i32>,
    Json(payload): Json<LeaveChanges>,
) -> Result<Json<Option<Leave>>, APIError> {
    let repo = LeavesRepo::new(state.database.clone());

    LEAVE_CONTRACT.updated(repo.update(id, payload).await)
}

pub async fn delete_leave(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i32>,
) -> Result<APIResponse, APIError> {
    let repo = LeavesRepo::new(state.database.clone());

    LEAVE_CONTRACT.deleted(repo.delete(id).await?)
}

// Workflow endpoints: no existence check and no guard on the current status.

pub async fn approve_leave(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i32>,
) -> Result<APIResponse, APIError> {
    let repo = LeavesRepo::new(state.database.clone());
    let affected = repo.set_status(id, STATUS_APPROVED).await?;

    info!("Approved leave {} ({} row(s))", id, affected);
    Ok(APIResponse::OK)
}

pub async fn reject_leave(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i32>,
) -> Result<APIResponse, APIError> {
    let repo = LeavesRepo::new(state.database.clone());
    let affected = repo.set_status(id, STATUS_REJECTED).await?;

    info!("Rejected leave {} ({} row(s))", id, affected);
    Ok(APIResponse::OK)
}

/// Cancelling removes the request outright.
pub async fn cancel_leave(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i32>,
) -> Result<APIResponse, APIError> {
    let repo = LeavesRepo::new(state.database.clone());
    let affected = repo.delete(id).await?;

    info!("Cancelled leave {} ({} row(s))", id, affected);
    Ok(APIResponse::OK)
}
