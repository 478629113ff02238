use std::sync::Arc;

use axum::{extract::State, http::StatusCode};
use tracing::info;

use crate::{
    core::state::AppState,
    models::leave_policy::{LeavePolicyPayload, Model as LeavePolicy},
    repos::leave_policies::LeavePoliciesRepo,
    utils::{
        contract::ResourceContract,
        extract::{Json, Path},
        response::{APIError, APIResponse},
    },
};

pub const LEAVE_POLICY_CONTRACT: ResourceContract = ResourceContract::standard("Leave policy");

pub async fn list_leave_policies(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<LeavePolicy>>, APIError> {
    let repo = LeavePoliciesRepo::new(state.database.clone());

    Ok(Json(repo.list().await?))
}

pub async fn get_leave_policy(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i32>,
) -> Result<Json<LeavePolicy>, APIError> {
    let repo = LeavePoliciesRepo::new(state.database.clone());

    LEAVE_POLICY_CONTRACT.found(repo.get(id).await?)
}

pub async fn create_leave_policy(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<LeavePolicyPayload>,
) -> Result<(StatusCode, Json<LeavePolicy>), APIError> {
    let repo = LeavePoliciesRepo::new(state.database.clone());
    let policy = repo.create(payload).await?;

    info!("Created leave policy {} ({})", policy.id, policy.policy_name);
    Ok((StatusCode::CREATED, Json(policy)))
}

pub async fn update_leave_policy(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i32>,
    Json(payload): Json<LeavePolicyPayload>,
) -> Result<Json<Option<LeavePolicy>>, APIError> {
    let repo = LeavePoliciesRepo::new(state.database.clone());

    LEAVE_POLICY_CONTRACT.updated(repo.update(id, payload).await)
}

pub async fn delete_leave_policy(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i32>,
) -> Result<APIResponse, APIError> {
    let repo = LeavePoliciesRepo::new(state.database.clone());

    LEAVE_POLICY_CONTRACT.deleted(repo.delete(id).await?)
}
