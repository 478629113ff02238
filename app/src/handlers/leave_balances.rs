use std::sync::Arc;

use axum::{extract::State, http::StatusCode};

use crate::{
    core::state::AppState,
    models::leave_balance::{LeaveBalanceChanges, Model as LeaveBalance, NewLeaveBalance},
    repos::leave_balances::LeaveBalancesRepo,
    utils::{
        contract::ResourceContract,
        extract::{Json, Path},
        response::{APIError, APIResponse},
    },
};

pub const LEAVE_BALANCE_CONTRACT: ResourceContract = ResourceContract::standard("Leave balance");

pub async fn list_leave_balances(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<LeaveBalance>>, APIError> {
    let repo = LeaveBalancesRepo::new(state.database.clone());

    Ok(Json(repo.list().await?))
}

pub async fn get_leave_balance(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i32>,
) -> Result<Json<LeaveBalance>, APIError> {
    let repo = LeaveBalancesRepo::new(state.database.clone());

    LEAVE_BALANCE_CONTRACT.found(repo.get(id).await?)
}

pub async fn create_leave_balance(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<NewLeaveBalance>,
) -> Result<(StatusCode, Json<LeaveBalance>), APIError> {
    let repo = LeaveBalancesRepo::new(state.database.clone());

    Ok((StatusCode::CREATED, Json(repo.create(payload).await?)))
}

pub async fn update_leave_balance(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i32>,
    Json(payload): Json<LeaveBalanceChanges>,
) -> Result<Json<Option<LeaveBalance>>, APIError> {
    let repo = LeaveBalancesRepo::new(state.database.clone());

    LEAVE_BALANCE_CONTRACT.updated(repo.update(id, payload).await)
}

pub async fn delete_leave_balance(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i32>,
) -> Result<APIResponse, APIError> {
    let repo = LeaveBalancesRepo::new(state.database.clone());

    LEAVE_BALANCE_CONTRACT.deleted(repo.delete(id).await?)
}
