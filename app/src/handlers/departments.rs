use std::sync::Arc;

use axum::{extract::State, http::StatusCode};
use tracing::info;

use crate::{
    core::state::AppState,
    models::{
        department::{DepartmentPayload, Model as Department},
        employee::Model as Employee,
    },
    repos::{departments::DepartmentsRepo, employees::EmployeesRepo},
    utils::{
        contract::ResourceContract,
        extract::{Json, Path},
        response::{APIError, APIResponse},
    },
};

pub const DEPARTMENT_CONTRACT: ResourceContract = ResourceContract::standard("Department");

pub async fn list_departments(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<Department>>, APIError> {
    let repo = DepartmentsRepo::new(state.database.clone());

    Ok(Json(repo.list().await?))
}

pub async fn get_department(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i32>,
) -> Result<Json<Department>, APIError> {
    let repo = DepartmentsRepo::new(state.database.clone());

    DEPARTMENT_CONTRACT.found(repo.get(id).await?)
}

pub async fn create_department(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<DepartmentPayload>,
) -> Result<(StatusCode, Json<Department>), APIError> {
    let repo = DepartmentsRepo::new(state.database.clone());
    let department = repo.create(payload).await?;

    info!("Created department {}", department.id);
    Ok((StatusCode::CREATED, Json(department)))
}

pub async fn update_department(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i32>,
    Json(payload): Json<DepartmentPayload>,
) -> Result<Json<Option<Department>>, APIError> {
    let repo = DepartmentsRepo::new(state.database.clone());

    DEPARTMENT_CONTRACT.updated(repo.update(id, payload).await)
}

pub async fn delete_department(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i32>,
) -> Result<APIResponse, APIError> {
    let repo = DepartmentsRepo::new(state.database.clone());

    DEPARTMENT_CONTRACT.deleted(repo.delete(id).await?)
}

pub async fn get_department_employees(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i32>,
) -> Result<Json<Vec<Employee>>, APIError> {
    let repo = EmployeesRepo::new(state.database.clone());

    Ok(Json(repo.get_by_department(id).await?))
}
