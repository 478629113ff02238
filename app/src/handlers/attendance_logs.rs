use std::sync::Arc;

use axum::{extract::State, http::StatusCode};
use chrono::NaiveDate;

use crate::{
    core::state::AppState,
    models::{
        attendance_log::{AttendanceLogChanges, Model as AttendanceLog, NewAttendanceLog},
        employee::Model as Employee,
    },
    repos::{attendance_logs::AttendanceLogsRepo, employees::EmployeesRepo},
    utils::{
        contract::ResourceContract,
        extract::{Json, Path},
        response::{APIError, APIResponse},
    },
};

pub const ATTENDANCE_LOG_CONTRACT: ResourceContract = ResourceContract::standard("Attendance log");

pub async fn list_attendance_logs(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<AttendanceLog>>, APIError> {
    let repo = AttendanceLogsRepo::new(state.database.clone());

    Ok(Json(repo.list().await?))
}

pub async fn get_attendance_log(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i32>,
) -> Result<Json<AttendanceLog>, APIError> {
    let repo = AttendanceLogsRepo::new(state.database.clone());

    ATTENDANCE_LOG_CONTRACT.found(repo.get(id).await?)
}

pub async fn create_attendance_log(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<NewAttendanceLog>,
) -> Result<(StatusCode, Json<AttendanceLog>), APIError> {
    let repo = AttendanceLogsRepo::new(state.database.clone());

    Ok((StatusCode::CREATED, Json(repo.create(payload).await?)))
}

pub async fn update_attendance_log(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i32>,
    Json(payload): Json<AttendanceLogChanges>,
) -> Result<Json<Option<AttendanceLog>>, APIError> {
    let repo = AttendanceLogsRepo::new(state.database.clone());

    ATTENDANCE_LOG_CONTRACT.updated(repo.update(id, payload).await)
}

pub async fn delete_attendance_log(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i32>,
) -> Result<APIResponse, APIError> {
    let repo = AttendanceLogsRepo::new(state.database.clone());

    ATTENDANCE_LOG_CONTRACT.deleted(repo.delete(id).await?)
}

pub async fn get_missing_attendance(
    State(state): State<Arc<AppState>>,
    Path(date): Path<NaiveDate>,
) -> Result<Json<Vec<Employee>>, APIError> {
    let repo = EmployeesRepo::new(state.database.clone());

    Ok(Json(repo.get_missing_attendance(date).await?))
}
