use std::sync::Arc;

use axum::{extract::State, http::StatusCode};
use chrono::NaiveDate;
use serde::Deserialize;

use crate::{
    core::state::AppState,
    models::timesheet::{Model as Timesheet, NewTimesheet, TimesheetChanges},
    repos::timesheets::{week_end, TimesheetsRepo},
    utils::{
        contract::ResourceContract,
        extract::{Json, Path, Query},
        response::{APIError, APIResponse},
    },
};

pub const TIMESHEET_CONTRACT: ResourceContract = ResourceContract::standard("Timesheet");

#[derive(Debug, Deserialize)]
pub struct WeekQuery {
    pub start: NaiveDate,
}

#[derive(Debug, Deserialize)]
pub struct DayQuery {
    pub date: NaiveDate,
}

pub async fn list_timesheets(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<Timesheet>>, APIError> {
    let repo = TimesheetsRepo::new(state.database.clone());

    Ok(Json(repo.list().await?))
}

pub async fn get_timesheet(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i32>,
) -> Result<Json<Timesheet>, APIError> {
    let repo = TimesheetsRepo::new(state.database.clone());

    TIMESHEET_CONTRACT.found(repo.get(id).await?)
}

pub async fn create_timesheet(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<NewTimesheet>,
) -> Result<(StatusCode, Json<Timesheet>), APIError> {
    let repo = TimesheetsRepo::new(state.database.clone());

    Ok((StatusCode::CREATED, Json(repo.create(payload).await?)))
}

pub async fn update_timesheet(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i32>,
    Json(payload): Json<TimesheetChanges>,
) -> Result<Json<Option<Timesheet>>, APIError> {
    let repo = TimesheetsRepo::new(state.database.clone());

    TIMESHEET_CONTRACT.updated(repo.update(id, payload).await)
}

pub async fn delete_timesheet(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i32>,
) -> Result<APIResponse, APIError> {
    let repo = TimesheetsRepo::new(state.database.clone());

    TIMESHEET_CONTRACT.deleted(repo.delete(id).await?)
}

pub async fn get_week_timesheets(
    State(state): State<Arc<AppState>>,
    Path(employee_id): Path<i32>,
    Query(query): Query<WeekQuery>,
) -> Result<Json<Vec<Timesheet>>, APIError> {
    let end = week_end(query.start)
        .ok_or_else(|| APIError::BadRequest("start is out of range".to_string()))?;
    let repo = TimesheetsRepo::new(state.database.clone());

    Ok(Json(
        repo.get_by_employee_between(employee_id, query.start, end)
            .await?,
    ))
}

pub async fn get_day_timesheets(
    State(state): State<Arc<AppState>>,
    Path(employee_id): Path<i32>,
    Query(query): Query<DayQuery>,
) -> Result<Json<Vec<Timesheet>>, APIError> {
    let repo = TimesheetsRepo::new(state.database.clone());

    Ok(Json(repo.get_by_employee_on(employee_id, query.date).await?))
}
