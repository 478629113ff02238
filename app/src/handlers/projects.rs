use std::sync::Arc;

use axum::{extract::State, http::StatusCode};
use tracing::info;

use crate::{
    core::state::AppState,
    models::project::{Model as Project, ProjectPayload},
    repos::projects::ProjectsRepo,
    utils::{
        contract::ResourceContract,
        extract::{Json, Path},
        response::{APIError, APIResponse},
    },
};

pub const PROJECT_CONTRACT: ResourceContract = ResourceContract::standard("Project");

pub async fn list_projects(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<Project>>, APIError> {
    let repo = ProjectsRepo::new(state.database.clone());

    Ok(Json(repo.list().await?))
}

pub async fn get_project(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i32>,
) -> Result<Json<Project>, APIError> {
    let repo = ProjectsRepo::new(state.database.clone());

    PROJECT_CONTRACT.found(repo.get(id).await?)
}

pub async fn create_project(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<ProjectPayload>,
) -> Result<(StatusCode, Json<Project>), APIError> {
    let repo = ProjectsRepo::new(state.database.clone());
    let project = repo.create(payload).await?;

    info!("Created project {} ({})", project.id, project.name);
    Ok((StatusCode::CREATED, Json(project)))
}

pub async fn update_project(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i32>,
    Json(payload): Json<ProjectPayload>,
) -> Result<Json<Option<Project>>, APIError> {
    let repo = ProjectsRepo::new(state.database.clone());

    PROJECT_CONTRACT.updated(repo.update(id, payload).await)
}

pub async fn delete_project(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i32>,
) -> Result<APIResponse, APIError> {
    let repo = ProjectsRepo::new(state.database.clone());

    PROJECT_CONTRACT.deleted(repo.delete(id).await?)
}

pub async fn get_assigned_projects(
    State(state): State<Arc<AppState>>,
    Path(employee_id): Path<i32>,
) -> Result<Json<Vec<Project>>, APIError> {
    let repo = ProjectsRepo::new(state.database.clone());

    Ok(Json(repo.get_assigned(employee_id).await?))
}
