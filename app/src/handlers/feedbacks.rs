use std::sync::Arc;

use axum::{extract::State, http::StatusCode};

use crate::{
    core::state::AppState,
    models::feedback::{FeedbackChanges, Model as Feedback, NewFeedback},
    repos::feedbacks::FeedbacksRepo,
    utils::{
        contract::ResourceContract,
        extract::{Json, Path},
        response::{APIError, APIResponse},
    },
};

pub const FEEDBACK_CONTRACT: ResourceContract = ResourceContract::standard("Feedback");

pub async fn list_feedbacks(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<Feedback>>, APIError> {
    let repo = FeedbacksRepo::new(state.database.clone());

    Ok(Json(repo.list().await?))
}

pub async fn get_feedback(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i32>,
) -> Result<Json<Feedback>, APIError> {
    let repo = FeedbacksRepo::new(state.database.clone());

    FEEDBACK_CONTRACT.found(repo.get(id).await?)
}

pub async fn create_feedback(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<NewFeedback>,
) -> Result<(StatusCode, Json<Feedback>), APIError> {
    let repo = FeedbacksRepo::new(state.database.clone());

    Ok((StatusCode::CREATED, Json(repo.create(payload).await?)))
}

pub async fn update_feedback(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i32>,
    Json(payload): Json<FeedbackChanges>,
) -> Result<Json<Option<Feedback>>, APIError> {
    let repo = FeedbacksRepo::new(state.database.clone());

    FEEDBACK_CONTRACT.updated(repo.update(id, payload).await)
}

pub async fn delete_feedback(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i32>,
) -> Result<APIResponse, APIError> {
    let repo = FeedbacksRepo::new(state.database.clone());

    FEEDBACK_CONTRACT.deleted(repo.delete(id).await?)
}
