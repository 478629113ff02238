use std::sync::Arc;

use axum::{routing::get, Router};

use crate::{
    core::state::AppState,
    handlers::feedbacks::{
        create_feedback, delete_feedback, get_feedback, list_feedbacks, update_feedback,
    },
};

pub fn feedback_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/", get(list_feedbacks).post(create_feedback))
        .route(
            "/:id",
            get(get_feedback).put(update_feedback).delete(delete_feedback),
        )
}
