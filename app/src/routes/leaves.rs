use std::sync::Arc;

use axum::{
    routing::{delete, get, put},
    Router,
};

use crate::{
    core::state::AppState,
    handlers::leaves::{
        approve_leave, cancel_leave, create_leave, delete_leave, get_leave, list_leaves,
        reject_leave, update_leave,
    },
};

pub fn leave_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/", get(list_leaves).post(create_leave))
        .route("/:id", get(get_leave).put(update_leave).delete(delete_leave))
}

pub fn leave_workflow_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/approve/:id", put(approve_leave))
        .route("/reject/:id", put(reject_leave))
        .route("/cancel/:id", delete(cancel_leave))
}
