use std::sync::Arc;

use axum::{routing::get, Router};

use crate::{
    core::state::AppState,
    handlers::projects::{
        create_project, delete_project, get_assigned_projects, get_project, list_projects,
        update_project,
    },
};

pub fn project_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/", get(list_projects).post(create_project))
        .route(
            "/:id",
            get(get_project).put(update_project).delete(delete_project),
        )
        .route("/assigned/:employee_id", get(get_assigned_projects))
}
