use std::sync::Arc;

use axum::{routing::get, Router};

use crate::{
    core::state::AppState,
    handlers::attendance_logs::{
        create_attendance_log, delete_attendance_log, get_attendance_log, get_missing_attendance,
        list_attendance_logs, update_attendance_log,
    },
};

pub fn attendance_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/", get(list_attendance_logs).post(create_attendance_log))
        .route(
            "/:id",
            get(get_attendance_log)
                .put(update_attendance_log)
                .delete(delete_attendance_log),
        )
        .route("/missing/:date", get(get_missing_attendance))
}
