use std::sync::Arc;

use axum::{routing::get, Router};

use crate::{
    core::state::AppState,
    handlers::departments::{
        create_department, delete_department, get_department, get_department_employees,
        list_departments, update_department,
    },
};

pub fn department_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/", get(list_departments).post(create_department))
        .route(
            "/:id",
            get(get_department)
                .put(update_department)
                .delete(delete_department),
        )
        .route("/:id/employees", get(get_department_employees))
}
