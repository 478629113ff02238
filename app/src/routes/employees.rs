use std::sync::Arc;

use axum::{routing::get, Router};

use crate::{
    core::state::AppState,
    handlers::employees::{
        create_employee, delete_employee, get_employee, get_employee_attendance,
        get_employee_feedbacks, get_employee_leave_balances, get_employee_leaves,
        get_employee_timesheets, list_employees, update_employee,
    },
};

pub fn employee_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/", get(list_employees).post(create_employee))
        .route(
            "/:id",
            get(get_employee).put(update_employee).delete(delete_employee),
        )
        // Relationship lookups
        .route("/:id/leave-balances", get(get_employee_leave_balances))
        .route("/:id/attendance", get(get_employee_attendance))
        .route("/:id/leaves", get(get_employee_leaves))
        .route("/:id/feedbacks", get(get_employee_feedbacks))
        .route("/:id/timesheets", get(get_employee_timesheets))
}
