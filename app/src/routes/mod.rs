pub mod attendance;
pub mod departments;
pub mod employees;
pub mod feedbacks;
pub mod leave_balances;
pub mod leave_policies;
pub mod leaves;
pub mod projects;
pub mod timesheets;

use std::sync::Arc;

use axum::{routing::get, Router};
use tower_http::trace::TraceLayer;

use crate::{
    core::state::AppState,
    handlers::docs::api_docs,
    routes::{
        attendance::attendance_routes,
        departments::department_routes,
        employees::employee_routes,
        feedbacks::feedback_routes,
        leave_balances::leave_balance_routes,
        leave_policies::leave_policy_routes,
        leaves::{leave_routes, leave_workflow_routes},
        projects::project_routes,
        timesheets::timesheet_routes,
    },
    utils::global_error_handler::global_error_handler,
};

pub fn create_routers(state: Arc<AppState>) -> Router<()> {
    Router::new()
        .nest("/departments", department_routes())
        .nest("/employees", employee_routes())
        .nest("/leave-policies", leave_policy_routes())
        .nest("/leaves", leave_routes())
        .nest("/leave", leave_workflow_routes())
        .nest("/leave-balances", leave_balance_routes())
        .nest("/attendance", attendance_routes())
        .nest("/feedbacks", feedback_routes())
        .nest("/projects", project_routes())
        .nest("/timesheets", timesheet_routes())
        .route("/api-docs", get(api_docs))
        .fallback(global_error_handler)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
