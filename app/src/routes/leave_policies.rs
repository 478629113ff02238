use std::sync::Arc;

use axum::{routing::get, Router};

use crate::{
    core::state::AppState,
    handlers::leave_policies::{
        create_leave_policy, delete_leave_policy, get_leave_policy, list_leave_policies,
        update_leave_policy,
    },
};

pub fn leave_policy_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/", get(list_leave_policies).post(create_leave_policy))
        .route(
            "/:id",
            get(get_leave_policy)
                .put(update_leave_policy)
                .delete(delete_leave_policy),
        )
}
