use std::sync::Arc;

use axum::{routing::get, Router};

use crate::{
    core::state::AppState,
    handlers::leave_balances::{
        create_leave_balance, delete_leave_balance, get_leave_balance, list_leave_balances,
        update_leave_balance,
    },
};

pub fn leave_balance_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/", get(list_leave_balances).post(create_leave_balance))
        .route(
            "/:id",
            get(get_leave_balance)
                .put(update_leave_balance)
                .delete(delete_leave_balance),
        )
}
