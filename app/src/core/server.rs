use anyhow::Result;
use std::sync::Arc;

use axum::Router;
use tracing::info;

use crate::{
    config::config::Config,
    core::state::AppState,
    database::connect::{connect_database, run_migrations},
    routes::create_routers,
};

pub async fn create_server(config: Config) -> Result<Router<()>> {
    let db_conn = connect_database(&config).await?;

    if config.run_migrations {
        run_migrations(&db_conn).await?;
        info!("Migrations applied");
    }

    let state = AppState { database: db_conn };

    Ok(create_routers(Arc::new(state)))
}
