use sea_orm::DatabaseConnection;

/// Shared by every handler through axum's `State`. The connection is pooled
/// and cheap to clone.
#[derive(Clone, Debug)]
pub struct AppState {
    pub database: DatabaseConnection,
}
