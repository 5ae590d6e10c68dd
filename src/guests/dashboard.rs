use axum::{debug_handler, extract::State, Json};
use sqlx::SqlitePool;
use tracing::warn;

use crate::{db, AppError, AppResult};

/// All guest names in registration order. An empty guest list is `NotFound`,
/// which existing dashboard clients rely on.
pub async fn list_names(db_pool: &SqlitePool) -> AppResult<Vec<String>> {
    let names = db::guest_names(db_pool).await?;
    if names.is_empty() {
        warn!("no names found");
        return Err(AppError::NotFound("guests"));
    }

    Ok(names)
}

#[debug_handler(state = crate::AppState)]
pub(crate) async fn dashboard(State(db_pool): State<SqlitePool>) -> AppResult<Json<Vec<String>>> {
    list_names(&db_pool).await.map(Json)
}

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod tests;
