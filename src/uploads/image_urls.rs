use axum::{debug_handler, extract::State, Json};
use sqlx::SqlitePool;

use crate::{db, AppResult};

/// Every stored URL, batch by batch. No uploads yet is an empty list, not an error.
pub async fn list_image_urls(db_pool: &SqlitePool) -> AppResult<Vec<String>> {
    let urls = db::all_batches(db_pool)
        .await?
        .into_iter()
        .flat_map(|batch| batch.image_urls)
        .collect();

    Ok(urls)
}

#[debug_handler(state = crate::AppState)]
pub(crate) async fn image_urls(State(db_pool): State<SqlitePool>) -> AppResult<Json<Vec<String>>> {
    list_image_urls(&db_pool).await.map(Json)
}
