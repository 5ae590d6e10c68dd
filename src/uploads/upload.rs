use axum::{debug_handler, extract::{rejection::JsonRejection, State}, Json};
use serde::Deserialize;
use sqlx::SqlitePool;
use tracing::info;

use crate::{db, live::LiveChannel, AppResult, MessageResponse};

/// Pushed to every open viewer once a batch is stored.
pub const NEW_PHOTOS: &str = "new-photos";

#[derive(Debug, Deserialize)]
pub struct UploadRequest {
    pub images: Vec<String>,
}

/// Store the batch, then tell connected viewers. Nothing is broadcast if the insert fails.
pub async fn upload(
    db_pool: &SqlitePool,
    live: &LiveChannel,
    images: &[String],
) -> AppResult<MessageResponse> {
    let batch = db::insert_batch(db_pool, images).await?;
    info!(batch = batch.id, count = batch.image_urls.len(), "upload batch saved");

    live.broadcast_all(NEW_PHOTOS);

    Ok(MessageResponse::new("Images uploaded successfully"))
}

#[debug_handler(state = crate::AppState)]
pub(crate) async fn upload_images(
    State(db_pool): State<SqlitePool>,
    State(live): State<LiveChannel>,
    payload: Result<Json<UploadRequest>, JsonRejection>,
) -> AppResult<Json<MessageResponse>> {
    let Json(UploadRequest { images }) = payload?;
    upload(&db_pool, &live, &images).await.map(Json)
}

#[cfg(test)]
#[path = "upload_test.rs"]
mod tests;
