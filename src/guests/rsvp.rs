use axum::{debug_handler, extract::{rejection::JsonRejection, State}, Json};
use serde::Deserialize;
use sqlx::SqlitePool;
use tracing::{info, warn};

use crate::{db, AppError, AppResult, MessageResponse};

#[derive(Debug, Deserialize)]
pub struct RsvpRequest {
    pub name: String,
}

/// Record a guest. Taken names fail with `Conflict` and leave the store untouched.
pub async fn register(db_pool: &SqlitePool, name: &str) -> AppResult<MessageResponse> {
    let Some(guest) = db::insert_guest(db_pool, name).await? else {
        warn!(name, "guest already exists");
        return Err(AppError::Conflict(name.to_owned()));
    };

    info!(name = %guest.name, uuid = %guest.uuid, "guest saved");
    Ok(MessageResponse::new(format!("Thanks for the RSVP {}! See you soon!", guest.name)))
}

#[debug_handler(state = crate::AppState)]
pub(crate) async fn rsvp(
    State(db_pool): State<SqlitePool>,
    payload: Result<Json<RsvpRequest>, JsonRejection>,
) -> AppResult<Json<MessageResponse>> {
    let Json(RsvpRequest { name }) = payload?;
    register(&db_pool, &name).await.map(Json)
}

#[cfg(test)]
#[path = "rsvp_test.rs"]
mod tests;
