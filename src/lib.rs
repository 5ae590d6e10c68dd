pub mod appresult;
pub mod config;
pub mod db;
pub mod guests;
pub mod live;
pub mod uploads;

use axum::{extract::FromRef, http::{header::CONTENT_TYPE, HeaderValue, Method}, Router};
use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

pub use appresult::{AppError, AppResult};
pub use live::LiveChannel;

#[derive(Clone, FromRef)]
pub struct AppState {
    pub db_pool: SqlitePool,
    pub live: LiveChannel,
}

impl AppState {
    pub fn new(db_pool: SqlitePool) -> Self {
        Self { db_pool, live: LiveChannel::new() }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self { message: message.into() }
    }
}

pub fn router(app_state: AppState, allowed_origins: Vec<HeaderValue>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(allowed_origins)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([CONTENT_TYPE]);

    Router::new()
        .merge(guests::router())
        .merge(uploads::router())
        .merge(live::router())
        .with_state(app_state)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}

#[cfg(test)]
#[path = "lib_test.rs"]
mod tests;
