use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;
use tracing::{error, warn};

pub type AppResult<T> = Result<T, AppError>;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("bad request body: {0}")]
    BadRequest(#[from] JsonRejection),

    #[error("name already registered: {0}")]
    Conflict(String),

    #[error("nothing found: {0}")]
    NotFound(&'static str),

    #[error("internal error: {0}")]
    Internal(anyhow::Error),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::BadRequest(rejection) => rejection.status(),
            AppError::Conflict(_) => StatusCode::CONFLICT,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Client-facing descriptor. Internal details stay in the logs.
    pub fn descriptor(&self) -> String {
        match self {
            AppError::BadRequest(rejection) => rejection.body_text(),
            AppError::Conflict(_) => "User already exists".to_owned(),
            AppError::NotFound(_) => "No names found".to_owned(),
            AppError::Internal(_) => "Internal Server Error".to_owned(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match &self {
            AppError::Internal(err) => {
                error!(error = %err, backtrace = %err.backtrace(), "request failed");
            }
            AppError::BadRequest(rejection) => warn!(error = %rejection, "rejected request body"),
            _ => {}
        }

        (self.status(), Json(json!({ "error": self.descriptor() }))).into_response()
    }
}

macro_rules! apperr_impl {
    ($E:ty) => {
        impl From<$E> for AppError {
            fn from(err: $E) -> Self {
                Self::Internal(anyhow::Error::from(err))
            }
        }
    };
}

apperr_impl!(sqlx::Error);
apperr_impl!(sqlx::migrate::MigrateError);
apperr_impl!(serde_json::Error);

impl From<anyhow::Error> for AppError {
    fn from(err: anyhow::Error) -> Self {
        Self::Internal(err)
    }
}

#[cfg(test)]
#[path = "appresult_test.rs"]
mod tests;
