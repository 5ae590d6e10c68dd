mod image_urls;
mod upload;

use axum::{routing::{get, post}, Router};

use crate::AppState;

pub use image_urls::list_image_urls;
pub use upload::{upload, UploadRequest, NEW_PHOTOS};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/upload", post(upload::upload_images))
        .route("/imageUrls", get(image_urls::image_urls))
}
