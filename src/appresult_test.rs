use super::*;
use http_body_util::BodyExt;

async fn body_json(err: AppError) -> (StatusCode, serde_json::Value) {
    let response = err.into_response();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&bytes).unwrap())
}

#[tokio::test]
async fn conflict_maps_to_409() {
    let (status, body) = body_json(AppError::Conflict("Ama".into())).await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body, json!({ "error": "User already exists" }));
}

#[tokio::test]
async fn not_found_maps_to_404() {
    let (status, body) = body_json(AppError::NotFound("guests")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({ "error": "No names found" }));
}

#[tokio::test]
async fn internal_hides_details() {
    let (status, body) = body_json(AppError::from(sqlx::Error::PoolClosed)).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({ "error": "Internal Server Error" }));
}
