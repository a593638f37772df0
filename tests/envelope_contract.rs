//! Contract tests for the uniform response and error envelopes.

use actix_web::body::to_bytes;
use actix_web::error::ResponseError;
use actix_web::http::StatusCode;
use engagement_service::error::AppError;
use engagement_service::models::ApiResponse;

#[test]
fn success_envelope_shape() {
    let envelope = ApiResponse::ok(serde_json::json!({"is_liked": true}), "video like added");
    let json = serde_json::to_value(&envelope).expect("envelope serializes");

    assert_eq!(json["statusCode"], 200);
    assert_eq!(json["success"], true);
    assert_eq!(json["message"], "video like added");
    assert_eq!(json["data"]["is_liked"], true);
}

#[test]
fn empty_data_is_still_a_success() {
    // "no comments on page 3" is not a failure: the envelope must report
    // success with an empty sequence.
    let comments: Vec<serde_json::Value> = Vec::new();
    let envelope = ApiResponse::ok(comments, "Comments fetched successfully");
    let json = serde_json::to_value(&envelope).expect("envelope serializes");

    assert_eq!(json["success"], true);
    assert_eq!(json["data"], serde_json::json!([]));
}

#[actix_rt::test]
async fn error_envelope_shape() {
    let err = AppError::NotFound("Video not found".to_string());
    let response = err.error_response();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let body = to_bytes(response.into_body()).await.expect("body reads");
    let json: serde_json::Value = serde_json::from_slice(&body).expect("body is JSON");

    assert_eq!(json["statusCode"], 404);
    assert_eq!(json["success"], false);
    assert_eq!(json["message"], "Not found: Video not found");
    assert!(json["errors"].as_array().expect("errors array").is_empty());
}

#[actix_rt::test]
async fn self_subscription_maps_to_bad_request() {
    let err = AppError::BadRequest("You cannot subscribe to your own channel".to_string());
    let response = err.error_response();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = to_bytes(response.into_body()).await.expect("body reads");
    let json: serde_json::Value = serde_json::from_slice(&body).expect("body is JSON");
    assert_eq!(json["success"], false);
}

#[actix_rt::test]
async fn media_store_failures_surface_as_bad_gateway() {
    let err = AppError::MediaStore("ingest failed with status 500".to_string());
    assert_eq!(err.error_response().status(), StatusCode::BAD_GATEWAY);
}
