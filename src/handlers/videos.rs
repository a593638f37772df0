/// Video handlers - lifecycle endpoints
use actix_web::{web, HttpResponse};
use uuid::Uuid;

use crate::error::Result;
use crate::middleware::UserId;
use crate::models::{ApiResponse, PublishVideoRequest, UpdateVideoRequest};
use crate::services::VideoService;

/// Publish a new video from staged media
/// POST /api/v1/videos
pub async fn publish_video(
    service: web::Data<VideoService>,
    user_id: UserId,
    req: web::Json<PublishVideoRequest>,
) -> Result<HttpResponse> {
    let video = service.publish(user_id.0, &req).await?;

    Ok(HttpResponse::Created().json(ApiResponse::created(video, "Video created successfully")))
}

/// Get a video by id
/// GET /api/v1/videos/{video_id}
pub async fn get_video(
    service: web::Data<VideoService>,
    video_id: web::Path<Uuid>,
) -> Result<HttpResponse> {
    let video = service.get(*video_id).await?;

    Ok(HttpResponse::Ok().json(ApiResponse::ok(video, "Video fetched successfully")))
}

/// Update video metadata, optionally replacing the thumbnail
/// PATCH /api/v1/videos/{video_id}
pub async fn update_video(
    service: web::Data<VideoService>,
    user_id: UserId,
    video_id: web::Path<Uuid>,
    req: web::Json<UpdateVideoRequest>,
) -> Result<HttpResponse> {
    let video = service.update(user_id.0, *video_id, &req).await?;

    Ok(HttpResponse::Ok().json(ApiResponse::ok(video, "Video updated successfully")))
}

/// Delete a video, its engagement records and its stored assets
/// DELETE /api/v1/videos/{video_id}
pub async fn delete_video(
    service: web::Data<VideoService>,
    user_id: UserId,
    video_id: web::Path<Uuid>,
) -> Result<HttpResponse> {
    service.delete(user_id.0, *video_id).await?;

    Ok(HttpResponse::Ok().json(ApiResponse::ok(
        serde_json::json!({}),
        "Video deleted successfully",
    )))
}

/// Flip the publish state of a video
/// PATCH /api/v1/videos/toggle/publish/{video_id}
pub async fn toggle_publish_status(
    service: web::Data<VideoService>,
    user_id: UserId,
    video_id: web::Path<Uuid>,
) -> Result<HttpResponse> {
    let video = service.toggle_publish(user_id.0, *video_id).await?;

    Ok(HttpResponse::Ok().json(ApiResponse::ok(video, "Toggled video publish status")))
}
