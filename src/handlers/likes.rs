/// Like handlers - toggle endpoints for every likeable kind
use actix_web::{web, HttpResponse};
use uuid::Uuid;

use crate::error::Result;
use crate::middleware::UserId;
use crate::models::{ApiResponse, LikeTarget, ToggleLikeResponse};
use crate::services::LikeService;

/// Toggle a like on a video
/// POST /api/v1/likes/video/{video_id}
pub async fn toggle_video_like(
    service: web::Data<LikeService>,
    user_id: UserId,
    video_id: web::Path<Uuid>,
) -> Result<HttpResponse> {
    toggle(&service, user_id.0, LikeTarget::Video(*video_id)).await
}

/// Toggle a like on a comment
/// POST /api/v1/likes/comment/{comment_id}
pub async fn toggle_comment_like(
    service: web::Data<LikeService>,
    user_id: UserId,
    comment_id: web::Path<Uuid>,
) -> Result<HttpResponse> {
    toggle(&service, user_id.0, LikeTarget::Comment(*comment_id)).await
}

/// Toggle a like on a tweet
/// POST /api/v1/likes/tweet/{tweet_id}
pub async fn toggle_tweet_like(
    service: web::Data<LikeService>,
    user_id: UserId,
    tweet_id: web::Path<Uuid>,
) -> Result<HttpResponse> {
    toggle(&service, user_id.0, LikeTarget::Tweet(*tweet_id)).await
}

async fn toggle(service: &LikeService, actor: Uuid, target: LikeTarget) -> Result<HttpResponse> {
    let is_liked = service.toggle(actor, target).await?;

    let message = if is_liked {
        format!("{} like added", target.kind())
    } else {
        format!("{} like removed", target.kind())
    };

    Ok(HttpResponse::Ok().json(ApiResponse::ok(ToggleLikeResponse { is_liked }, message)))
}
