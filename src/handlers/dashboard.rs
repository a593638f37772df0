/// Dashboard handlers - channel statistics and video listing for the caller
use actix_web::{web, HttpResponse};

use crate::error::Result;
use crate::middleware::UserId;
use crate::models::ApiResponse;
use crate::services::DashboardService;

/// Channel statistics for the authenticated caller
/// GET /api/v1/dashboard/stats
pub async fn get_channel_stats(
    service: web::Data<DashboardService>,
    user_id: UserId,
) -> Result<HttpResponse> {
    let stats = service.stats(user_id.0).await?;

    Ok(HttpResponse::Ok().json(ApiResponse::ok(
        stats,
        "Channel stats fetched successfully",
    )))
}

/// Published videos of the authenticated caller's channel
/// GET /api/v1/dashboard/videos
pub async fn get_channel_videos(
    service: web::Data<DashboardService>,
    user_id: UserId,
) -> Result<HttpResponse> {
    let videos = service.videos(user_id.0).await?;

    Ok(HttpResponse::Ok().json(ApiResponse::ok(
        videos,
        "Channel videos fetched successfully",
    )))
}
