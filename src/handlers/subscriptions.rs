/// Subscription handlers - toggle and roster endpoints
use actix_web::{web, HttpResponse};
use uuid::Uuid;

use crate::error::Result;
use crate::middleware::UserId;
use crate::models::{ApiResponse, ToggleSubscriptionResponse};
use crate::services::SubscriptionService;

/// Toggle a subscription to a channel
/// POST /api/v1/subscriptions/c/{channel_id}
pub async fn toggle_subscription(
    service: web::Data<SubscriptionService>,
    user_id: UserId,
    channel_id: web::Path<Uuid>,
) -> Result<HttpResponse> {
    let subscribed = service.toggle(user_id.0, *channel_id).await?;

    let message = if subscribed {
        "Subscribed successfully"
    } else {
        "Unsubscribed successfully"
    };

    Ok(HttpResponse::Ok().json(ApiResponse::ok(
        ToggleSubscriptionResponse { subscribed },
        message,
    )))
}

/// Subscriber roster of a channel
/// GET /api/v1/subscriptions/c/{channel_id}
pub async fn get_channel_subscribers(
    service: web::Data<SubscriptionService>,
    channel_id: web::Path<Uuid>,
) -> Result<HttpResponse> {
    let subscribers = service.subscribers_of(*channel_id).await?;

    Ok(HttpResponse::Ok().json(ApiResponse::ok(
        subscribers,
        "Channel subscribers retrieved successfully",
    )))
}

/// Channels a user subscribes to
/// GET /api/v1/subscriptions/u/{subscriber_id}
pub async fn get_subscribed_channels(
    service: web::Data<SubscriptionService>,
    subscriber_id: web::Path<Uuid>,
) -> Result<HttpResponse> {
    let channels = service.subscribed_channels(*subscriber_id).await?;

    Ok(HttpResponse::Ok().json(ApiResponse::ok(
        channels,
        "Subscribed channels retrieved successfully",
    )))
}
