/// Tweet handlers - CRUD endpoints
use actix_web::{web, HttpResponse};
use uuid::Uuid;

use crate::error::Result;
use crate::middleware::UserId;
use crate::models::{ApiResponse, CreateTweetRequest, UpdateTweetRequest};
use crate::services::TweetService;

/// Create a tweet
/// POST /api/v1/tweets
pub async fn create_tweet(
    service: web::Data<TweetService>,
    user_id: UserId,
    req: web::Json<CreateTweetRequest>,
) -> Result<HttpResponse> {
    let tweet = service.create(user_id.0, &req.content).await?;

    Ok(HttpResponse::Created().json(ApiResponse::created(tweet, "Tweet created successfully")))
}

/// List tweets of a user, newest first
/// GET /api/v1/tweets/user/{user_id}
pub async fn get_user_tweets(
    service: web::Data<TweetService>,
    user_id: web::Path<Uuid>,
) -> Result<HttpResponse> {
    let tweets = service.list_for_user(*user_id).await?;

    Ok(HttpResponse::Ok().json(ApiResponse::ok(tweets, "User tweets fetched successfully")))
}

/// Update a tweet
/// PATCH /api/v1/tweets/{tweet_id}
pub async fn update_tweet(
    service: web::Data<TweetService>,
    user_id: UserId,
    tweet_id: web::Path<Uuid>,
    req: web::Json<UpdateTweetRequest>,
) -> Result<HttpResponse> {
    let tweet = service.update(user_id.0, *tweet_id, &req.content).await?;

    Ok(HttpResponse::Ok().json(ApiResponse::ok(tweet, "Tweet updated successfully")))
}

/// Delete a tweet
/// DELETE /api/v1/tweets/{tweet_id}
pub async fn delete_tweet(
    service: web::Data<TweetService>,
    user_id: UserId,
    tweet_id: web::Path<Uuid>,
) -> Result<HttpResponse> {
    service.delete(user_id.0, *tweet_id).await?;

    Ok(HttpResponse::Ok().json(ApiResponse::ok(
        serde_json::json!({}),
        "Tweet deleted successfully",
    )))
}
