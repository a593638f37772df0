/// Comment handlers - enriched feed and CRUD endpoints
use actix_web::{web, HttpResponse};
use serde::Deserialize;
use uuid::Uuid;

use crate::error::Result;
use crate::middleware::UserId;
use crate::models::{ApiResponse, CreateCommentRequest, UpdateCommentRequest};
use crate::services::CommentService;
use crate::validators::clamp_pagination;

#[derive(Debug, Deserialize)]
pub struct FeedQuery {
    pub page: Option<i64>,
    pub limit: Option<i64>,
}

/// Paginated comment feed for a video, newest first
/// GET /api/v1/comments/{video_id}?page=&limit=
pub async fn get_video_comments(
    service: web::Data<CommentService>,
    video_id: web::Path<Uuid>,
    query: web::Query<FeedQuery>,
) -> Result<HttpResponse> {
    let page = clamp_pagination(query.page, query.limit);
    let comments = service.feed(*video_id, page).await?;

    Ok(HttpResponse::Ok().json(ApiResponse::ok(
        comments,
        "Comments fetched successfully",
    )))
}

/// Add a comment to a video
/// POST /api/v1/comments/{video_id}
pub async fn add_comment(
    service: web::Data<CommentService>,
    user_id: UserId,
    video_id: web::Path<Uuid>,
    req: web::Json<CreateCommentRequest>,
) -> Result<HttpResponse> {
    let comment = service.add(user_id.0, *video_id, &req.content).await?;

    Ok(HttpResponse::Created().json(ApiResponse::created(
        comment,
        "Comment created successfully",
    )))
}

/// Update a comment
/// PATCH /api/v1/comments/c/{comment_id}
pub async fn update_comment(
    service: web::Data<CommentService>,
    user_id: UserId,
    comment_id: web::Path<Uuid>,
    req: web::Json<UpdateCommentRequest>,
) -> Result<HttpResponse> {
    let comment = service.update(user_id.0, *comment_id, &req.content).await?;

    Ok(HttpResponse::Ok().json(ApiResponse::ok(comment, "Comment updated successfully")))
}

/// Delete a comment
/// DELETE /api/v1/comments/c/{comment_id}
pub async fn delete_comment(
    service: web::Data<CommentService>,
    user_id: UserId,
    comment_id: web::Path<Uuid>,
) -> Result<HttpResponse> {
    service.delete(user_id.0, *comment_id).await?;

    Ok(HttpResponse::Ok().json(ApiResponse::ok(
        serde_json::json!({}),
        "Comment deleted successfully",
    )))
}
