/// Playlist handlers - CRUD and membership endpoints
use actix_web::{web, HttpResponse};
use uuid::Uuid;

use crate::error::Result;
use crate::middleware::UserId;
use crate::models::{ApiResponse, CreatePlaylistRequest, UpdatePlaylistRequest};
use crate::services::PlaylistService;

/// Create a playlist
/// POST /api/v1/playlists
pub async fn create_playlist(
    service: web::Data<PlaylistService>,
    user_id: UserId,
    req: web::Json<CreatePlaylistRequest>,
) -> Result<HttpResponse> {
    let playlist = service
        .create(user_id.0, &req.name, &req.description)
        .await?;

    Ok(HttpResponse::Created().json(ApiResponse::created(
        playlist,
        "Playlist created successfully",
    )))
}

/// Get a playlist with its member videos
/// GET /api/v1/playlists/{playlist_id}
pub async fn get_playlist(
    service: web::Data<PlaylistService>,
    playlist_id: web::Path<Uuid>,
) -> Result<HttpResponse> {
    let playlist = service.get(*playlist_id).await?;

    Ok(HttpResponse::Ok().json(ApiResponse::ok(playlist, "Playlist fetched successfully")))
}

/// List playlists owned by a user
/// GET /api/v1/playlists/user/{user_id}
pub async fn get_user_playlists(
    service: web::Data<PlaylistService>,
    user_id: web::Path<Uuid>,
) -> Result<HttpResponse> {
    let playlists = service.list_for_user(*user_id).await?;

    Ok(HttpResponse::Ok().json(ApiResponse::ok(
        playlists,
        "User playlists fetched successfully",
    )))
}

/// Add a video to a playlist (idempotent)
/// PATCH /api/v1/playlists/{playlist_id}/add/{video_id}
pub async fn add_video_to_playlist(
    service: web::Data<PlaylistService>,
    user_id: UserId,
    path: web::Path<(Uuid, Uuid)>,
) -> Result<HttpResponse> {
    let (playlist_id, video_id) = path.into_inner();
    let playlist = service.add_video(user_id.0, playlist_id, video_id).await?;

    Ok(HttpResponse::Ok().json(ApiResponse::ok(playlist, "Video added to playlist")))
}

/// Remove a video from a playlist (no-op when absent)
/// PATCH /api/v1/playlists/{playlist_id}/remove/{video_id}
pub async fn remove_video_from_playlist(
    service: web::Data<PlaylistService>,
    user_id: UserId,
    path: web::Path<(Uuid, Uuid)>,
) -> Result<HttpResponse> {
    let (playlist_id, video_id) = path.into_inner();
    let playlist = service
        .remove_video(user_id.0, playlist_id, video_id)
        .await?;

    Ok(HttpResponse::Ok().json(ApiResponse::ok(playlist, "Video removed from playlist")))
}

/// Rename a playlist / update its description
/// PUT /api/v1/playlists/{playlist_id}
pub async fn update_playlist(
    service: web::Data<PlaylistService>,
    user_id: UserId,
    playlist_id: web::Path<Uuid>,
    req: web::Json<UpdatePlaylistRequest>,
) -> Result<HttpResponse> {
    let playlist = service
        .rename(user_id.0, *playlist_id, &req.name, &req.description)
        .await?;

    Ok(HttpResponse::Ok().json(ApiResponse::ok(playlist, "Playlist updated successfully")))
}

/// Delete a playlist
/// DELETE /api/v1/playlists/{playlist_id}
pub async fn delete_playlist(
    service: web::Data<PlaylistService>,
    user_id: UserId,
    playlist_id: web::Path<Uuid>,
) -> Result<HttpResponse> {
    service.delete(user_id.0, *playlist_id).await?;

    Ok(HttpResponse::Ok().json(ApiResponse::ok(
        serde_json::json!({}),
        "Playlist deleted successfully",
    )))
}
