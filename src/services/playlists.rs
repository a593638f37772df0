/// Playlist membership set manager.
///
/// The `video_ids` column is an ordered, duplicate-free set. Membership
/// mutations are single atomic array updates in the repository; this layer
/// adds existence and ownership checks.
use crate::db::{playlist_repo, user_repo, video_repo};
use crate::error::{AppError, Result};
use crate::models::{Playlist, PlaylistWithVideos};
use crate::validators;
use sqlx::PgPool;
use uuid::Uuid;

#[derive(Clone)]
pub struct PlaylistService {
    pool: PgPool,
}

impl PlaylistService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, owner: Uuid, name: &str, description: &str) -> Result<Playlist> {
        validators::require_non_blank("name", name)?;

        Ok(playlist_repo::create(&self.pool, owner, name.trim(), description.trim()).await?)
    }

    /// Fetch a playlist hydrated with its member videos in membership order.
    pub async fn get(&self, playlist_id: Uuid) -> Result<PlaylistWithVideos> {
        let playlist = playlist_repo::find_by_id(&self.pool, playlist_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Playlist not found".to_string()))?;

        let videos = playlist_repo::member_videos(&self.pool, &playlist.video_ids).await?;

        Ok(PlaylistWithVideos {
            id: playlist.id,
            owner_id: playlist.owner_id,
            name: playlist.name,
            description: playlist.description,
            videos,
            created_at: playlist.created_at,
            updated_at: playlist.updated_at,
        })
    }

    /// Playlists owned by a user. Empty is a valid result.
    pub async fn list_for_user(&self, user_id: Uuid) -> Result<Vec<Playlist>> {
        if !user_repo::exists(&self.pool, user_id).await? {
            return Err(AppError::NotFound("User not found".to_string()));
        }

        Ok(playlist_repo::find_by_owner(&self.pool, user_id).await?)
    }

    pub async fn rename(
        &self,
        actor: Uuid,
        playlist_id: Uuid,
        name: &str,
        description: &str,
    ) -> Result<Playlist> {
        validators::require_non_blank("name", name)?;
        self.ensure_owned_by(actor, playlist_id).await?;

        playlist_repo::rename(&self.pool, playlist_id, name.trim(), description.trim())
            .await?
            .ok_or_else(|| AppError::NotFound("Playlist not found".to_string()))
    }

    pub async fn delete(&self, actor: Uuid, playlist_id: Uuid) -> Result<()> {
        self.ensure_owned_by(actor, playlist_id).await?;

        playlist_repo::delete(&self.pool, playlist_id).await?;
        Ok(())
    }

    /// Add a video to the membership set. Idempotent: adding a video that is
    /// already a member leaves the playlist unchanged.
    pub async fn add_video(
        &self,
        actor: Uuid,
        playlist_id: Uuid,
        video_id: Uuid,
    ) -> Result<Playlist> {
        self.ensure_owned_by(actor, playlist_id).await?;

        if !video_repo::exists(&self.pool, video_id).await? {
            return Err(AppError::NotFound("Video not found".to_string()));
        }

        playlist_repo::add_video(&self.pool, playlist_id, video_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Playlist not found".to_string()))
    }

    /// Remove a video from the membership set. No-op when the video is not a
    /// member.
    pub async fn remove_video(
        &self,
        actor: Uuid,
        playlist_id: Uuid,
        video_id: Uuid,
    ) -> Result<Playlist> {
        self.ensure_owned_by(actor, playlist_id).await?;

        playlist_repo::remove_video(&self.pool, playlist_id, video_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Playlist not found".to_string()))
    }

    async fn ensure_owned_by(&self, actor: Uuid, playlist_id: Uuid) -> Result<()> {
        let playlist = playlist_repo::find_by_id(&self.pool, playlist_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Playlist not found".to_string()))?;

        if playlist.owner_id != actor {
            return Err(AppError::Forbidden(
                "You are not the owner of this playlist".to_string(),
            ));
        }

        Ok(())
    }
}
