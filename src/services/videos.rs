/// Video lifecycle: publishing, metadata updates, deletion.
///
/// Publishing is a two-step commit against the media store and the database:
/// assets are ingested first, and when the subsequent database write fails
/// the uploaded assets are deleted again so nothing leaks on the store.
use crate::db::{like_repo, playlist_repo, video_repo};
use crate::error::{AppError, Result};
use crate::models::{PublishVideoRequest, UpdateVideoRequest, Video};
use crate::services::media_store::MediaStoreClient;
use crate::validators;
use sqlx::PgPool;
use std::sync::Arc;
use uuid::Uuid;

#[derive(Clone)]
pub struct VideoService {
    pool: PgPool,
    media: Arc<MediaStoreClient>,
}

impl VideoService {
    pub fn new(pool: PgPool, media: Arc<MediaStoreClient>) -> Self {
        Self { pool, media }
    }

    /// Publish a new video: ingest both staged assets, then record the row.
    pub async fn publish(&self, actor: Uuid, req: &PublishVideoRequest) -> Result<Video> {
        validators::require_non_blank("title", &req.title)?;
        validators::require_non_blank("description", &req.description)?;
        validators::require_non_blank("video_ref", &req.video_ref)?;
        validators::require_non_blank("thumbnail_ref", &req.thumbnail_ref)?;

        let media_asset = self.media.ingest(&req.video_ref).await?;

        let thumbnail_asset = match self.media.ingest(&req.thumbnail_ref).await {
            Ok(asset) => asset,
            Err(e) => {
                self.cleanup_asset(&media_asset.url).await;
                return Err(e);
            }
        };

        let duration = media_asset.duration.unwrap_or(0.0);

        match video_repo::insert(
            &self.pool,
            actor,
            req.title.trim(),
            req.description.trim(),
            &media_asset.url,
            &thumbnail_asset.url,
            duration,
        )
        .await
        {
            Ok(video) => Ok(video),
            Err(e) => {
                // Compensating deletes: the publish failed, so the uploaded
                // assets must not stay behind on the store.
                self.cleanup_asset(&media_asset.url).await;
                self.cleanup_asset(&thumbnail_asset.url).await;
                Err(AppError::Database(e))
            }
        }
    }

    pub async fn get(&self, video_id: Uuid) -> Result<Video> {
        video_repo::find_by_id(&self.pool, video_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Video not found".to_string()))
    }

    /// Update title/description and optionally replace the thumbnail. The old
    /// thumbnail is deleted only after the row update succeeded.
    pub async fn update(
        &self,
        actor: Uuid,
        video_id: Uuid,
        req: &UpdateVideoRequest,
    ) -> Result<Video> {
        validators::require_non_blank("title", &req.title)?;
        validators::require_non_blank("description", &req.description)?;

        let existing = self.ensure_owned_by(actor, video_id).await?;

        let new_thumbnail = match &req.thumbnail_ref {
            Some(staging_ref) => Some(self.media.ingest(staging_ref).await?),
            None => None,
        };

        let updated = video_repo::update_metadata(
            &self.pool,
            video_id,
            req.title.trim(),
            req.description.trim(),
            new_thumbnail.as_ref().map(|a| a.url.as_str()),
        )
        .await;

        match updated {
            Ok(Some(video)) => {
                if new_thumbnail.is_some() {
                    self.cleanup_asset(&existing.thumbnail_url).await;
                }
                Ok(video)
            }
            Ok(None) => {
                if let Some(asset) = &new_thumbnail {
                    self.cleanup_asset(&asset.url).await;
                }
                Err(AppError::NotFound("Video not found".to_string()))
            }
            Err(e) => {
                if let Some(asset) = &new_thumbnail {
                    self.cleanup_asset(&asset.url).await;
                }
                Err(AppError::Database(e))
            }
        }
    }

    /// Delete a video: the row (comments cascade with it), its likes, every
    /// playlist reference, then the stored assets.
    pub async fn delete(&self, actor: Uuid, video_id: Uuid) -> Result<()> {
        let video = self.ensure_owned_by(actor, video_id).await?;

        video_repo::delete(&self.pool, video_id).await?;
        like_repo::delete_for_target(&self.pool, "video", video_id).await?;
        let scrubbed = playlist_repo::scrub_video(&self.pool, video_id).await?;
        if scrubbed > 0 {
            tracing::debug!(%video_id, playlists = scrubbed, "removed deleted video from playlists");
        }

        // Asset removal is best effort once the row is gone; a failed delete
        // leaves an orphan on the store, not a dangling reference for users.
        self.cleanup_asset(&video.media_url).await;
        self.cleanup_asset(&video.thumbnail_url).await;

        Ok(())
    }

    pub async fn toggle_publish(&self, actor: Uuid, video_id: Uuid) -> Result<Video> {
        self.ensure_owned_by(actor, video_id).await?;

        video_repo::toggle_publish(&self.pool, video_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Video not found".to_string()))
    }

    async fn ensure_owned_by(&self, actor: Uuid, video_id: Uuid) -> Result<Video> {
        let video = video_repo::find_by_id(&self.pool, video_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Video not found".to_string()))?;

        if video.owner_id != actor {
            return Err(AppError::Forbidden(
                "You are not the owner of this video".to_string(),
            ));
        }

        Ok(video)
    }

    async fn cleanup_asset(&self, url: &str) {
        if let Err(e) = self.media.delete(url).await {
            tracing::warn!(url, "failed to delete media asset: {}", e);
        }
    }
}
