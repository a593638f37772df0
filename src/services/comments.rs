/// Comment service: CRUD plus the enriched paginated feed.
use crate::db::{comment_repo, like_repo, video_repo};
use crate::error::{AppError, Result};
use crate::models::{Comment, CommentWithAuthor};
use crate::validators::{self, Page};
use sqlx::PgPool;
use uuid::Uuid;

#[derive(Clone)]
pub struct CommentService {
    pool: PgPool,
}

impl CommentService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Paginated feed for a video, newest first, each comment joined to its
    /// author's public profile. A page past the end of the feed (or a video
    /// with no comments at all) yields an empty list, not an error.
    pub async fn feed(&self, video_id: Uuid, page: Page) -> Result<Vec<CommentWithAuthor>> {
        if !video_repo::exists(&self.pool, video_id).await? {
            return Err(AppError::NotFound("Video not found".to_string()));
        }

        Ok(comment_repo::feed_for_video(&self.pool, video_id, page.limit, page.offset()).await?)
    }

    pub async fn add(&self, actor: Uuid, video_id: Uuid, content: &str) -> Result<Comment> {
        validators::validate_content("content", content)?;

        if !video_repo::exists(&self.pool, video_id).await? {
            return Err(AppError::NotFound("Video not found".to_string()));
        }

        Ok(comment_repo::create(&self.pool, video_id, actor, content.trim()).await?)
    }

    pub async fn update(&self, actor: Uuid, comment_id: Uuid, content: &str) -> Result<Comment> {
        validators::validate_content("content", content)?;
        self.ensure_owned_by(actor, comment_id).await?;

        comment_repo::update_content(&self.pool, comment_id, content.trim())
            .await?
            .ok_or_else(|| AppError::NotFound("Comment not found".to_string()))
    }

    /// Delete a comment together with any likes pointing at it.
    pub async fn delete(&self, actor: Uuid, comment_id: Uuid) -> Result<()> {
        self.ensure_owned_by(actor, comment_id).await?;

        comment_repo::delete(&self.pool, comment_id).await?;
        like_repo::delete_for_target(&self.pool, "comment", comment_id).await?;

        Ok(())
    }

    async fn ensure_owned_by(&self, actor: Uuid, comment_id: Uuid) -> Result<()> {
        let comment = comment_repo::find_by_id(&self.pool, comment_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Comment not found".to_string()))?;

        if comment.owner_id != actor {
            return Err(AppError::Forbidden(
                "You are not the owner of this comment".to_string(),
            ));
        }

        Ok(())
    }
}
