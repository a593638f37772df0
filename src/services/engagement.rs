/// Like toggle manager.
///
/// One generic toggle path for every likeable kind: the target is a tagged
/// [`LikeTarget`] and existence is resolved per kind before the flip. The
/// flip itself is a single atomic statement in the repository, so the
/// at-most-one-like-per-pair invariant holds under concurrent callers.
use crate::db::{comment_repo, like_repo, tweet_repo, video_repo};
use crate::error::{AppError, Result};
use crate::metrics;
use crate::models::LikeTarget;
use sqlx::PgPool;
use uuid::Uuid;

#[derive(Clone)]
pub struct LikeService {
    pool: PgPool,
}

impl LikeService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Flip the like state of `(actor, target)` and return the resulting
    /// state (`true` = now liked).
    pub async fn toggle(&self, actor: Uuid, target: LikeTarget) -> Result<bool> {
        self.ensure_target_exists(target).await?;

        let is_liked = like_repo::toggle(&self.pool, actor, target.kind(), target.id()).await?;

        metrics::record_toggle("like", is_liked);
        tracing::debug!(
            %actor,
            target_kind = target.kind(),
            target_id = %target.id(),
            is_liked,
            "like toggled"
        );

        Ok(is_liked)
    }

    /// Per-kind existence lookup: the target must exist and be of the
    /// expected kind before any relationship record is touched.
    async fn ensure_target_exists(&self, target: LikeTarget) -> Result<()> {
        let found = match target {
            LikeTarget::Video(id) => video_repo::exists(&self.pool, id).await?,
            LikeTarget::Comment(id) => comment_repo::find_by_id(&self.pool, id).await?.is_some(),
            LikeTarget::Tweet(id) => tweet_repo::exists(&self.pool, id).await?,
        };

        if !found {
            return Err(AppError::NotFound(match target {
                LikeTarget::Video(_) => "Video not found".to_string(),
                LikeTarget::Comment(_) => "Comment not found".to_string(),
                LikeTarget::Tweet(_) => "Tweet not found".to_string(),
            }));
        }

        Ok(())
    }
}
