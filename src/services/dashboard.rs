/// Channel dashboard: statistics and the published-video listing for the
/// authenticated caller.
use crate::db::{dashboard_repo, video_repo};
use crate::error::{AppError, Result};
use crate::models::{ChannelStats, ChannelVideo};
use sqlx::PgPool;
use uuid::Uuid;

#[derive(Clone)]
pub struct DashboardService {
    pool: PgPool,
}

impl DashboardService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Aggregate statistics for the caller's channel. A channel with no
    /// content reports zeros, not an error.
    pub async fn stats(&self, actor: Uuid) -> Result<ChannelStats> {
        dashboard_repo::channel_stats(&self.pool, actor)
            .await?
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))
    }

    /// Published videos of the caller's channel, most recently created first.
    /// Empty is a valid result.
    pub async fn videos(&self, actor: Uuid) -> Result<Vec<ChannelVideo>> {
        Ok(video_repo::channel_videos(&self.pool, actor).await?)
    }
}
