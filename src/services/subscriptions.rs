/// Subscription toggle manager and rosters.
use crate::db::{subscription_repo, user_repo};
use crate::error::{AppError, Result};
use crate::metrics;
use crate::models::PublicProfile;
use sqlx::PgPool;
use uuid::Uuid;

#[derive(Clone)]
pub struct SubscriptionService {
    pool: PgPool,
}

impl SubscriptionService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Flip the subscription state of `(subscriber, channel)` and return the
    /// resulting state (`true` = now subscribed).
    pub async fn toggle(&self, subscriber: Uuid, channel: Uuid) -> Result<bool> {
        if subscriber == channel {
            return Err(AppError::BadRequest(
                "You cannot subscribe to your own channel".to_string(),
            ));
        }

        if !user_repo::exists(&self.pool, channel).await? {
            return Err(AppError::NotFound("Channel not found".to_string()));
        }

        let subscribed = subscription_repo::toggle(&self.pool, subscriber, channel).await?;

        metrics::record_toggle("subscription", subscribed);
        tracing::debug!(%subscriber, %channel, subscribed, "subscription toggled");

        Ok(subscribed)
    }

    /// Accounts subscribed to a channel. An empty roster is a valid result,
    /// not an error.
    pub async fn subscribers_of(&self, channel: Uuid) -> Result<Vec<PublicProfile>> {
        if !user_repo::exists(&self.pool, channel).await? {
            return Err(AppError::NotFound("Channel not found".to_string()));
        }

        Ok(subscription_repo::subscribers_of(&self.pool, channel).await?)
    }

    /// Channels an account subscribes to. Empty is a valid result.
    pub async fn subscribed_channels(&self, subscriber: Uuid) -> Result<Vec<PublicProfile>> {
        if !user_repo::exists(&self.pool, subscriber).await? {
            return Err(AppError::NotFound("User not found".to_string()));
        }

        Ok(subscription_repo::subscribed_channels(&self.pool, subscriber).await?)
    }
}
