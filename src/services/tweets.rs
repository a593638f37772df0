/// Tweet service: short text posts owned by a channel.
use crate::db::{like_repo, tweet_repo, user_repo};
use crate::error::{AppError, Result};
use crate::models::Tweet;
use crate::validators;
use sqlx::PgPool;
use uuid::Uuid;

#[derive(Clone)]
pub struct TweetService {
    pool: PgPool,
}

impl TweetService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, actor: Uuid, content: &str) -> Result<Tweet> {
        validators::validate_content("content", content)?;

        Ok(tweet_repo::create(&self.pool, actor, content.trim()).await?)
    }

    /// Tweets of a user, newest first. Empty is a valid result.
    pub async fn list_for_user(&self, user_id: Uuid) -> Result<Vec<Tweet>> {
        if !user_repo::exists(&self.pool, user_id).await? {
            return Err(AppError::NotFound("User not found".to_string()));
        }

        Ok(tweet_repo::find_by_owner(&self.pool, user_id).await?)
    }

    pub async fn update(&self, actor: Uuid, tweet_id: Uuid, content: &str) -> Result<Tweet> {
        validators::validate_content("content", content)?;
        self.ensure_owned_by(actor, tweet_id).await?;

        tweet_repo::update_content(&self.pool, tweet_id, content.trim())
            .await?
            .ok_or_else(|| AppError::NotFound("Tweet not found".to_string()))
    }

    /// Delete a tweet together with any likes pointing at it.
    pub async fn delete(&self, actor: Uuid, tweet_id: Uuid) -> Result<()> {
        self.ensure_owned_by(actor, tweet_id).await?;

        tweet_repo::delete(&self.pool, tweet_id).await?;
        like_repo::delete_for_target(&self.pool, "tweet", tweet_id).await?;

        Ok(())
    }

    async fn ensure_owned_by(&self, actor: Uuid, tweet_id: Uuid) -> Result<()> {
        let tweet = tweet_repo::find_by_id(&self.pool, tweet_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Tweet not found".to_string()))?;

        if tweet.owner_id != actor {
            return Err(AppError::Forbidden(
                "You are not the owner of this tweet".to_string(),
            ));
        }

        Ok(())
    }
}
