use crate::models::Tweet;
use sqlx::PgPool;
use uuid::Uuid;

const TWEET_COLUMNS: &str = "id, owner_id, content, created_at, updated_at";

pub async fn create(pool: &PgPool, owner_id: Uuid, content: &str) -> Result<Tweet, sqlx::Error> {
    let tweet = sqlx::query_as::<_, Tweet>(&format!(
        r#"
        INSERT INTO tweets (owner_id, content)
        VALUES ($1, $2)
        RETURNING {TWEET_COLUMNS}
        "#,
    ))
    .bind(owner_id)
    .bind(content)
    .fetch_one(pool)
    .await?;

    Ok(tweet)
}

pub async fn find_by_id(pool: &PgPool, id: Uuid) -> Result<Option<Tweet>, sqlx::Error> {
    let tweet = sqlx::query_as::<_, Tweet>(&format!(
        "SELECT {TWEET_COLUMNS} FROM tweets WHERE id = $1",
    ))
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(tweet)
}

pub async fn exists(pool: &PgPool, id: Uuid) -> Result<bool, sqlx::Error> {
    let exists: bool = sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM tweets WHERE id = $1)")
        .bind(id)
        .fetch_one(pool)
        .await?;

    Ok(exists)
}

pub async fn find_by_owner(pool: &PgPool, owner_id: Uuid) -> Result<Vec<Tweet>, sqlx::Error> {
    let tweets = sqlx::query_as::<_, Tweet>(&format!(
        "SELECT {TWEET_COLUMNS} FROM tweets WHERE owner_id = $1 ORDER BY created_at DESC",
    ))
    .bind(owner_id)
    .fetch_all(pool)
    .await?;

    Ok(tweets)
}

pub async fn update_content(
    pool: &PgPool,
    id: Uuid,
    content: &str,
) -> Result<Option<Tweet>, sqlx::Error> {
    let tweet = sqlx::query_as::<_, Tweet>(&format!(
        r#"
        UPDATE tweets
        SET content = $2, updated_at = NOW()
        WHERE id = $1
        RETURNING {TWEET_COLUMNS}
        "#,
    ))
    .bind(id)
    .bind(content)
    .fetch_optional(pool)
    .await?;

    Ok(tweet)
}

pub async fn delete(pool: &PgPool, id: Uuid) -> Result<bool, sqlx::Error> {
    let result = sqlx::query("DELETE FROM tweets WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;

    Ok(result.rows_affected() > 0)
}
