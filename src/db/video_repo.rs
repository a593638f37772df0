use crate::models::{ChannelVideo, Video};
use sqlx::PgPool;
use uuid::Uuid;

const VIDEO_COLUMNS: &str = "id, owner_id, title, description, media_url, thumbnail_url, \
                             duration, views, is_published, created_at, updated_at";

#[allow(clippy::too_many_arguments)]
pub async fn insert(
    pool: &PgPool,
    owner_id: Uuid,
    title: &str,
    description: &str,
    media_url: &str,
    thumbnail_url: &str,
    duration: f64,
) -> Result<Video, sqlx::Error> {
    let video = sqlx::query_as::<_, Video>(&format!(
        r#"
        INSERT INTO videos (owner_id, title, description, media_url, thumbnail_url, duration)
        VALUES ($1, $2, $3, $4, $5, $6)
        RETURNING {VIDEO_COLUMNS}
        "#,
    ))
    .bind(owner_id)
    .bind(title)
    .bind(description)
    .bind(media_url)
    .bind(thumbnail_url)
    .bind(duration)
    .fetch_one(pool)
    .await?;

    Ok(video)
}

pub async fn find_by_id(pool: &PgPool, id: Uuid) -> Result<Option<Video>, sqlx::Error> {
    let video = sqlx::query_as::<_, Video>(&format!(
        "SELECT {VIDEO_COLUMNS} FROM videos WHERE id = $1",
    ))
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(video)
}

pub async fn exists(pool: &PgPool, id: Uuid) -> Result<bool, sqlx::Error> {
    let exists: bool = sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM videos WHERE id = $1)")
        .bind(id)
        .fetch_one(pool)
        .await?;

    Ok(exists)
}

pub async fn update_metadata(
    pool: &PgPool,
    id: Uuid,
    title: &str,
    description: &str,
    thumbnail_url: Option<&str>,
) -> Result<Option<Video>, sqlx::Error> {
    let video = sqlx::query_as::<_, Video>(&format!(
        r#"
        UPDATE videos
        SET title = $2,
            description = $3,
            thumbnail_url = COALESCE($4, thumbnail_url),
            updated_at = NOW()
        WHERE id = $1
        RETURNING {VIDEO_COLUMNS}
        "#,
    ))
    .bind(id)
    .bind(title)
    .bind(description)
    .bind(thumbnail_url)
    .fetch_optional(pool)
    .await?;

    Ok(video)
}

pub async fn toggle_publish(pool: &PgPool, id: Uuid) -> Result<Option<Video>, sqlx::Error> {
    let video = sqlx::query_as::<_, Video>(&format!(
        r#"
        UPDATE videos
        SET is_published = NOT is_published, updated_at = NOW()
        WHERE id = $1
        RETURNING {VIDEO_COLUMNS}
        "#,
    ))
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(video)
}

pub async fn delete(pool: &PgPool, id: Uuid) -> Result<bool, sqlx::Error> {
    let result = sqlx::query("DELETE FROM videos WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;

    Ok(result.rows_affected() > 0)
}

/// Published videos of a channel in their public shape, most recently
/// created first.
pub async fn channel_videos(
    pool: &PgPool,
    owner_id: Uuid,
) -> Result<Vec<ChannelVideo>, sqlx::Error> {
    let videos = sqlx::query_as::<_, ChannelVideo>(
        r#"
        SELECT id, media_url, thumbnail_url, title, description, views, duration
        FROM videos
        WHERE owner_id = $1 AND is_published = TRUE
        ORDER BY created_at DESC
        "#,
    )
    .bind(owner_id)
    .fetch_all(pool)
    .await?;

    Ok(videos)
}
