use crate::models::{Playlist, Video};
use sqlx::PgPool;
use uuid::Uuid;

const PLAYLIST_COLUMNS: &str = "id, owner_id, name, description, video_ids, created_at, updated_at";

pub async fn create(
    pool: &PgPool,
    owner_id: Uuid,
    name: &str,
    description: &str,
) -> Result<Playlist, sqlx::Error> {
    let playlist = sqlx::query_as::<_, Playlist>(&format!(
        r#"
        INSERT INTO playlists (owner_id, name, description)
        VALUES ($1, $2, $3)
        RETURNING {PLAYLIST_COLUMNS}
        "#,
    ))
    .bind(owner_id)
    .bind(name)
    .bind(description)
    .fetch_one(pool)
    .await?;

    Ok(playlist)
}

pub async fn find_by_id(pool: &PgPool, id: Uuid) -> Result<Option<Playlist>, sqlx::Error> {
    let playlist = sqlx::query_as::<_, Playlist>(&format!(
        "SELECT {PLAYLIST_COLUMNS} FROM playlists WHERE id = $1",
    ))
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(playlist)
}

pub async fn find_by_owner(pool: &PgPool, owner_id: Uuid) -> Result<Vec<Playlist>, sqlx::Error> {
    let playlists = sqlx::query_as::<_, Playlist>(&format!(
        "SELECT {PLAYLIST_COLUMNS} FROM playlists WHERE owner_id = $1 ORDER BY created_at DESC",
    ))
    .bind(owner_id)
    .fetch_all(pool)
    .await?;

    Ok(playlists)
}

pub async fn rename(
    pool: &PgPool,
    id: Uuid,
    name: &str,
    description: &str,
) -> Result<Option<Playlist>, sqlx::Error> {
    let playlist = sqlx::query_as::<_, Playlist>(&format!(
        r#"
        UPDATE playlists
        SET name = $2, description = $3, updated_at = NOW()
        WHERE id = $1
        RETURNING {PLAYLIST_COLUMNS}
        "#,
    ))
    .bind(id)
    .bind(name)
    .bind(description)
    .fetch_optional(pool)
    .await?;

    Ok(playlist)
}

pub async fn delete(pool: &PgPool, id: Uuid) -> Result<bool, sqlx::Error> {
    let result = sqlx::query("DELETE FROM playlists WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;

    Ok(result.rows_affected() > 0)
}

/// Append a video to the membership set iff it is not already a member.
///
/// Single atomic set-union update: the guard and the append happen in one
/// statement, so concurrent adds to the same playlist cannot lose updates or
/// introduce duplicates. Returns the updated playlist; when the video was
/// already a member the row is returned unchanged.
pub async fn add_video(
    pool: &PgPool,
    playlist_id: Uuid,
    video_id: Uuid,
) -> Result<Option<Playlist>, sqlx::Error> {
    let playlist = sqlx::query_as::<_, Playlist>(&format!(
        r#"
        UPDATE playlists
        SET video_ids = CASE
                WHEN $2 = ANY(video_ids) THEN video_ids
                ELSE array_append(video_ids, $2)
            END,
            updated_at = CASE WHEN $2 = ANY(video_ids) THEN updated_at ELSE NOW() END
        WHERE id = $1
        RETURNING {PLAYLIST_COLUMNS}
        "#,
    ))
    .bind(playlist_id)
    .bind(video_id)
    .fetch_optional(pool)
    .await?;

    Ok(playlist)
}

/// Remove all occurrences of a video from the membership set; no-op when the
/// video is not a member.
pub async fn remove_video(
    pool: &PgPool,
    playlist_id: Uuid,
    video_id: Uuid,
) -> Result<Option<Playlist>, sqlx::Error> {
    let playlist = sqlx::query_as::<_, Playlist>(&format!(
        r#"
        UPDATE playlists
        SET video_ids = array_remove(video_ids, $2), updated_at = NOW()
        WHERE id = $1
        RETURNING {PLAYLIST_COLUMNS}
        "#,
    ))
    .bind(playlist_id)
    .bind(video_id)
    .fetch_optional(pool)
    .await?;

    Ok(playlist)
}

/// Scrub a deleted video from every playlist that references it.
pub async fn scrub_video(pool: &PgPool, video_id: Uuid) -> Result<u64, sqlx::Error> {
    let result = sqlx::query(
        r#"
        UPDATE playlists
        SET video_ids = array_remove(video_ids, $1), updated_at = NOW()
        WHERE $1 = ANY(video_ids)
        "#,
    )
    .bind(video_id)
    .execute(pool)
    .await?;

    Ok(result.rows_affected())
}

/// Hydrate the member videos of a playlist, preserving membership order.
pub async fn member_videos(
    pool: &PgPool,
    video_ids: &[Uuid],
) -> Result<Vec<Video>, sqlx::Error> {
    if video_ids.is_empty() {
        return Ok(Vec::new());
    }

    let videos = sqlx::query_as::<_, Video>(
        r#"
        SELECT v.id, v.owner_id, v.title, v.description, v.media_url, v.thumbnail_url,
               v.duration, v.views, v.is_published, v.created_at, v.updated_at
        FROM videos v
        JOIN unnest($1::uuid[]) WITH ORDINALITY AS m(id, ord) ON v.id = m.id
        ORDER BY m.ord
        "#,
    )
    .bind(video_ids)
    .fetch_all(pool)
    .await?;

    Ok(videos)
}
