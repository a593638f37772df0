use crate::models::ChannelStats;
use sqlx::PgPool;
use uuid::Uuid;

/// Channel dashboard statistics, computed in one statement.
///
/// Every count is a scalar subaggregate of the same query, so the whole
/// projection reflects a single storage snapshot instead of N sequential
/// round trips. `total_likes` counts likes across the channel's videos;
/// `total_views` sums their view counters. Returns `None` only when the user
/// row itself is missing; zero counts are a valid result.
pub async fn channel_stats(
    pool: &PgPool,
    user_id: Uuid,
) -> Result<Option<ChannelStats>, sqlx::Error> {
    let stats = sqlx::query_as::<_, ChannelStats>(
        r#"
        SELECT u.username,
               u.avatar_url,
               u.cover_url,
               (SELECT COUNT(*) FROM videos v
                    WHERE v.owner_id = u.id)                       AS total_videos,
               (SELECT COUNT(*) FROM subscriptions s
                    WHERE s.channel_id = u.id)                     AS total_subscribers,
               (SELECT COALESCE(SUM(v.views), 0)::BIGINT FROM videos v
                    WHERE v.owner_id = u.id)                       AS total_views,
               (SELECT COUNT(*) FROM likes l
                    JOIN videos v ON v.id = l.target_id
                    WHERE l.target_kind = 'video'
                      AND v.owner_id = u.id)                       AS total_likes,
               (SELECT COUNT(*) FROM tweets t
                    WHERE t.owner_id = u.id)                       AS total_tweets,
               (SELECT COUNT(*) FROM comments c
                    WHERE c.owner_id = u.id)                       AS total_comments
        FROM users u
        WHERE u.id = $1
        "#,
    )
    .bind(user_id)
    .fetch_optional(pool)
    .await?;

    Ok(stats)
}
