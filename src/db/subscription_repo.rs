use crate::models::PublicProfile;
use sqlx::PgPool;
use uuid::Uuid;

/// Flip the subscription state for `(subscriber, channel)` in one statement,
/// mirroring the like toggle. Returns `true` when the call created the
/// subscription, `false` when it removed it.
pub async fn toggle(
    pool: &PgPool,
    subscriber_id: Uuid,
    channel_id: Uuid,
) -> Result<bool, sqlx::Error> {
    let subscribed: bool = sqlx::query_scalar(
        r#"
        WITH removed AS (
            DELETE FROM subscriptions
            WHERE subscriber_id = $1 AND channel_id = $2
            RETURNING id
        ), inserted AS (
            INSERT INTO subscriptions (subscriber_id, channel_id)
            SELECT $1, $2
            WHERE NOT EXISTS (SELECT 1 FROM removed)
            ON CONFLICT (subscriber_id, channel_id) DO NOTHING
            RETURNING id
        )
        SELECT EXISTS (SELECT 1 FROM inserted)
        "#,
    )
    .bind(subscriber_id)
    .bind(channel_id)
    .fetch_one(pool)
    .await?;

    Ok(subscribed)
}

/// Check if a subscription exists
pub async fn is_subscribed(
    pool: &PgPool,
    subscriber_id: Uuid,
    channel_id: Uuid,
) -> Result<bool, sqlx::Error> {
    let exists: bool = sqlx::query_scalar(
        r#"
        SELECT EXISTS(
            SELECT 1 FROM subscriptions
            WHERE subscriber_id = $1 AND channel_id = $2
        )
        "#,
    )
    .bind(subscriber_id)
    .bind(channel_id)
    .fetch_one(pool)
    .await?;

    Ok(exists)
}

/// Roster of accounts subscribed to a channel, oldest subscription first.
pub async fn subscribers_of(
    pool: &PgPool,
    channel_id: Uuid,
) -> Result<Vec<PublicProfile>, sqlx::Error> {
    let subscribers = sqlx::query_as::<_, PublicProfile>(
        r#"
        SELECT u.id, u.username, u.email
        FROM subscriptions s
        JOIN users u ON u.id = s.subscriber_id
        WHERE s.channel_id = $1
        ORDER BY s.created_at ASC
        "#,
    )
    .bind(channel_id)
    .fetch_all(pool)
    .await?;

    Ok(subscribers)
}

/// Roster of channels an account subscribes to, oldest subscription first.
pub async fn subscribed_channels(
    pool: &PgPool,
    subscriber_id: Uuid,
) -> Result<Vec<PublicProfile>, sqlx::Error> {
    let channels = sqlx::query_as::<_, PublicProfile>(
        r#"
        SELECT u.id, u.username, u.email
        FROM subscriptions s
        JOIN users u ON u.id = s.channel_id
        WHERE s.subscriber_id = $1
        ORDER BY s.created_at ASC
        "#,
    )
    .bind(subscriber_id)
    .fetch_all(pool)
    .await?;

    Ok(channels)
}
