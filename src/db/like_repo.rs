use sqlx::PgPool;
use uuid::Uuid;

/// Flip the like state for `(liked_by, kind, target_id)` in one statement.
///
/// The data-modifying CTE deletes the record if present; the insert only runs
/// when the delete removed nothing. Together with the unique index on the
/// triple this keeps at most one record per pair even under concurrent
/// togglers. Returns the resulting state: `true` when the call created the
/// like, `false` when it removed it.
pub async fn toggle(
    pool: &PgPool,
    liked_by: Uuid,
    kind: &str,
    target_id: Uuid,
) -> Result<bool, sqlx::Error> {
    let is_liked: bool = sqlx::query_scalar(
        r#"
        WITH removed AS (
            DELETE FROM likes
            WHERE liked_by = $1 AND target_kind = $2 AND target_id = $3
            RETURNING id
        ), inserted AS (
            INSERT INTO likes (liked_by, target_kind, target_id)
            SELECT $1, $2, $3
            WHERE NOT EXISTS (SELECT 1 FROM removed)
            ON CONFLICT (liked_by, target_kind, target_id) DO NOTHING
            RETURNING id
        )
        SELECT EXISTS (SELECT 1 FROM inserted)
        "#,
    )
    .bind(liked_by)
    .bind(kind)
    .bind(target_id)
    .fetch_one(pool)
    .await?;

    Ok(is_liked)
}

/// Check if a user has liked a target
pub async fn has_liked(
    pool: &PgPool,
    liked_by: Uuid,
    kind: &str,
    target_id: Uuid,
) -> Result<bool, sqlx::Error> {
    let exists: bool = sqlx::query_scalar(
        r#"
        SELECT EXISTS(
            SELECT 1 FROM likes
            WHERE liked_by = $1 AND target_kind = $2 AND target_id = $3
        )
        "#,
    )
    .bind(liked_by)
    .bind(kind)
    .bind(target_id)
    .fetch_one(pool)
    .await?;

    Ok(exists)
}

/// Count likes on a target
pub async fn count_for_target(
    pool: &PgPool,
    kind: &str,
    target_id: Uuid,
) -> Result<i64, sqlx::Error> {
    let count: i64 = sqlx::query_scalar(
        r#"
        SELECT COUNT(*) FROM likes
        WHERE target_kind = $1 AND target_id = $2
        "#,
    )
    .bind(kind)
    .bind(target_id)
    .fetch_one(pool)
    .await?;

    Ok(count)
}

/// Remove every like pointing at a target; used when the target is deleted.
pub async fn delete_for_target(
    pool: &PgPool,
    kind: &str,
    target_id: Uuid,
) -> Result<u64, sqlx::Error> {
    let result = sqlx::query(
        r#"
        DELETE FROM likes
        WHERE target_kind = $1 AND target_id = $2
        "#,
    )
    .bind(kind)
    .bind(target_id)
    .execute(pool)
    .await?;

    Ok(result.rows_affected())
}
