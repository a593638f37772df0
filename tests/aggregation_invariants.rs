//! Aggregation and membership-set invariants against a live database.
//!
//! Needs a PostgreSQL instance (`DATABASE_URL`); run with
//! `cargo test -- --ignored`.

use engagement_service::db::like_repo;
use engagement_service::services::{CommentService, DashboardService, PlaylistService};
use engagement_service::validators::clamp_pagination;
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use uuid::Uuid;

async fn test_pool() -> PgPool {
    let url = std::env::var("DATABASE_URL").expect("DATABASE_URL must be set for ignored tests");
    let pool = PgPoolOptions::new()
        .max_connections(10)
        .connect(&url)
        .await
        .expect("database connects");

    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .expect("migrations apply");

    pool
}

async fn seed_user(pool: &PgPool) -> Uuid {
    let tag = Uuid::new_v4().simple().to_string();
    sqlx::query_scalar("INSERT INTO users (username, email) VALUES ($1, $2) RETURNING id")
        .bind(format!("user_{tag}"))
        .bind(format!("{tag}@example.com"))
        .fetch_one(pool)
        .await
        .expect("user seeds")
}

async fn seed_video_with_views(pool: &PgPool, owner: Uuid, views: i64) -> Uuid {
    sqlx::query_scalar(
        r#"
        INSERT INTO videos (owner_id, title, description, media_url, thumbnail_url, views)
        VALUES ($1, 'clip', 'desc', 'https://cdn/clip.mp4', 'https://cdn/clip.png', $2)
        RETURNING id
        "#,
    )
    .bind(owner)
    .bind(views)
    .fetch_one(pool)
    .await
    .expect("video seeds")
}

#[tokio::test]
#[ignore = "requires a PostgreSQL instance (set DATABASE_URL)"]
async fn channel_stats_sum_views_and_likes_across_owned_videos() {
    let pool = test_pool().await;
    let owner = seed_user(&pool).await;

    // Videos with views [10, 5, 0] and like counts [2, 0, 1].
    let v1 = seed_video_with_views(&pool, owner, 10).await;
    let _v2 = seed_video_with_views(&pool, owner, 5).await;
    let v3 = seed_video_with_views(&pool, owner, 0).await;

    let fan_a = seed_user(&pool).await;
    let fan_b = seed_user(&pool).await;
    assert!(like_repo::toggle(&pool, fan_a, "video", v1).await.unwrap());
    assert!(like_repo::toggle(&pool, fan_b, "video", v1).await.unwrap());
    assert!(like_repo::toggle(&pool, fan_a, "video", v3).await.unwrap());

    let stats = DashboardService::new(pool.clone())
        .stats(owner)
        .await
        .expect("stats compute");

    assert_eq!(stats.total_videos, 3);
    assert_eq!(stats.total_views, 15);
    assert_eq!(stats.total_likes, 3);
    assert_eq!(stats.total_subscribers, 0);
}

#[tokio::test]
#[ignore = "requires a PostgreSQL instance (set DATABASE_URL)"]
async fn playlist_membership_is_an_ordered_duplicate_free_set() {
    let pool = test_pool().await;
    let owner = seed_user(&pool).await;
    let first = seed_video_with_views(&pool, owner, 0).await;
    let second = seed_video_with_views(&pool, owner, 0).await;

    let service = PlaylistService::new(pool.clone());
    let playlist = service
        .create(owner, "watch later", "")
        .await
        .expect("playlist creates");

    service.add_video(owner, playlist.id, first).await.unwrap();
    service.add_video(owner, playlist.id, second).await.unwrap();
    // Duplicate add is an idempotent no-op.
    let after_dup = service.add_video(owner, playlist.id, first).await.unwrap();
    assert_eq!(after_dup.video_ids, vec![first, second]);

    // Removing a non-member is a no-op returning the unchanged set.
    let after_rm = service
        .remove_video(owner, playlist.id, Uuid::new_v4())
        .await
        .unwrap();
    assert_eq!(after_rm.video_ids, vec![first, second]);

    let after_real_rm = service.remove_video(owner, playlist.id, first).await.unwrap();
    assert_eq!(after_real_rm.video_ids, vec![second]);
}

#[tokio::test]
#[ignore = "requires a PostgreSQL instance (set DATABASE_URL)"]
async fn comment_pages_are_disjoint_and_newest_first() {
    let pool = test_pool().await;
    let owner = seed_user(&pool).await;
    let video = seed_video_with_views(&pool, owner, 0).await;

    let service = CommentService::new(pool.clone());
    let mut created = Vec::new();
    for i in 1..=10 {
        let comment = service
            .add(owner, video, &format!("comment {i}"))
            .await
            .expect("comment creates");
        created.push(comment.id);
    }

    let page1 = service
        .feed(video, clamp_pagination(Some(1), Some(3)))
        .await
        .unwrap();
    let page2 = service
        .feed(video, clamp_pagination(Some(2), Some(3)))
        .await
        .unwrap();

    let ids: Vec<Uuid> = page1.iter().chain(page2.iter()).map(|c| c.id).collect();

    // Newest-first: the concatenation covers the six most recent comments in
    // reverse creation order, with no gaps or repeats.
    let expected: Vec<Uuid> = created.iter().rev().take(6).copied().collect();
    assert_eq!(ids, expected);

    // A page past the end is a success with an empty list.
    let empty = service
        .feed(video, clamp_pagination(Some(100), Some(3)))
        .await
        .unwrap();
    assert!(empty.is_empty());
}
