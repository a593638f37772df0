//! Toggle invariants against a live database.
//!
//! These tests need a PostgreSQL instance (`DATABASE_URL`) and are ignored by
//! default; run them with `cargo test -- --ignored`.

use engagement_service::db::{like_repo, subscription_repo};
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use uuid::Uuid;

async fn test_pool() -> PgPool {
    let url = std::env::var("DATABASE_URL").expect("DATABASE_URL must be set for ignored tests");
    let pool = PgPoolOptions::new()
        .max_connections(20)
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
    sqlx::query_scalar(
        "INSERT INTO users (username, email) VALUES ($1, $2) RETURNING id",
    )
    .bind(format!("user_{tag}"))
    .bind(format!("{tag}@example.com"))
    .fetch_one(pool)
    .await
    .expect("user seeds")
}

async fn seed_video(pool: &PgPool, owner: Uuid) -> Uuid {
    sqlx::query_scalar(
        r#"
        INSERT INTO videos (owner_id, title, description, media_url, thumbnail_url, duration)
        VALUES ($1, 'clip', 'desc', 'https://cdn/clip.mp4', 'https://cdn/clip.png', 12.5)
        RETURNING id
        "#,
    )
    .bind(owner)
    .fetch_one(pool)
    .await
    .expect("video seeds")
}

async fn pair_rows(pool: &PgPool, liked_by: Uuid, target_id: Uuid) -> i64 {
    sqlx::query_scalar(
        "SELECT COUNT(*) FROM likes WHERE liked_by = $1 AND target_kind = 'video' AND target_id = $2",
    )
    .bind(liked_by)
    .bind(target_id)
    .fetch_one(pool)
    .await
    .expect("count reads")
}

#[tokio::test]
#[ignore = "requires a PostgreSQL instance (set DATABASE_URL)"]
async fn consecutive_toggles_alternate_and_round_trip() {
    let pool = test_pool().await;
    let actor = seed_user(&pool).await;
    let video = seed_video(&pool, actor).await;

    assert!(like_repo::toggle(&pool, actor, "video", video).await.unwrap());
    assert!(like_repo::has_liked(&pool, actor, "video", video).await.unwrap());
    assert_eq!(like_repo::count_for_target(&pool, "video", video).await.unwrap(), 1);

    assert!(!like_repo::toggle(&pool, actor, "video", video).await.unwrap());
    assert!(!like_repo::has_liked(&pool, actor, "video", video).await.unwrap());
    assert_eq!(like_repo::count_for_target(&pool, "video", video).await.unwrap(), 0);

    assert!(like_repo::toggle(&pool, actor, "video", video).await.unwrap());
    assert_eq!(pair_rows(&pool, actor, video).await, 1);
}

#[tokio::test]
#[ignore = "requires a PostgreSQL instance (set DATABASE_URL)"]
async fn concurrent_togglers_never_duplicate_the_pair() {
    let pool = test_pool().await;
    let actor = seed_user(&pool).await;
    let video = seed_video(&pool, actor).await;

    let mut tasks = Vec::new();
    for _ in 0..16 {
        let pool = pool.clone();
        tasks.push(tokio::spawn(async move {
            like_repo::toggle(&pool, actor, "video", video).await
        }));
    }
    for task in tasks {
        task.await.expect("task joins").expect("toggle succeeds");
    }

    // Whatever interleaving happened, the uniqueness invariant must hold.
    assert!(pair_rows(&pool, actor, video).await <= 1);
}

#[tokio::test]
#[ignore = "requires a PostgreSQL instance (set DATABASE_URL)"]
async fn subscription_toggle_round_trips() {
    let pool = test_pool().await;
    let subscriber = seed_user(&pool).await;
    let channel = seed_user(&pool).await;

    assert!(subscription_repo::toggle(&pool, subscriber, channel).await.unwrap());
    assert!(subscription_repo::is_subscribed(&pool, subscriber, channel).await.unwrap());

    assert!(!subscription_repo::toggle(&pool, subscriber, channel).await.unwrap());
    assert!(!subscription_repo::is_subscribed(&pool, subscriber, channel).await.unwrap());
}
