/// Database access layer: one repository module per collection.
///
/// Repositories own all SQL. Toggle and set-membership writes are single
/// statements so the read-then-write is atomic as a unit; callers never do a
/// check-then-act across two round trips.
pub mod comment_repo;
pub mod dashboard_repo;
pub mod like_repo;
pub mod playlist_repo;
pub mod subscription_repo;
pub mod tweet_repo;
pub mod user_repo;
pub mod video_repo;
