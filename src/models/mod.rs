/// Data structures for the engagement service: persisted entities, request
/// bodies, and the projections returned by the aggregation queries.
use actix_web::http::StatusCode;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Uniform success envelope: `{statusCode, data, message, success}` where
/// `success` is derived from the status code.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiResponse<T: Serialize> {
    pub status_code: u16,
    pub data: T,
    pub message: String,
    pub success: bool,
}

impl<T: Serialize> ApiResponse<T> {
    pub fn new(status: StatusCode, data: T, message: impl Into<String>) -> Self {
        Self {
            status_code: status.as_u16(),
            data,
            message: message.into(),
            success: status.as_u16() < 400,
        }
    }

    /// 200 OK envelope
    pub fn ok(data: T, message: impl Into<String>) -> Self {
        Self::new(StatusCode::OK, data, message)
    }

    /// 201 Created envelope
    pub fn created(data: T, message: impl Into<String>) -> Self {
        Self::new(StatusCode::CREATED, data, message)
    }
}

// ============================================
// Entities
// ============================================
//
// Accounts are owned by the identity service; this service only reads their
// public columns through the roster/feed/stats projections below.

#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Video {
    pub id: Uuid,
    pub owner_id: Uuid,
    pub title: String,
    pub description: String,
    pub media_url: String,
    pub thumbnail_url: String,
    /// Duration in seconds, reported by the media store at ingest time
    pub duration: f64,
    pub views: i64,
    pub is_published: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Comment {
    pub id: Uuid,
    /// Monotonic insertion sequence; tie-break for deterministic pagination
    #[serde(skip_serializing)]
    pub seq: i64,
    pub video_id: Uuid,
    pub owner_id: Uuid,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Tweet {
    pub id: Uuid,
    pub owner_id: Uuid,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Playlist with its ordered, duplicate-free set of member video ids.
///
/// Like and subscription records never surface as entities: a record's
/// presence is the relationship, so the repositories expose them as booleans
/// and counts only.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Playlist {
    pub id: Uuid,
    pub owner_id: Uuid,
    pub name: String,
    pub description: String,
    pub video_ids: Vec<Uuid>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

// ============================================
// Like targets
// ============================================

/// Tagged like target: one toggle path for every likeable kind instead of
/// three near-duplicate ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LikeTarget {
    Video(Uuid),
    Comment(Uuid),
    Tweet(Uuid),
}

impl LikeTarget {
    /// Discriminant stored in the `likes.target_kind` column.
    pub fn kind(&self) -> &'static str {
        match self {
            LikeTarget::Video(_) => "video",
            LikeTarget::Comment(_) => "comment",
            LikeTarget::Tweet(_) => "tweet",
        }
    }

    pub fn id(&self) -> Uuid {
        match self {
            LikeTarget::Video(id) | LikeTarget::Comment(id) | LikeTarget::Tweet(id) => *id,
        }
    }
}

// ============================================
// Aggregation projections
// ============================================

/// Public author profile joined into the comment feed (no email, no
/// credentials).
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct CommentWithAuthor {
    pub id: Uuid,
    pub video_id: Uuid,
    pub owner_id: Uuid,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub username: String,
    pub avatar_url: Option<String>,
}

/// Minimal public profile projected into subscriber / subscription rosters.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct PublicProfile {
    pub id: Uuid,
    pub username: String,
    pub email: String,
}

/// Flat channel dashboard projection, computed in a single statement so every
/// count reflects one storage snapshot.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct ChannelStats {
    pub username: String,
    pub avatar_url: Option<String>,
    pub cover_url: Option<String>,
    pub total_videos: i64,
    pub total_subscribers: i64,
    pub total_views: i64,
    pub total_likes: i64,
    pub total_tweets: i64,
    pub total_comments: i64,
}

/// Public shape of a published video in the channel listing.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct ChannelVideo {
    pub id: Uuid,
    pub media_url: String,
    pub thumbnail_url: String,
    pub title: String,
    pub description: String,
    pub views: i64,
    pub duration: f64,
}

/// Playlist hydrated with its member videos, in stored membership order.
#[derive(Debug, Clone, Serialize)]
pub struct PlaylistWithVideos {
    pub id: Uuid,
    pub owner_id: Uuid,
    pub name: String,
    pub description: String,
    pub videos: Vec<Video>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

// ============================================
// Request bodies
// ============================================

#[derive(Debug, Deserialize)]
pub struct CreatePlaylistRequest {
    pub name: String,
    #[serde(default)]
    pub description: String,
}

#[derive(Debug, Deserialize)]
pub struct UpdatePlaylistRequest {
    pub name: String,
    #[serde(default)]
    pub description: String,
}

#[derive(Debug, Deserialize)]
pub struct CreateCommentRequest {
    pub content: String,
}

#[derive(Debug, Deserialize)]
pub struct UpdateCommentRequest {
    pub content: String,
}

#[derive(Debug, Deserialize)]
pub struct CreateTweetRequest {
    pub content: String,
}

#[derive(Debug, Deserialize)]
pub struct UpdateTweetRequest {
    pub content: String,
}

/// Publish request: the client has staged both files with the media store and
/// hands us the staging references; the service ingests them and records the
/// returned permanent URLs.
#[derive(Debug, Deserialize)]
pub struct PublishVideoRequest {
    pub title: String,
    pub description: String,
    pub video_ref: String,
    pub thumbnail_ref: String,
}

#[derive(Debug, Deserialize)]
pub struct UpdateVideoRequest {
    pub title: String,
    pub description: String,
    /// Optional replacement thumbnail, staged with the media store
    pub thumbnail_ref: Option<String>,
}

// ============================================
// Response bodies
// ============================================

#[derive(Debug, Serialize)]
pub struct ToggleLikeResponse {
    pub is_liked: bool,
}

#[derive(Debug, Serialize)]
pub struct ToggleSubscriptionResponse {
    pub subscribed: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn envelope_success_tracks_status_code() {
        let ok = ApiResponse::ok(serde_json::json!({}), "done");
        assert_eq!(ok.status_code, 200);
        assert!(ok.success);

        let created = ApiResponse::created(serde_json::json!({}), "done");
        assert_eq!(created.status_code, 201);
        assert!(created.success);

        let failed = ApiResponse::new(StatusCode::BAD_REQUEST, serde_json::json!({}), "nope");
        assert!(!failed.success);
    }

    #[test]
    fn envelope_serializes_camel_case_keys() {
        let env = ApiResponse::ok(vec![1, 2, 3], "numbers");
        let json = serde_json::to_value(&env).expect("serializes");
        assert_eq!(json["statusCode"], 200);
        assert_eq!(json["success"], true);
        assert_eq!(json["data"], serde_json::json!([1, 2, 3]));
    }

    #[test]
    fn like_target_kind_discriminants() {
        let id = Uuid::new_v4();
        assert_eq!(LikeTarget::Video(id).kind(), "video");
        assert_eq!(LikeTarget::Comment(id).kind(), "comment");
        assert_eq!(LikeTarget::Tweet(id).kind(), "tweet");
        assert_eq!(LikeTarget::Tweet(id).id(), id);
    }
}
