/// Business logic layer.
///
/// - `engagement`: toggle-style like relationships
/// - `subscriptions`: toggle-style channel subscriptions and rosters
/// - `playlists`: playlist CRUD and the ordered membership set
/// - `comments`: comment CRUD and the enriched paginated feed
/// - `tweets`: tweet CRUD
/// - `videos`: video lifecycle incl. media-store coordination
/// - `dashboard`: channel statistics and video listing
/// - `media_store`: thin client for the external media store
pub mod comments;
pub mod dashboard;
pub mod engagement;
pub mod media_store;
pub mod playlists;
pub mod subscriptions;
pub mod tweets;
pub mod videos;

pub use comments::CommentService;
pub use dashboard::DashboardService;
pub use engagement::LikeService;
pub use media_store::{MediaStoreClient, StoredMedia};
pub use playlists::PlaylistService;
pub use subscriptions::SubscriptionService;
pub use tweets::TweetService;
pub use videos::VideoService;
