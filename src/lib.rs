/// Engagement Service Library
///
/// Backend service for a video-sharing platform: likes, subscriptions,
/// playlists, comments, tweets and the channel dashboard. The interesting
/// parts are the toggle-style relationship writes (at most one record per
/// actor/target pair, flipped atomically) and the aggregation queries that
/// join across collections for enriched read views.
///
/// # Modules
///
/// - `handlers`: HTTP request handlers (thin orchestrators)
/// - `models`: Entities, request/response DTOs and the response envelope
/// - `services`: Business logic layer (toggle manager, playlist membership,
///   aggregation queries, video publishing)
/// - `db`: Database access layer, one repository module per collection
/// - `middleware`: Bearer-token authentication
/// - `error`: Error types and HTTP mapping
/// - `config`: Configuration management
/// - `metrics`: Prometheus collectors and the `/metrics` endpoint
pub mod config;
pub mod db;
pub mod error;
pub mod handlers;
pub mod metrics;
pub mod middleware;
pub mod models;
pub mod services;
pub mod validators;

pub use config::Config;
pub use error::{AppError, Result};
