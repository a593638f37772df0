/// HTTP request handlers: thin orchestrators over the service layer.
pub mod comments;
pub mod dashboard;
pub mod health;
pub mod likes;
pub mod playlists;
pub mod subscriptions;
pub mod tweets;
pub mod videos;

pub use comments::*;
pub use dashboard::*;
pub use health::*;
pub use likes::*;
pub use playlists::*;
pub use subscriptions::*;
pub use tweets::*;
pub use videos::*;
