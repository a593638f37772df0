use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App, HttpServer};
use anyhow::Context;
use engagement_service::handlers;
use engagement_service::metrics;
use engagement_service::middleware::RequireAuth;
use engagement_service::services::{
    CommentService, DashboardService, LikeService, MediaStoreClient, PlaylistService,
    SubscriptionService, TweetService, VideoService,
};
use sqlx::postgres::PgPoolOptions;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Engagement Service
///
/// Likes, subscriptions, playlists, comments, tweets and the channel
/// dashboard for the video platform.
///
/// # Routes
///
/// - `/api/v1/likes/*` - Toggle likes on videos, comments, tweets
/// - `/api/v1/subscriptions/*` - Toggle subscriptions, rosters
/// - `/api/v1/playlists/*` - Playlist CRUD and membership
/// - `/api/v1/comments/*` - Comment CRUD and the paginated feed
/// - `/api/v1/tweets/*` - Tweet CRUD
/// - `/api/v1/videos/*` - Video lifecycle
/// - `/api/v1/dashboard/*` - Channel stats and video listing
#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,actix_web=debug,sqlx=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = match engagement_service::Config::from_env() {
        Ok(cfg) => cfg,
        Err(e) => {
            tracing::error!("Configuration loading failed: {:#}", e);
            eprintln!("ERROR: Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    tracing::info!("Starting engagement-service v{}", env!("CARGO_PKG_VERSION"));
    tracing::info!("Environment: {}", config.app.env);

    // Initialize database connection pool
    let db_pool = match PgPoolOptions::new()
        .max_connections(config.database.max_connections)
        .connect(&config.database.url)
        .await
    {
        Ok(pool) => pool,
        Err(e) => {
            tracing::error!("Database pool creation failed: {:#}", e);
            eprintln!("ERROR: Failed to create database pool: {}", e);
            std::process::exit(1);
        }
    };

    sqlx::migrate!("./migrations")
        .run(&db_pool)
        .await
        .context("database migration failed")?;

    tracing::info!("Connected to database, migrations applied");

    let media_client = Arc::new(
        MediaStoreClient::from_config(&config.media)
            .context("media store client initialization failed")?,
    );

    let like_service = web::Data::new(LikeService::new(db_pool.clone()));
    let subscription_service = web::Data::new(SubscriptionService::new(db_pool.clone()));
    let playlist_service = web::Data::new(PlaylistService::new(db_pool.clone()));
    let comment_service = web::Data::new(CommentService::new(db_pool.clone()));
    let tweet_service = web::Data::new(TweetService::new(db_pool.clone()));
    let video_service = web::Data::new(VideoService::new(db_pool.clone(), media_client.clone()));
    let dashboard_service = web::Data::new(DashboardService::new(db_pool.clone()));
    let pool_data = web::Data::new(db_pool);

    let bind_address = format!("{}:{}", config.app.host, config.app.port);
    tracing::info!("Starting HTTP server at {}", bind_address);

    HttpServer::new(move || {
        // Build CORS configuration
        let mut cors = Cors::default();
        for origin in config.cors.allowed_origins.split(',') {
            let origin = origin.trim();
            if origin == "*" {
                cors = cors.allow_any_origin();
            } else {
                cors = cors.allowed_origin(origin);
            }
        }
        cors = cors.allow_any_method().allow_any_header().max_age(3600);

        App::new()
            .app_data(pool_data.clone())
            .app_data(like_service.clone())
            .app_data(subscription_service.clone())
            .app_data(playlist_service.clone())
            .app_data(comment_service.clone())
            .app_data(tweet_service.clone())
            .app_data(video_service.clone())
            .app_data(dashboard_service.clone())
            .wrap(cors)
            .wrap(Logger::default())
            .wrap(tracing_actix_web::TracingLogger::default())
            .route("/metrics", web::get().to(metrics::serve_metrics))
            .route("/health", web::get().to(handlers::health_summary))
            .route("/health/live", web::get().to(handlers::liveness_check))
            .service(
                web::scope("/api/v1")
                    .wrap(RequireAuth::new(config.auth.jwt_secret.clone()))
                    .service(
                        web::scope("/likes")
                            .route(
                                "/video/{video_id}",
                                web::post().to(handlers::toggle_video_like),
                            )
                            .route(
                                "/comment/{comment_id}",
                                web::post().to(handlers::toggle_comment_like),
                            )
                            .route(
                                "/tweet/{tweet_id}",
                                web::post().to(handlers::toggle_tweet_like),
                            ),
                    )
                    .service(
                        web::scope("/subscriptions")
                            .service(
                                web::resource("/c/{channel_id}")
                                    .route(web::post().to(handlers::toggle_subscription))
                                    .route(web::get().to(handlers::get_channel_subscribers)),
                            )
                            .route(
                                "/u/{subscriber_id}",
                                web::get().to(handlers::get_subscribed_channels),
                            ),
                    )
                    .service(
                        web::scope("/playlists")
                            .service(
                                web::resource("")
                                    .route(web::post().to(handlers::create_playlist)),
                            )
                            .route(
                                "/user/{user_id}",
                                web::get().to(handlers::get_user_playlists),
                            )
                            .route(
                                "/{playlist_id}/add/{video_id}",
                                web::patch().to(handlers::add_video_to_playlist),
                            )
                            .route(
                                "/{playlist_id}/remove/{video_id}",
                                web::patch().to(handlers::remove_video_from_playlist),
                            )
                            .service(
                                web::resource("/{playlist_id}")
                                    .route(web::get().to(handlers::get_playlist))
                                    .route(web::put().to(handlers::update_playlist))
                                    .route(web::delete().to(handlers::delete_playlist)),
                            ),
                    )
                    .service(
                        web::scope("/comments")
                            .service(
                                web::resource("/c/{comment_id}")
                                    .route(web::patch().to(handlers::update_comment))
                                    .route(web::delete().to(handlers::delete_comment)),
                            )
                            .service(
                                web::resource("/{video_id}")
                                    .route(web::get().to(handlers::get_video_comments))
                                    .route(web::post().to(handlers::add_comment)),
                            ),
                    )
                    .service(
                        web::scope("/tweets")
                            .service(
                                web::resource("").route(web::post().to(handlers::create_tweet)),
                            )
                            .route(
                                "/user/{user_id}",
                                web::get().to(handlers::get_user_tweets),
                            )
                            .service(
                                web::resource("/{tweet_id}")
                                    .route(web::patch().to(handlers::update_tweet))
                                    .route(web::delete().to(handlers::delete_tweet)),
                            ),
                    )
                    .service(
                        web::scope("/videos")
                            .service(
                                web::resource("").route(web::post().to(handlers::publish_video)),
                            )
                            .route(
                                "/toggle/publish/{video_id}",
                                web::patch().to(handlers::toggle_publish_status),
                            )
                            .service(
                                web::resource("/{video_id}")
                                    .route(web::get().to(handlers::get_video))
                                    .route(web::patch().to(handlers::update_video))
                                    .route(web::delete().to(handlers::delete_video)),
                            ),
                    )
                    .service(
                        web::scope("/dashboard")
                            .route("/stats", web::get().to(handlers::get_channel_stats))
                            .route("/videos", web::get().to(handlers::get_channel_videos)),
                    ),
            )
    })
    .bind(&bind_address)
    .with_context(|| format!("failed to bind {bind_address}"))?
    .workers(4)
    .run()
    .await?;

    Ok(())
}
