/// Configuration management for Engagement Service
///
/// This module handles loading and managing configuration from environment
/// variables.
use serde::{Deserialize, Serialize};

/// Main application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Application settings
    pub app: AppConfig,
    /// CORS configuration
    pub cors: CorsConfig,
    /// Database configuration
    pub database: DatabaseConfig,
    /// Authentication configuration
    pub auth: AuthConfig,
    /// Media store collaborator configuration
    pub media: MediaStoreConfig,
}

/// Application settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Application environment (dev, staging, prod)
    pub env: String,
    /// Server host to bind to
    pub host: String,
    /// Server port to bind to
    pub port: u16,
}

/// CORS configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CorsConfig {
    /// Comma-separated list of allowed origins
    pub allowed_origins: String,
}

/// Database configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    /// Database URL
    pub url: String,
    /// Max connections in pool
    pub max_connections: u32,
}

/// Authentication configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    /// HMAC secret used to validate access tokens
    pub jwt_secret: String,
}

/// Media store collaborator configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MediaStoreConfig {
    /// Base URL of the media store API
    pub base_url: String,
    /// Optional bearer token for the media store API
    pub api_token: Option<String>,
    /// Per-request timeout in seconds
    pub request_timeout_secs: u64,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, String> {
        let app_env = std::env::var("APP_ENV").unwrap_or_else(|_| "development".to_string());

        Ok(Config {
            app: AppConfig {
                env: app_env.clone(),
                host: std::env::var("ENGAGEMENT_SERVICE_HOST")
                    .unwrap_or_else(|_| "0.0.0.0".to_string()),
                port: std::env::var("ENGAGEMENT_SERVICE_PORT")
                    .ok()
                    .and_then(|p| p.parse().ok())
                    .unwrap_or(8084),
            },
            cors: {
                let allowed_origins = match std::env::var("CORS_ALLOWED_ORIGINS") {
                    Ok(value) => value,
                    Err(_) if app_env.eq_ignore_ascii_case("production") => {
                        return Err("CORS_ALLOWED_ORIGINS must be set in production".to_string())
                    }
                    Err(_) => "http://localhost:3000".to_string(),
                };

                if app_env.eq_ignore_ascii_case("production") && allowed_origins.trim() == "*" {
                    return Err("CORS_ALLOWED_ORIGINS cannot be '*' in production".to_string());
                }

                CorsConfig { allowed_origins }
            },
            database: DatabaseConfig {
                url: std::env::var("DATABASE_URL")
                    .unwrap_or_else(|_| "postgresql://localhost/engagement".to_string()),
                max_connections: std::env::var("DATABASE_MAX_CONNECTIONS")
                    .ok()
                    .and_then(|c| c.parse().ok())
                    .unwrap_or(10),
            },
            auth: {
                let jwt_secret = match std::env::var("JWT_SECRET") {
                    Ok(value) if !value.trim().is_empty() => value,
                    _ if app_env.eq_ignore_ascii_case("production") => {
                        return Err(
                            "JWT_SECRET must be set to a non-empty value in production".to_string()
                        )
                    }
                    _ => "dev-only-secret".to_string(),
                };

                AuthConfig { jwt_secret }
            },
            media: MediaStoreConfig {
                base_url: std::env::var("MEDIA_STORE_URL")
                    .unwrap_or_else(|_| "http://localhost:8090".to_string()),
                api_token: std::env::var("MEDIA_STORE_TOKEN").ok().filter(|t| !t.is_empty()),
                request_timeout_secs: std::env::var("MEDIA_STORE_TIMEOUT_SECS")
                    .ok()
                    .and_then(|v| v.parse().ok())
                    .unwrap_or(30),
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Environment-variable driven paths are exercised here only through the
    // defaults so the tests stay independent of process-global env state.

    #[test]
    fn defaults_are_development_friendly() {
        let config = Config::from_env().expect("default config loads");
        assert_eq!(config.app.host, "0.0.0.0");
        assert!(config.database.max_connections >= 1);
        assert_eq!(config.media.request_timeout_secs, 30);
    }

    #[test]
    fn default_env_is_development() {
        let config = Config::from_env().expect("default config loads");
        // APP_ENV is not set in the test environment
        assert!(!config.app.env.eq_ignore_ascii_case("production"));
    }
}
