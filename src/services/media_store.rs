/// Thin client for the external media store.
///
/// The store exposes a narrow ingest/delete API: `ingest` promotes a staged
/// upload to permanent storage and reports the public URL plus the probed
/// duration (nil for images); `delete` removes a stored object. Transcoding
/// and storage details stay on the other side of this interface.
use crate::config::MediaStoreConfig;
use crate::error::{AppError, Result};
use reqwest::Client as HttpClient;
use serde::Deserialize;
use std::time::Duration;

/// A stored media object as reported by the store after ingest
#[derive(Debug, Clone, Deserialize)]
pub struct StoredMedia {
    pub url: String,
    pub duration: Option<f64>,
}

pub struct MediaStoreClient {
    base_url: String,
    api_token: Option<String>,
    http_client: HttpClient,
}

impl MediaStoreClient {
    /// Create a new media store client from configuration
    pub fn from_config(cfg: &MediaStoreConfig) -> Result<Self> {
        let http_client = HttpClient::builder()
            .timeout(Duration::from_secs(cfg.request_timeout_secs))
            .build()
            .map_err(|e| AppError::Internal(format!("Failed to create HTTP client: {e}")))?;

        tracing::info!(base_url = %cfg.base_url, "media store client initialized");

        Ok(Self {
            base_url: cfg.base_url.trim_end_matches('/').to_string(),
            api_token: cfg.api_token.clone(),
            http_client,
        })
    }

    /// Promote a staged upload to permanent storage.
    pub async fn ingest(&self, staging_ref: &str) -> Result<StoredMedia> {
        let url = format!("{}/v1/ingest", self.base_url);

        let mut request = self
            .http_client
            .post(&url)
            .json(&serde_json::json!({ "ref": staging_ref }));
        if let Some(token) = &self.api_token {
            request = request.bearer_auth(token);
        }

        let response = request
            .send()
            .await
            .map_err(|e| AppError::MediaStore(format!("ingest request failed: {e}")))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::MediaStore(format!(
                "ingest failed with status {}: {}",
                status, body
            )));
        }

        let media: StoredMedia = response
            .json()
            .await
            .map_err(|e| AppError::MediaStore(format!("invalid ingest response: {e}")))?;

        tracing::debug!(staging_ref, url = %media.url, "media ingested");
        Ok(media)
    }

    /// Delete a stored object. A missing object (404) is treated as success:
    /// the desired end state is "gone" either way.
    pub async fn delete(&self, media_url: &str) -> Result<()> {
        let url = format!("{}/v1/objects", self.base_url);

        let mut request = self
            .http_client
            .delete(&url)
            .json(&serde_json::json!({ "url": media_url }));
        if let Some(token) = &self.api_token {
            request = request.bearer_auth(token);
        }

        let response = request
            .send()
            .await
            .map_err(|e| AppError::MediaStore(format!("delete request failed: {e}")))?;

        if !response.status().is_success() && response.status().as_u16() != 404 {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::MediaStore(format!(
                "delete failed with status {}: {}",
                status, body
            )));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stored_media_deserializes_with_and_without_duration() {
        let video: StoredMedia =
            serde_json::from_str(r#"{"url":"https://cdn/x.mp4","duration":12.5}"#).unwrap();
        assert_eq!(video.duration, Some(12.5));

        let image: StoredMedia =
            serde_json::from_str(r#"{"url":"https://cdn/x.png","duration":null}"#).unwrap();
        assert!(image.duration.is_none());
    }

    #[test]
    fn base_url_trailing_slash_is_normalized() {
        let client = MediaStoreClient::from_config(&MediaStoreConfig {
            base_url: "http://media.internal/".to_string(),
            api_token: None,
            request_timeout_secs: 5,
        })
        .expect("client builds");
        assert_eq!(client.base_url, "http://media.internal");
    }
}
