//! HTTP transport for the backend endpoints
//!
//! `GET /` wakes the server, `POST /api/info` analyzes a URL. The download
//! endpoint is never called from here; its address is handed to the browser.

use crate::api::models::{payload_error, AnalyzeRequest, VideoMetadata};
use crate::api::traits::VideoBackend;
use crate::utils::config::AppSettings;
use crate::utils::error::SaverError;
use async_trait::async_trait;
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, warn};

/// reqwest-backed implementation of [`VideoBackend`]
#[derive(Debug, Clone)]
pub struct HttpBackend {
    client: reqwest::Client,
    base_url: String,
}

impl HttpBackend {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, SaverError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(concat!("universalsaver/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    pub fn from_settings(settings: &AppSettings) -> Result<Self, SaverError> {
        Self::new(settings.api_base_url.clone(), settings.request_timeout())
    }

    /// Download the thumbnail image for the metadata card
    pub async fn fetch_thumbnail(&self, url: &str) -> Result<Vec<u8>, SaverError> {
        debug!("Fetching thumbnail: {}", url);
        let response = self.client.get(url).send().await?;
        if !response.status().is_success() {
            return Err(SaverError::ServerStatus(response.status().as_u16()));
        }
        Ok(response.bytes().await?.to_vec())
    }
}

#[async_trait]
impl VideoBackend for HttpBackend {
    fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn ping(&self) -> Result<(), SaverError> {
        let response = self.client.get(format!("{}/", self.base_url)).send().await?;
        let status = response.status();
        if status.is_success() {
            Ok(())
        } else {
            Err(SaverError::ServerStatus(status.as_u16()))
        }
    }

    async fn fetch_info(&self, url: &str) -> Result<VideoMetadata, SaverError> {
        debug!("Requesting info for: {}", url);

        let response = self
            .client
            .post(format!("{}/api/info", self.base_url))
            .json(&AnalyzeRequest {
                url: url.to_string(),
            })
            .send()
            .await?;

        // The body is not consulted for non-2xx answers
        let status = response.status();
        if !status.is_success() {
            warn!("Analysis request failed with HTTP {}", status);
            return Err(SaverError::ServerStatus(status.as_u16()));
        }

        let bytes = response.bytes().await?;
        let body: Value = serde_json::from_slice(&bytes)?;

        if let Some(message) = payload_error(&body) {
            debug!("Backend rejected URL: {}", message);
            return Err(SaverError::Api(message));
        }

        Ok(serde_json::from_value(body)?)
    }
}
