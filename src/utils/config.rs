//! Application configuration
//!
//! Settings are layered: built-in defaults, then an optional JSON file in the
//! user config directory, then the `UNIVERSALSAVER_API_URL` environment
//! variable. Command line overrides are applied by the caller.

use crate::utils::error::SaverError;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{debug, info};

/// Backend origin used when nothing else is configured
pub const DEFAULT_API_BASE_URL: &str = "https://youtube-downloader-d535.onrender.com";

/// Environment variable overriding the backend origin
pub const API_URL_ENV: &str = "UNIVERSALSAVER_API_URL";

/// Application settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppSettings {
    /// Backend origin, without trailing slash
    pub api_base_url: String,

    /// Pause between failed liveness probes (seconds)
    pub wake_retry_delay_secs: u64,

    /// Time before the processing overlay offers a close button (seconds)
    pub overlay_close_delay_secs: u64,

    /// Hide the processing overlay by itself after this many seconds
    pub overlay_auto_hide_secs: Option<u64>,

    /// Per-request timeout for liveness and analysis calls (seconds)
    pub request_timeout_secs: u64,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            wake_retry_delay_secs: 5,
            overlay_close_delay_secs: 10,
            overlay_auto_hide_secs: None,
            request_timeout_secs: 60,
        }
    }
}

impl AppSettings {
    /// Load settings from the default locations
    pub fn load() -> Result<Self, SaverError> {
        let mut settings = match settings_file_path() {
            Some(path) if path.exists() => Self::from_file(&path)?,
            _ => Self::default(),
        };

        if let Ok(url) = std::env::var(API_URL_ENV) {
            if !url.trim().is_empty() {
                debug!("Backend origin taken from {}", API_URL_ENV);
                settings.api_base_url = url;
            }
        }

        settings.normalize()?;
        Ok(settings)
    }

    /// Read a settings file; missing keys keep their defaults
    pub fn from_file(path: &Path) -> Result<Self, SaverError> {
        info!("Loading settings from {}", path.display());
        let raw = std::fs::read_to_string(path)?;
        let mut settings: AppSettings = serde_json::from_str(&raw)?;
        settings.normalize()?;
        Ok(settings)
    }

    /// Replace the backend origin, e.g. from `--api-base`
    pub fn with_api_base_url(mut self, url: impl Into<String>) -> Result<Self, SaverError> {
        self.api_base_url = url.into();
        self.normalize()?;
        Ok(self)
    }

    /// Apply an optional override; blank values keep the current origin
    pub fn with_api_base_override(self, url: Option<String>) -> Result<Self, SaverError> {
        match url {
            Some(url) if !url.trim().is_empty() => self.with_api_base_url(url),
            _ => Ok(self),
        }
    }

    /// Enforce sane values
    pub fn normalize(&mut self) -> Result<(), SaverError> {
        let trimmed = self.api_base_url.trim().trim_end_matches('/').to_string();
        if !(trimmed.starts_with("http://") || trimmed.starts_with("https://")) {
            return Err(SaverError::Config(format!(
                "backend address must start with http:// or https://, got '{}'",
                self.api_base_url
            )));
        }
        self.api_base_url = trimmed;

        if self.wake_retry_delay_secs == 0 {
            self.wake_retry_delay_secs = 1;
        }
        if self.overlay_close_delay_secs == 0 {
            self.overlay_close_delay_secs = 1;
        }
        if self.overlay_auto_hide_secs == Some(0) {
            self.overlay_auto_hide_secs = Some(1);
        }
        if self.request_timeout_secs == 0 {
            self.request_timeout_secs = 1;
        }
        Ok(())
    }

    pub fn wake_retry_delay(&self) -> Duration {
        Duration::from_secs(self.wake_retry_delay_secs)
    }

    pub fn overlay_close_delay(&self) -> Duration {
        Duration::from_secs(self.overlay_close_delay_secs)
    }

    pub fn overlay_auto_hide(&self) -> Option<Duration> {
        self.overlay_auto_hide_secs.map(Duration::from_secs)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

/// `<config dir>/universalsaver/settings.json`
pub fn settings_file_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("universalsaver").join("settings.json"))
}
