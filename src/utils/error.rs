//! Error handling for UniversalSaver

use thiserror::Error;

/// Shown when the submitted text is not an http(s) URL
pub const INVALID_URL_MESSAGE: &str = "Please enter a valid URL.";

/// Shown for any non-2xx answer from the analysis endpoint
pub const SERVER_ERROR_MESSAGE: &str = "Error connecting to the server.";

/// Fallback when a failure carries no message of its own
pub const CONNECTION_ERROR_MESSAGE: &str = "Connection error.";

/// Main error type for UniversalSaver
#[derive(Debug, Error)]
pub enum SaverError {
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    #[error("Server responded with HTTP {0}")]
    ServerStatus(u16),

    /// The backend answered 2xx but reported a failure in the payload
    #[error("{0}")]
    Api(String),

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("An analysis is already running")]
    AnalysisInProgress,

    #[error("No video has been analyzed yet")]
    NoVideoSelected,

    #[error("Could not open the download in the browser: {0}")]
    BrowserLaunch(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl SaverError {
    /// Text shown to the user in the error line
    pub fn user_message(&self) -> String {
        match self {
            SaverError::InvalidUrl(_) => INVALID_URL_MESSAGE.to_string(),
            SaverError::ServerStatus(_) => SERVER_ERROR_MESSAGE.to_string(),
            SaverError::Api(message) if !message.is_empty() => message.clone(),
            SaverError::Api(_) => CONNECTION_ERROR_MESSAGE.to_string(),
            other => {
                let message = other.to_string();
                if message.trim().is_empty() {
                    CONNECTION_ERROR_MESSAGE.to_string()
                } else {
                    message
                }
            }
        }
    }
}
