//! Session state machines
//!
//! Three independent machines live in one session:
//! analysis (`Idle -> Loading -> Idle | Error`), backend readiness
//! (`Sleeping -> Waking -> Ready`) and the processing overlay
//! (`Hidden -> Visible(no close) -> Visible(closeable) -> Hidden`).

/// Progress of the current analysis request
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum AnalysisStatus {
    #[default]
    Idle,
    Loading,
    Error(String),
}

impl AnalysisStatus {
    pub fn is_loading(&self) -> bool {
        matches!(self, AnalysisStatus::Loading)
    }

    pub fn error_message(&self) -> Option<&str> {
        match self {
            AnalysisStatus::Error(message) => Some(message),
            _ => None,
        }
    }
}

/// Whether the backend has answered a liveness probe yet
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ServerReadiness {
    #[default]
    Sleeping,
    Waking,
    Ready,
}

impl ServerReadiness {
    pub fn label(&self) -> &'static str {
        match self {
            ServerReadiness::Ready => "Online",
            ServerReadiness::Sleeping | ServerReadiness::Waking => "Starting server...",
        }
    }

    /// `Ready` is terminal; anything else may only move forward
    pub fn advance(self, next: ServerReadiness) -> ServerReadiness {
        if next as u8 > self as u8 {
            next
        } else {
            self
        }
    }
}

/// Processing overlay shown after a download was handed to the browser
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DownloadOverlay {
    #[default]
    Hidden,
    Visible {
        closeable: bool,
        /// Identifies the download that opened this overlay so timers from an
        /// earlier download cannot act on it
        generation: u64,
    },
}

impl DownloadOverlay {
    pub fn is_visible(&self) -> bool {
        matches!(self, DownloadOverlay::Visible { .. })
    }

    pub fn is_closeable(&self) -> bool {
        matches!(self, DownloadOverlay::Visible { closeable: true, .. })
    }

    pub fn generation(&self) -> Option<u64> {
        match self {
            DownloadOverlay::Visible { generation, .. } => Some(*generation),
            DownloadOverlay::Hidden => None,
        }
    }
}
