//! UniversalSaver library
//!
//! Client for a remote video download service: wakes the backend, analyzes a
//! page URL into metadata and qualities, and hands the chosen download to the
//! system browser.

pub mod api;
pub mod app;
pub mod gui;
pub mod session;
pub mod utils;

// Re-export main types for easier use
pub use api::{HttpBackend, Quality, QualityChoice, VideoBackend, VideoMetadata};
pub use gui::{Message, SaverApp};
pub use session::{DownloadRequest, SessionController, WakeUpTask};
pub use utils::{AppSettings, SaverError};
