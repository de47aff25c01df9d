//! Session controller
//!
//! Owns every piece of per-session state and exposes the transitions the UI
//! drives: submitting a URL for analysis, choosing a quality, and the overlay
//! timers. Network calls happen outside; results are fed back in through
//! [`SessionController::finish_analysis`].

use crate::api::models::{quality_choices, QualityChoice, VideoMetadata};
use crate::api::traits::VideoBackend;
use crate::session::state::{AnalysisStatus, DownloadOverlay, ServerReadiness};
use crate::session::validation::is_valid_url;
use crate::utils::config::AppSettings;
use crate::utils::error::SaverError;
use std::time::Duration;
use tracing::{debug, info};

/// A download handed to the browser
///
/// Built fresh for every click and never stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DownloadRequest {
    pub source_url: String,
    pub quality: String,
    pub target: String,
}

/// Timed change to the processing overlay
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverlayEvent {
    RevealClose(u64),
    AutoHide(u64),
}

/// An [`OverlayEvent`] due after `delay`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OverlayTimer {
    pub delay: Duration,
    pub event: OverlayEvent,
}

impl OverlayTimer {
    /// Resolve to the event once the delay has passed
    pub async fn elapsed(self) -> OverlayEvent {
        tokio::time::sleep(self.delay).await;
        self.event
    }
}

#[derive(Debug, Default)]
pub struct SessionController {
    submitted_url: Option<String>,
    status: AnalysisStatus,
    metadata: Option<VideoMetadata>,
    readiness: ServerReadiness,
    overlay: DownloadOverlay,
    next_generation: u64,
}

impl SessionController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn status(&self) -> &AnalysisStatus {
        &self.status
    }

    pub fn is_loading(&self) -> bool {
        self.status.is_loading()
    }

    pub fn error_message(&self) -> Option<&str> {
        self.status.error_message()
    }

    pub fn metadata(&self) -> Option<&VideoMetadata> {
        self.metadata.as_ref()
    }

    pub fn submitted_url(&self) -> Option<&str> {
        self.submitted_url.as_deref()
    }

    pub fn readiness(&self) -> ServerReadiness {
        self.readiness
    }

    pub fn overlay(&self) -> DownloadOverlay {
        self.overlay
    }

    /// Choices for the current video, empty when nothing is analyzed
    pub fn choices(&self) -> Vec<QualityChoice> {
        self.metadata.as_ref().map(quality_choices).unwrap_or_default()
    }

    /// Validate `input` and enter `Loading`
    ///
    /// Returns the URL to send to the backend. A rejected input moves the
    /// session to `Error` without any network call. A submission while
    /// another analysis is running is refused and leaves state untouched.
    pub fn begin_analysis(&mut self, input: &str) -> Result<String, SaverError> {
        if self.is_loading() {
            return Err(SaverError::AnalysisInProgress);
        }

        self.metadata = None;

        if !is_valid_url(input) {
            let err = SaverError::InvalidUrl(input.to_string());
            self.status = AnalysisStatus::Error(err.user_message());
            return Err(err);
        }

        debug!("Starting analysis for {}", input);
        self.status = AnalysisStatus::Loading;
        self.submitted_url = Some(input.to_string());
        Ok(input.to_string())
    }

    /// Settle the running analysis; `Loading` is always left
    pub fn finish_analysis(&mut self, result: Result<VideoMetadata, SaverError>) {
        match result {
            Ok(metadata) => {
                info!(
                    "Analysis finished: {}",
                    metadata.title.as_deref().unwrap_or("<untitled>")
                );
                self.metadata = Some(metadata);
                self.status = AnalysisStatus::Idle;
            }
            Err(err) => {
                info!("Analysis failed: {}", err);
                self.metadata = None;
                self.status = AnalysisStatus::Error(err.user_message());
            }
        }
    }

    /// Same as [`finish_analysis`](Self::finish_analysis) for callers that
    /// already flattened the error to its user message
    pub fn finish_analysis_with_message(&mut self, result: Result<VideoMetadata, String>) {
        self.finish_analysis(result.map_err(SaverError::Api));
    }

    /// Full analysis round trip against `backend`
    pub async fn analyze(
        &mut self,
        backend: &dyn VideoBackend,
        input: &str,
    ) -> Result<(), SaverError> {
        let url = self.begin_analysis(input)?;
        let result = backend.fetch_info(&url).await;
        self.finish_analysis(result);
        match &self.status {
            AnalysisStatus::Error(message) => Err(SaverError::Api(message.clone())),
            _ => Ok(()),
        }
    }

    /// Clear the error line, e.g. when the user edits the input
    pub fn clear_error(&mut self) {
        if self.status.error_message().is_some() {
            self.status = AnalysisStatus::Idle;
        }
    }

    /// Report a local failure that is not tied to an analysis
    pub fn report_error(&mut self, err: &SaverError) {
        if !self.is_loading() {
            self.status = AnalysisStatus::Error(err.user_message());
        }
    }

    pub fn set_readiness(&mut self, readiness: ServerReadiness) {
        self.readiness = self.readiness.advance(readiness);
    }

    /// Build the download address and show the processing overlay
    ///
    /// The quality token is not checked against the server's list.
    pub fn initiate_download(
        &mut self,
        backend: &dyn VideoBackend,
        quality: &str,
    ) -> Result<DownloadRequest, SaverError> {
        let source_url = self
            .submitted_url
            .clone()
            .ok_or(SaverError::NoVideoSelected)?;

        let target = backend.download_url(&source_url, quality);
        info!("Handing download to browser: quality={}", quality);

        self.next_generation += 1;
        self.overlay = DownloadOverlay::Visible {
            closeable: false,
            generation: self.next_generation,
        };

        Ok(DownloadRequest {
            source_url,
            quality: quality.to_string(),
            target,
        })
    }

    /// Timers owed to the overlay currently on screen
    pub fn overlay_schedule(&self, settings: &AppSettings) -> Vec<OverlayTimer> {
        let Some(generation) = self.overlay.generation() else {
            return Vec::new();
        };

        let mut timers = vec![OverlayTimer {
            delay: settings.overlay_close_delay(),
            event: OverlayEvent::RevealClose(generation),
        }];
        if let Some(delay) = settings.overlay_auto_hide() {
            timers.push(OverlayTimer {
                delay,
                event: OverlayEvent::AutoHide(generation),
            });
        }
        timers
    }

    /// Apply a fired timer; stale generations are ignored
    pub fn apply_overlay_event(&mut self, event: OverlayEvent) -> bool {
        match event {
            OverlayEvent::RevealClose(generation) => self.reveal_close(generation),
            OverlayEvent::AutoHide(generation) => self.auto_hide(generation),
        }
    }

    /// Show the close button if `generation` still owns the overlay
    pub fn reveal_close(&mut self, generation: u64) -> bool {
        match self.overlay {
            DownloadOverlay::Visible {
                generation: current,
                ..
            } if current == generation => {
                self.overlay = DownloadOverlay::Visible {
                    closeable: true,
                    generation,
                };
                true
            }
            _ => false,
        }
    }

    /// Hide the overlay on a timer if `generation` still owns it
    pub fn auto_hide(&mut self, generation: u64) -> bool {
        if self.overlay.generation() == Some(generation) {
            self.overlay = DownloadOverlay::Hidden;
            true
        } else {
            false
        }
    }

    /// User pressed close; ignored until the close button is shown
    pub fn dismiss_overlay(&mut self) -> bool {
        if self.overlay.is_closeable() {
            self.overlay = DownloadOverlay::Hidden;
            true
        } else {
            false
        }
    }

    /// Drop the overlay unconditionally, used when the browser could not be
    /// launched at all
    pub fn abort_download(&mut self, err: &SaverError) {
        self.overlay = DownloadOverlay::Hidden;
        self.report_error(err);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::models::Quality;
    use crate::utils::error::{INVALID_URL_MESSAGE, SERVER_ERROR_MESSAGE};
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;

    /// Backend answering every analysis with a fixed result
    struct ScriptedBackend {
        reply: Mutex<Option<Result<VideoMetadata, SaverError>>>,
        calls: AtomicUsize,
    }

    impl ScriptedBackend {
        fn replying(reply: Result<VideoMetadata, SaverError>) -> Self {
            Self {
                reply: Mutex::new(Some(reply)),
                calls: AtomicUsize::new(0),
            }
        }
    }

    #[async_trait]
    impl VideoBackend for ScriptedBackend {
        fn base_url(&self) -> &str {
            "https://saver.example.org"
        }

        async fn ping(&self) -> Result<(), SaverError> {
            Ok(())
        }

        async fn fetch_info(&self, _url: &str) -> Result<VideoMetadata, SaverError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.reply
                .lock()
                .unwrap()
                .take()
                .unwrap_or_else(|| Err(SaverError::Api("no reply scripted".to_string())))
        }
    }

    fn sample_metadata() -> VideoMetadata {
        VideoMetadata {
            title: Some("T".to_string()),
            author: Some("A".to_string()),
            qualities: Some(vec![Quality::new("720p", "720p MP4")]),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn invalid_input_never_reaches_backend() {
        let backend = ScriptedBackend::replying(Ok(sample_metadata()));
        let mut session = SessionController::new();

        let result = session.analyze(&backend, "not-a-url").await;

        assert!(matches!(result, Err(SaverError::InvalidUrl(_))));
        assert_eq!(backend.calls.load(Ordering::SeqCst), 0);
        assert_eq!(session.error_message(), Some(INVALID_URL_MESSAGE));
        assert!(session.metadata().is_none());
        assert!(session.submitted_url().is_none());
    }

    #[tokio::test]
    async fn successful_analysis_stores_metadata() {
        let backend = ScriptedBackend::replying(Ok(sample_metadata()));
        let mut session = SessionController::new();

        session
            .analyze(&backend, "https://example.com/v/1")
            .await
            .unwrap();

        assert_eq!(session.status(), &AnalysisStatus::Idle);
        assert_eq!(session.metadata(), Some(&sample_metadata()));
        assert_eq!(session.submitted_url(), Some("https://example.com/v/1"));

        let labels: Vec<_> = session.choices().into_iter().map(|c| c.label).collect();
        assert_eq!(labels, vec!["720p MP4", "Audio only (MP3)"]);
    }

    #[tokio::test]
    async fn server_status_gives_generic_message() {
        let backend = ScriptedBackend::replying(Err(SaverError::ServerStatus(500)));
        let mut session = SessionController::new();

        assert!(session
            .analyze(&backend, "https://example.com/v/1")
            .await
            .is_err());
        assert_eq!(session.error_message(), Some(SERVER_ERROR_MESSAGE));
        assert!(session.metadata().is_none());
        assert!(!session.is_loading());
    }

    #[test]
    fn loading_only_between_begin_and_finish() {
        let mut session = SessionController::new();
        assert!(!session.is_loading());

        session.begin_analysis("https://example.com/v/1").unwrap();
        assert!(session.is_loading());
        assert!(session.error_message().is_none());

        session.finish_analysis(Err(SaverError::Api("Unsupported URL".to_string())));
        assert!(!session.is_loading());
        assert_eq!(session.error_message(), Some("Unsupported URL"));
    }

    #[test]
    fn second_submission_while_loading_is_refused() {
        let mut session = SessionController::new();
        session.begin_analysis("https://example.com/v/1").unwrap();

        let second = session.begin_analysis("https://example.com/v/2");
        assert!(matches!(second, Err(SaverError::AnalysisInProgress)));
        assert!(session.is_loading());
        assert_eq!(session.submitted_url(), Some("https://example.com/v/1"));
    }

    #[test]
    fn new_submission_clears_previous_result() {
        let mut session = SessionController::new();
        session.begin_analysis("https://example.com/v/1").unwrap();
        session.finish_analysis(Ok(sample_metadata()));
        assert!(session.metadata().is_some());

        session.begin_analysis("https://example.com/v/2").unwrap();
        assert!(session.metadata().is_none());
        assert!(session.choices().is_empty());
    }

    #[test]
    fn download_without_analysis_is_refused() {
        let backend = ScriptedBackend::replying(Ok(sample_metadata()));
        let mut session = SessionController::new();

        let result = session.initiate_download(&backend, "720p");
        assert!(matches!(result, Err(SaverError::NoVideoSelected)));
        assert!(!session.overlay().is_visible());
    }

    #[test]
    fn download_builds_target_and_opens_overlay() {
        let backend = ScriptedBackend::replying(Ok(sample_metadata()));
        let mut session = SessionController::new();
        session.begin_analysis("https://example.com/v/1").unwrap();
        session.finish_analysis(Ok(sample_metadata()));

        let request = session.initiate_download(&backend, "1440p-unknown").unwrap();
        assert_eq!(
            request.target,
            "https://saver.example.org/api/download?url=https%3A%2F%2Fexample.com%2Fv%2F1&quality=1440p-unknown"
        );
        assert_eq!(request.quality, "1440p-unknown");
        assert!(session.overlay().is_visible());
        assert!(!session.overlay().is_closeable());
    }

    #[test]
    fn overlay_becomes_dismissible_only_after_reveal() {
        let backend = ScriptedBackend::replying(Ok(sample_metadata()));
        let mut session = SessionController::new();
        session.begin_analysis("https://example.com/v/1").unwrap();
        session.finish_analysis(Ok(sample_metadata()));
        session.initiate_download(&backend, "audio").unwrap();

        assert!(!session.dismiss_overlay());
        assert!(session.overlay().is_visible());

        let generation = session.overlay().generation().unwrap();
        assert!(session.reveal_close(generation));
        assert!(session.overlay().is_closeable());

        assert!(session.dismiss_overlay());
        assert_eq!(session.overlay(), DownloadOverlay::Hidden);
    }

    #[test]
    fn stale_timers_do_not_touch_newer_overlay() {
        let backend = ScriptedBackend::replying(Ok(sample_metadata()));
        let mut session = SessionController::new();
        session.begin_analysis("https://example.com/v/1").unwrap();
        session.finish_analysis(Ok(sample_metadata()));

        session.initiate_download(&backend, "720p").unwrap();
        let first = session.overlay().generation().unwrap();
        session.initiate_download(&backend, "audio").unwrap();
        let second = session.overlay().generation().unwrap();
        assert_ne!(first, second);

        assert!(!session.reveal_close(first));
        assert!(!session.auto_hide(first));
        assert!(!session.overlay().is_closeable());

        assert!(session.auto_hide(second));
        assert!(!session.overlay().is_visible());
    }

    #[test]
    fn editing_input_clears_error() {
        let mut session = SessionController::new();
        let _ = session.begin_analysis("nope");
        assert!(session.error_message().is_some());

        session.clear_error();
        assert_eq!(session.status(), &AnalysisStatus::Idle);
    }

    #[test]
    fn browser_failure_hides_overlay_and_reports() {
        let backend = ScriptedBackend::replying(Ok(sample_metadata()));
        let mut session = SessionController::new();
        session.begin_analysis("https://example.com/v/1").unwrap();
        session.finish_analysis(Ok(sample_metadata()));
        session.initiate_download(&backend, "720p").unwrap();

        session.abort_download(&SaverError::BrowserLaunch("no browser".to_string()));
        assert!(!session.overlay().is_visible());
        assert!(session
            .error_message()
            .is_some_and(|m| m.contains("no browser")));
        assert!(session.metadata().is_some());
    }

    fn session_with_overlay() -> SessionController {
        let backend = ScriptedBackend::replying(Ok(sample_metadata()));
        let mut session = SessionController::new();
        session.begin_analysis("https://example.com/v/1").unwrap();
        session.finish_analysis(Ok(sample_metadata()));
        session.initiate_download(&backend, "720p").unwrap();
        session
    }

    #[test]
    fn no_timers_without_overlay() {
        let session = SessionController::new();
        assert!(session.overlay_schedule(&AppSettings::default()).is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn close_button_appears_after_configured_delay() {
        let mut session = session_with_overlay();
        let settings = AppSettings {
            overlay_close_delay_secs: 10,
            overlay_auto_hide_secs: None,
            ..Default::default()
        };

        let timers = session.overlay_schedule(&settings);
        assert_eq!(timers.len(), 1);
        assert_eq!(timers[0].delay, Duration::from_secs(10));

        let start = tokio::time::Instant::now();
        let pending = tokio::spawn(timers[0].elapsed());

        tokio::time::sleep(Duration::from_secs(9)).await;
        assert!(!pending.is_finished());
        assert!(!session.overlay().is_closeable());
        assert!(!session.dismiss_overlay());

        let event = pending.await.unwrap();
        assert!(start.elapsed() >= Duration::from_secs(10));
        assert!(session.apply_overlay_event(event));
        assert!(session.overlay().is_closeable());
        assert!(session.dismiss_overlay());
    }

    #[tokio::test(start_paused = true)]
    async fn auto_hide_fires_before_close_when_configured() {
        let mut session = session_with_overlay();
        let settings = AppSettings {
            overlay_close_delay_secs: 10,
            overlay_auto_hide_secs: Some(8),
            ..Default::default()
        };
        let generation = session.overlay().generation().unwrap();

        let timers = session.overlay_schedule(&settings);
        assert_eq!(
            timers.iter().map(|t| t.event).collect::<Vec<_>>(),
            vec![
                OverlayEvent::RevealClose(generation),
                OverlayEvent::AutoHide(generation)
            ]
        );

        let start = tokio::time::Instant::now();
        let close = tokio::spawn(timers[0].elapsed());
        let hide = tokio::spawn(timers[1].elapsed());

        tokio::time::sleep(Duration::from_secs(7)).await;
        assert!(!hide.is_finished());
        assert!(session.overlay().is_visible());

        let event = hide.await.unwrap();
        let hidden_at = start.elapsed();
        assert!(hidden_at >= Duration::from_secs(8));
        assert!(hidden_at < Duration::from_secs(10));
        assert!(session.apply_overlay_event(event));
        assert!(!session.overlay().is_visible());

        // The close timer still fires but finds nothing to reveal
        let event = close.await.unwrap();
        assert!(!session.apply_overlay_event(event));
        assert!(!session.overlay().is_visible());
    }
}
