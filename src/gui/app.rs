//! Main GUI application

use crate::api::models::{QualityChoice, VideoMetadata};
use crate::api::{HttpBackend, VideoBackend};
use crate::gui::clipboard;
use crate::session::{OverlayEvent, OverlayTimer, ServerReadiness, SessionController, WakeUpTask};
use crate::utils::config::AppSettings;
use crate::utils::error::SaverError;
use iced::widget::image;
use iced::{Application, Command, Element, Subscription, Theme};
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;
use tokio::runtime::Handle;
use tracing::{debug, error, info, warn};

/// Startup data handed over by [`crate::app::run`]
pub struct AppFlags {
    pub settings: AppSettings,
    pub backend: Arc<HttpBackend>,
    /// Runtime that owns all network futures; kept alive by the caller
    pub runtime: Handle,
}

/// Main application state
pub struct SaverApp {
    // Core components
    backend: Arc<HttpBackend>,
    runtime: Handle,
    settings: AppSettings,
    wake: WakeUpTask,

    // Session
    session: SessionController,
    choices: Vec<QualityChoice>,

    // UI State
    url_input: String,
    thumbnail: Option<image::Handle>,
}

/// Application messages
#[derive(Debug, Clone)]
pub enum Message {
    // Input events
    UrlInputChanged(String),
    AnalyzePressed,
    PasteFromClipboard,
    ClearUrlInput,

    // Analysis events
    AnalysisFinished(Result<VideoMetadata, String>),
    ThumbnailLoaded(String, Result<Vec<u8>, String>),

    // Download events
    QualityChosen(String),
    OverlayTimerFired(OverlayEvent),
    CloseOverlay,

    // System
    Tick, // Polls backend readiness until it is online
}

impl SaverApp {
    /// Run `future` on the owned runtime and map its output to a message
    fn spawn<T, F>(
        &self,
        future: F,
        on_done: impl FnOnce(Result<T, String>) -> Message + Send + 'static,
    ) -> Command<Message>
    where
        T: Send + 'static,
        F: Future<Output = Result<T, String>> + Send + 'static,
    {
        let handle = self.runtime.spawn(future);
        Command::perform(
            async move {
                match handle.await {
                    Ok(result) => result,
                    Err(e) => Err(format!("Background task failed: {}", e)),
                }
            },
            on_done,
        )
    }

    /// Run an overlay timer on the owned runtime
    fn schedule(&self, timer: OverlayTimer) -> Command<Message> {
        let handle = self.runtime.spawn(timer.elapsed());
        Command::perform(
            async move { handle.await.unwrap_or(timer.event) },
            Message::OverlayTimerFired,
        )
    }

    fn start_analysis(&mut self) -> Command<Message> {
        let url = match self.session.begin_analysis(&self.url_input) {
            Ok(url) => url,
            Err(SaverError::AnalysisInProgress) => {
                debug!("Ignoring submit while an analysis is running");
                return Command::none();
            }
            Err(e) => {
                info!("Rejected input: {}", e);
                self.thumbnail = None;
                self.refresh_choices();
                return Command::none();
            }
        };

        self.thumbnail = None;
        self.refresh_choices();

        let backend = Arc::clone(&self.backend);
        self.spawn(
            async move {
                backend
                    .fetch_info(&url)
                    .await
                    .map_err(|e| e.user_message())
            },
            Message::AnalysisFinished,
        )
    }

    fn load_thumbnail(&self) -> Command<Message> {
        let Some(url) = self
            .session
            .metadata()
            .and_then(|m| m.thumbnail.clone())
        else {
            return Command::none();
        };

        let backend = Arc::clone(&self.backend);
        let key = url.clone();
        self.spawn(
            async move { backend.fetch_thumbnail(&url).await.map_err(|e| e.to_string()) },
            move |result| Message::ThumbnailLoaded(key, result),
        )
    }

    fn start_download(&mut self, quality: &str) -> Command<Message> {
        let request = match self
            .session
            .initiate_download(self.backend.as_ref(), quality)
        {
            Ok(request) => request,
            Err(e) => {
                warn!("Download not started: {}", e);
                self.session.report_error(&e);
                return Command::none();
            }
        };

        // Hand the address to the browser; whatever happens next is invisible to us
        if let Err(e) = open::that(&request.target) {
            error!("Failed to open browser for {}: {}", request.target, e);
            self.session
                .abort_download(&SaverError::BrowserLaunch(e.to_string()));
            return Command::none();
        }

        let timers = self
            .session
            .overlay_schedule(&self.settings)
            .into_iter()
            .map(|timer| self.schedule(timer));
        Command::batch(timers)
    }

    fn refresh_choices(&mut self) {
        self.choices = self.session.choices();
    }
}

impl Application for SaverApp {
    type Executor = iced::executor::Default;
    type Message = Message;
    type Theme = Theme;
    type Flags = AppFlags;

    fn new(flags: Self::Flags) -> (Self, Command<Message>) {
        let AppFlags {
            settings,
            backend,
            runtime,
        } = flags;

        info!("Using backend at {}", backend.base_url());

        // Start waking the backend right away so it is warm by the first submit
        let probe_backend: Arc<dyn VideoBackend> = backend.clone();
        let wake = WakeUpTask::spawn(&runtime, probe_backend, settings.wake_retry_delay());

        let app = Self {
            backend,
            runtime,
            settings,
            wake,
            session: SessionController::new(),
            choices: Vec::new(),
            url_input: String::new(),
            thumbnail: None,
        };

        (app, Command::none())
    }

    fn title(&self) -> String {
        String::from("UniversalSaver - Video Downloader")
    }

    fn update(&mut self, message: Message) -> Command<Message> {
        match message {
            // Input events
            Message::UrlInputChanged(url) => {
                self.url_input = url;
                self.session.clear_error();
                Command::none()
            }

            Message::AnalyzePressed => self.start_analysis(),

            Message::PasteFromClipboard => {
                match clipboard::get_clipboard_content() {
                    Ok(content) => {
                        self.url_input = content;
                        self.session.clear_error();
                    }
                    Err(e) => warn!("{}", e),
                }
                Command::none()
            }

            Message::ClearUrlInput => {
                self.url_input.clear();
                self.session.clear_error();
                Command::none()
            }

            // Analysis events
            Message::AnalysisFinished(result) => {
                self.session.finish_analysis_with_message(result);
                self.refresh_choices();
                self.load_thumbnail()
            }

            Message::ThumbnailLoaded(url, result) => {
                let current = self.session.metadata().and_then(|m| m.thumbnail.as_deref());
                if current != Some(url.as_str()) {
                    debug!("Dropping stale thumbnail for {}", url);
                    return Command::none();
                }
                match result {
                    Ok(bytes) => self.thumbnail = Some(image::Handle::from_memory(bytes)),
                    Err(e) => warn!("Thumbnail unavailable: {}", e),
                }
                Command::none()
            }

            // Download events
            Message::QualityChosen(quality) => self.start_download(&quality),

            Message::OverlayTimerFired(event) => {
                if !self.session.apply_overlay_event(event) {
                    debug!("Ignoring stale overlay timer {:?}", event);
                }
                Command::none()
            }

            Message::CloseOverlay => {
                self.session.dismiss_overlay();
                Command::none()
            }

            // System
            Message::Tick => {
                let readiness = self.wake.readiness();
                if readiness != self.session.readiness() {
                    self.session.set_readiness(readiness);
                }
                Command::none()
            }
        }
    }

    fn view(&self) -> Element<'_, Message> {
        use crate::gui::views::{main_view, MainViewState};

        main_view(MainViewState {
            url_value: &self.url_input,
            is_loading: self.session.is_loading(),
            error: self.session.error_message(),
            readiness: self.session.readiness(),
            metadata: self.session.metadata(),
            choices: &self.choices,
            thumbnail: self.thumbnail.as_ref(),
            overlay: self.session.overlay(),
        })
    }

    fn subscription(&self) -> Subscription<Message> {
        if self.session.readiness() == ServerReadiness::Ready {
            Subscription::none()
        } else {
            iced::time::every(Duration::from_millis(250)).map(|_| Message::Tick)
        }
    }

    fn theme(&self) -> Self::Theme {
        Theme::Dark
    }
}
