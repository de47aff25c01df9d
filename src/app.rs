//! Application initialization and main entry point

use crate::api::HttpBackend;
use crate::gui::{AppFlags, SaverApp};
use crate::utils::config::AppSettings;
use anyhow::Result;
use iced::{Application, Settings};
use std::sync::Arc;

/// Run the UniversalSaver window
///
/// The tokio runtime created here carries every network call and the
/// wake-up loop, and outlives the window.
pub fn run(settings: AppSettings) -> Result<()> {
    let runtime = tokio::runtime::Runtime::new()?;
    let backend = Arc::new(HttpBackend::from_settings(&settings)?);

    let flags = AppFlags {
        settings,
        backend,
        runtime: runtime.handle().clone(),
    };

    SaverApp::run(Settings {
        window: iced::window::Settings {
            size: iced::Size::new(960.0, 720.0),
            min_size: Some(iced::Size::new(640.0, 520.0)),
            ..Default::default()
        },
        antialiasing: true,
        ..Settings::with_flags(flags)
    })?;

    Ok(())
}
