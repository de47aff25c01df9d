//! Main view implementation - Dark Slate Theme

use crate::api::models::{QualityChoice, VideoMetadata};
use crate::gui::app::Message;
use crate::gui::components::{processing_overlay, status_badge, url_input, video_card};
use crate::session::{DownloadOverlay, ServerReadiness};
use iced::widget::{column, container, image, row, scrollable, text, Space};
use iced::{Alignment, Element, Length};

/// Everything the main view reads from the application state
pub struct MainViewState<'a> {
    pub url_value: &'a str,
    pub is_loading: bool,
    pub error: Option<&'a str>,
    pub readiness: ServerReadiness,
    pub metadata: Option<&'a VideoMetadata>,
    pub choices: &'a [QualityChoice],
    pub thumbnail: Option<&'a image::Handle>,
    pub overlay: DownloadOverlay,
}

/// Create the main view
///
/// While the processing overlay is up it replaces the page, which keeps the
/// quality buttons from being pressed again underneath it.
pub fn main_view(state: MainViewState<'_>) -> Element<'static, Message> {
    use crate::gui::theme;

    if let DownloadOverlay::Visible { closeable, .. } = state.overlay {
        return processing_overlay(closeable);
    }

    let nav = row![
        text("UniversalSaver").size(22),
        Space::with_width(Length::Fill),
        status_badge(state.readiness),
    ]
    .align_items(Alignment::Center);

    let headline = column![
        text("Download videos easily").size(40),
        container(Space::with_height(4))
            .width(Length::Fixed(160.0))
            .style(iced::theme::Container::Custom(Box::new(theme::AccentBar))),
    ]
    .spacing(12)
    .align_items(Alignment::Center);

    let mut page = column![
        nav,
        Space::with_height(24),
        headline,
        url_input(state.url_value, state.is_loading, state.error.is_some()),
    ]
    .spacing(32)
    .align_items(Alignment::Center)
    .width(Length::Fill);

    if let Some(error) = state.error {
        page = page.push(text(error).size(15).style(theme::DANGER));
    }

    if let Some(metadata) = state.metadata {
        page = page.push(video_card(metadata, state.choices, state.thumbnail));
    }

    let content = scrollable(page.padding([32, 32, 48, 32]))
        .width(Length::Fill)
        .height(Length::Fill);

    container(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .style(iced::theme::Container::Custom(Box::new(
            theme::PageContainer,
        )))
        .into()
}
