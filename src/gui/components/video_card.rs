//! Metadata panel with the quality grid

use crate::api::models::{ChoiceKind, QualityChoice, VideoMetadata};
use crate::gui::app::Message;
use crate::gui::theme;
use iced::widget::{button, column, container, image, row, text, Column, Row, Space};
use iced::{Alignment, Element, Length};

const THUMBNAIL_WIDTH: f32 = 256.0;
const THUMBNAIL_HEIGHT: f32 = 144.0;
const GRID_COLUMNS: usize = 2;

/// Render an analyzed video
///
/// Missing title or author show as "Unknown"; a missing duration is left out.
pub fn video_card(
    metadata: &VideoMetadata,
    choices: &[QualityChoice],
    thumbnail: Option<&image::Handle>,
) -> Element<'static, Message> {
    let thumb: Element<'static, Message> = match thumbnail {
        Some(handle) => image(handle.clone())
            .width(Length::Fixed(THUMBNAIL_WIDTH))
            .into(),
        None => container(text("No preview").size(14).style(theme::TEXT_SECONDARY))
            .width(Length::Fixed(THUMBNAIL_WIDTH))
            .height(Length::Fixed(THUMBNAIL_HEIGHT))
            .center_x()
            .center_y()
            .style(iced::theme::Container::Custom(Box::new(theme::CardContainer)))
            .into(),
    };

    let mut details = column![
        text(metadata.title.as_deref().unwrap_or("Unknown title")).size(24),
        text(metadata.author.as_deref().unwrap_or("Unknown author"))
            .size(16)
            .style(theme::TEXT_SECONDARY),
    ]
    .spacing(6);
    if let Some(duration) = &metadata.duration {
        details = details.push(
            text(format!("Duration: {}", duration))
                .size(14)
                .style(theme::TEXT_SECONDARY),
        );
    }

    let header = row![thumb, details]
        .spacing(32)
        .align_items(Alignment::Center);

    container(column![header, quality_grid(choices)].spacing(32))
        .padding(32)
        .width(Length::Fill)
        .max_width(900.0)
        .style(iced::theme::Container::Custom(Box::new(theme::CardContainer)))
        .into()
}

fn quality_grid(choices: &[QualityChoice]) -> Element<'static, Message> {
    let mut grid = Column::new().spacing(16);

    for chunk in choices.chunks(GRID_COLUMNS) {
        let mut line = Row::new().spacing(16);
        for choice in chunk {
            line = line.push(quality_button(choice));
        }
        if chunk.len() < GRID_COLUMNS {
            line = line.push(Space::with_width(Length::Fill));
        }
        grid = grid.push(line);
    }

    grid.into()
}

fn quality_button(choice: &QualityChoice) -> Element<'static, Message> {
    let (style, icon) = match choice.kind {
        ChoiceKind::Video => (theme::QualityButton::Video, "Download"),
        ChoiceKind::Audio => (theme::QualityButton::Audio, "MP3"),
    };

    button(
        row![
            text(choice.label.clone()).size(16),
            Space::with_width(Length::Fill),
            text(icon).size(12),
        ]
        .align_items(Alignment::Center),
    )
    .on_press(Message::QualityChosen(choice.id.clone()))
    .padding(16)
    .width(Length::Fill)
    .style(iced::theme::Button::Custom(Box::new(style)))
    .into()
}
