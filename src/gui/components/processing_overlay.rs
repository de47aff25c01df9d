//! Processing overlay
//!
//! The download runs in the browser and reports nothing back, so this panel
//! is only a courtesy: it appears right after the hand-off and offers a close
//! button once the configured delay has passed.

use crate::gui::app::Message;
use crate::gui::theme;
use iced::widget::{button, column, container, text};
use iced::{Alignment, Element, Length};

pub fn processing_overlay(closeable: bool) -> Element<'static, Message> {
    let mut card = column![
        text("Processing...").size(26),
        text("Your download will start shortly. Please wait while the server prepares the file.")
            .size(14)
            .style(theme::TEXT_SECONDARY)
            .horizontal_alignment(iced::alignment::Horizontal::Center),
    ]
    .spacing(12)
    .align_items(Alignment::Center);

    if closeable {
        card = card.push(
            button(text("Close").size(14))
                .on_press(Message::CloseOverlay)
                .padding([10, 24])
                .style(iced::theme::Button::Custom(Box::new(theme::PrimaryButton))),
        );
    }

    let panel = container(card)
        .padding(32)
        .max_width(380.0)
        .style(iced::theme::Container::Custom(Box::new(theme::OverlayCard)));

    container(panel)
        .width(Length::Fill)
        .height(Length::Fill)
        .center_x()
        .center_y()
        .style(iced::theme::Container::Custom(Box::new(
            theme::BackdropContainer,
        )))
        .into()
}
