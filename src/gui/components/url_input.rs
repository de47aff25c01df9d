//! URL input bar

use crate::gui::app::Message;
use iced::widget::{button, container, row, text, text_input, tooltip};
use iced::{Alignment, Element, Length};

/// Input field with paste/clear helpers and the analyze button
///
/// Submitting (button or Enter) is disabled while an analysis is running.
pub fn url_input(value: &str, is_loading: bool, has_error: bool) -> Element<'static, Message> {
    use crate::gui::theme;

    let mut input = text_input("Paste the link here...", value)
        .padding(15)
        .size(16)
        .width(Length::Fill)
        .style(if has_error {
            iced::theme::TextInput::Custom(Box::new(theme::InputErrorStyle))
        } else {
            iced::theme::TextInput::Custom(Box::new(theme::InputStyle))
        });
    if !is_loading {
        input = input
            .on_input(Message::UrlInputChanged)
            .on_submit(Message::AnalyzePressed);
    }

    let submit = button(text(if is_loading { "Analyzing..." } else { "Download" }).size(16))
        .on_press_maybe((!is_loading).then_some(Message::AnalyzePressed))
        .padding([12, 24])
        .style(iced::theme::Button::Custom(Box::new(theme::PrimaryButton)));

    let bar = row![
        input,
        tooltip(
            button(text("Paste").size(14))
                .on_press_maybe((!is_loading).then_some(Message::PasteFromClipboard))
                .padding([8, 12])
                .style(iced::theme::Button::Custom(Box::new(theme::IconButton))),
            "Paste from clipboard",
            tooltip::Position::Bottom,
        ),
        button(text("Clear").size(14))
            .on_press_maybe((!is_loading).then_some(Message::ClearUrlInput))
            .padding([8, 12])
            .style(iced::theme::Button::Custom(Box::new(theme::IconButton))),
        submit,
    ]
    .spacing(8)
    .align_items(Alignment::Center);

    container(bar)
        .padding(8)
        .width(Length::Fill)
        .max_width(760.0)
        .style(iced::theme::Container::Custom(Box::new(theme::CardContainer)))
        .into()
}
