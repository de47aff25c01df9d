use crate::gui::app::Message;
use crate::gui::theme;
use crate::session::ServerReadiness;
use iced::widget::{container, text};
use iced::Element;

/// Backend readiness pill
pub fn status_badge(readiness: ServerReadiness) -> Element<'static, Message> {
    let style = match readiness {
        ServerReadiness::Ready => theme::StatusBadge::Online,
        ServerReadiness::Sleeping | ServerReadiness::Waking => theme::StatusBadge::Starting,
    };

    container(text(readiness.label()).size(12))
        .padding([4, 12])
        .style(iced::theme::Container::Custom(Box::new(style)))
        .into()
}
