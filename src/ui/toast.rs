//! Toast banner rendering.

use crate::notify::{Notifier, ToastKind};
use crate::ui::app::Message;
use crate::ui::style;
use crate::ui::theme::OmniTheme;

use iced::widget::{button, container, row, text, Space};
use iced::{Alignment, Element, Length};

/// Render the toast banner, or `None` when nothing is visible.
pub fn view<'a>(notifier: &'a Notifier, theme: &'a OmniTheme) -> Option<Element<'a, Message>> {
    if !notifier.is_visible() {
        return None;
    }

    let marker = match notifier.kind() {
        ToastKind::Success => "✓",
        ToastKind::Error => "✕",
        ToastKind::Info => "i",
    };

    let close = button(text("×").size(14))
        .padding([2, 8])
        .style(move |_, status| style::small_button(theme, status))
        .on_press(Message::ToastDismissed);

    let banner = container(
        row![
            text(marker).size(14),
            text(notifier.message()).size(13),
            Space::with_width(Length::Fill),
            close,
        ]
        .spacing(10)
        .align_y(Alignment::Center),
    )
    .padding([10, 14])
    .width(Length::Fill)
    .style(move |_| style::toast_banner(theme, notifier.kind()));

    Some(banner.into())
}
