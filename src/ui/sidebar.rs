//! Persistent navigation sidebar.

use crate::store::Page;
use crate::ui::app::Message;
use crate::ui::style;
use crate::ui::theme::OmniTheme;

use iced::widget::{button, column, container, text, Column, Space};
use iced::{Element, Length};

pub fn view(current: Page, theme: &OmniTheme) -> Element<'_, Message> {
    let brand = column![
        text("OmniSell").size(20).color(theme.accent),
        text("Unifying Commerce.").size(11).color(theme.subtext),
    ]
    .spacing(2)
    .padding([8, 12]);

    let nav_buttons: Vec<Element<'_, Message>> = Page::ALL
        .iter()
        .map(|page| {
            let active = *page == current;
            button(text(page.to_string()).size(14))
                .padding([12, 16])
                .width(Length::Fill)
                .style(move |_, status| style::sidebar_button(theme, active, status))
                .on_press(Message::Navigate(*page))
                .into()
        })
        .collect();

    let nav = Column::with_children(nav_buttons).spacing(4);

    let footer = text("© 2024 OmniSell Inc.").size(11).color(theme.subtext);

    let content = column![
        brand,
        Space::with_height(24),
        nav,
        Space::with_height(Length::Fill),
        container(footer).padding([8, 12]),
    ]
    .padding(12);

    container(content)
        .width(Length::Fixed(210.0))
        .height(Length::Fill)
        .style(move |_| style::sidebar_container(theme))
        .into()
}
