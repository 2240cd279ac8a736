//! Platform integration settings.

use crate::store::AppState;
use crate::ui::app::Message;
use crate::ui::style;
use crate::ui::theme::OmniTheme;

use iced::widget::{button, column, container, row, text, Column, Space};
use iced::{Alignment, Element, Length};

pub fn view<'a>(state: &'a AppState, theme: &'a OmniTheme) -> Element<'a, Message> {
    let title = text("Settings").size(26).color(theme.text);
    let subtitle = text("Connect your accounts to enable automated product listing.")
        .size(14)
        .color(theme.subtext);

    let heading = text("Platform Integrations").size(18).color(theme.text);

    let rows: Vec<Element<'a, Message>> = state
        .platforms
        .iter()
        .map(|platform| {
            let swatch = container(Space::new(10, 10)).style({
                let color = OmniTheme::from_hex(&platform.color);
                move |_| iced::widget::container::Style {
                    background: Some(iced::Background::Color(color)),
                    border: iced::Border {
                        radius: 5.0.into(),
                        ..Default::default()
                    },
                    ..Default::default()
                }
            });

            let name = text(platform.name.as_str()).size(15).color(theme.text);

            let status = if platform.is_linked {
                text("Connected").size(13).color(theme.success)
            } else {
                text("Not Connected").size(13).color(theme.subtext)
            };

            let toggle_label = if platform.is_linked {
                "Disconnect"
            } else {
                "Connect"
            };
            let linked = platform.is_linked;
            let toggle = button(text(toggle_label).size(13))
                .padding([8, 16])
                .style(move |_, status| style::link_button(theme, linked, status))
                .on_press(Message::ToggleLink(platform.id.clone()));

            container(
                row![
                    swatch,
                    name,
                    Space::with_width(Length::Fill),
                    status,
                    toggle,
                ]
                .spacing(14)
                .align_y(Alignment::Center),
            )
            .padding(16)
            .width(Length::Fill)
            .style(move |_| style::list_item(theme))
            .into()
        })
        .collect();

    let list = Column::with_children(rows).spacing(10);

    let card = container(column![heading, list].spacing(16))
        .padding(24)
        .width(Length::Fill)
        .style(move |_| style::card(theme));

    column![title, subtitle, Space::with_height(12), card]
        .spacing(6)
        .into()
}
