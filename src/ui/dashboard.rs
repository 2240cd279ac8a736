//! Seller dashboard: welcome header, setup checklist, stats, and the
//! most recent listings.

use crate::store::{AppState, Page};
use crate::ui::app::Message;
use crate::ui::style;
use crate::ui::theme::OmniTheme;

use iced::widget::{button, column, container, row, text, Column, Space};
use iced::{Alignment, Element, Length};

// Mock account data, matching the rest of the demo catalog.
const SELLER_NAME: &str = "Maria Dela Cruz";
const SELLER_PLAN: &str = "Premium Plan";
const TOTAL_SALES: f64 = 1250.50;

const RECENT_LIMIT: usize = 4;

pub fn view<'a>(state: &'a AppState, theme: &'a OmniTheme) -> Element<'a, Message> {
    let mut page = column![build_header(theme)].spacing(20);

    if state.checklist_visible() {
        page = page.push(build_checklist(state, theme));
    }

    page = page
        .push(build_stats(state, theme))
        .push(build_recent(state, theme));

    page.into()
}

fn build_header(theme: &OmniTheme) -> Element<'_, Message> {
    let welcome = column![
        text("Welcome back,").size(24).color(theme.text),
        text(format!("{}!", SELLER_NAME)).size(19).color(theme.subtext),
        text(SELLER_PLAN).size(12).color(theme.highlight),
    ]
    .spacing(2);

    let add_button = button(text("Add New Product").size(14))
        .padding([12, 20])
        .style(move |_, status| style::primary_button(theme, status))
        .on_press(Message::Navigate(Page::AddProduct));

    row![welcome, Space::with_width(Length::Fill), add_button]
        .align_y(Alignment::Center)
        .into()
}

fn build_checklist<'a>(state: &'a AppState, theme: &'a OmniTheme) -> Element<'a, Message> {
    let items = [
        (
            "Connect your first platform",
            state.has_linked_platform(),
            Page::Settings,
        ),
        (
            "Add your first product",
            !state.products.is_empty(),
            Page::AddProduct,
        ),
        ("Explore the marketplace", false, Page::Explore),
    ];

    let heading = row![
        text("Your Setup Guide").size(18).color(theme.accent),
        Space::with_width(Length::Fill),
        button(text("×").size(16))
            .padding([2, 10])
            .style(move |_, status| style::small_button(theme, status))
            .on_press(Message::DismissChecklist),
    ]
    .align_y(Alignment::Center);

    let mut list = column![heading].spacing(10);
    for (label, done, target) in items {
        let marker = if done { "✓" } else { "○" };
        let marker_color = if done { theme.success } else { theme.subtext };

        let mut item_row = row![
            text(marker).size(15).color(marker_color),
            text(label).size(14).color(theme.text),
            Space::with_width(Length::Fill),
        ]
        .spacing(12)
        .align_y(Alignment::Center);

        if !done {
            item_row = item_row.push(text("START").size(11).color(theme.accent));
        }

        list = list.push(
            button(item_row)
                .padding([10, 14])
                .width(Length::Fill)
                .style(move |_, status| style::small_button(theme, status))
                .on_press(Message::Navigate(target)),
        );
    }

    container(list)
        .padding(20)
        .width(Length::Fill)
        .style(move |_| style::checklist_panel(theme))
        .into()
}

fn build_stats<'a>(state: &'a AppState, theme: &'a OmniTheme) -> Element<'a, Message> {
    let cards = [
        ("Total Products", state.products.len().to_string()),
        (
            "Linked Platforms",
            state.linked_platform_count().to_string(),
        ),
        ("Total Sales", format!("${:.2}", TOTAL_SALES)),
    ];

    let mut stats = row![].spacing(16);
    for (label, value) in cards {
        stats = stats.push(
            container(
                column![
                    text(label).size(13).color(theme.subtext),
                    text(value).size(24).color(theme.text),
                ]
                .spacing(4),
            )
            .padding(20)
            .width(Length::Fill)
            .style(move |_| style::card(theme)),
        );
    }

    stats.into()
}

fn build_recent<'a>(state: &'a AppState, theme: &'a OmniTheme) -> Element<'a, Message> {
    let heading = text("Recent Products").size(18).color(theme.text);

    let body: Element<'a, Message> = if state.products.is_empty() {
        column![
            text("No products yet.").size(14).color(theme.subtext),
            button(text("Add your first product").size(13))
                .padding([8, 14])
                .style(move |_, status| style::small_button(theme, status))
                .on_press(Message::Navigate(Page::AddProduct)),
        ]
        .spacing(8)
        .align_x(Alignment::Center)
        .width(Length::Fill)
        .into()
    } else {
        let rows: Vec<Element<'a, Message>> = state
            .products
            .iter()
            .take(RECENT_LIMIT)
            .map(|product| {
                let live = !product.platform_ids.is_empty();
                let info = column![
                    text(product.name.as_str()).size(14).color(theme.text),
                    text(product.category.as_str()).size(12).color(theme.subtext),
                ]
                .spacing(2);

                let pill = container(text(product.status_label()).size(11))
                    .padding([4, 10])
                    .style(move |_| style::status_pill(theme, live));

                container(
                    row![
                        info,
                        Space::with_width(Length::Fill),
                        text(format!("${:.2}", product.price))
                            .size(13)
                            .color(theme.text),
                        text(format!("{} units", product.quantity))
                            .size(13)
                            .color(theme.subtext),
                        pill,
                    ]
                    .spacing(20)
                    .align_y(Alignment::Center),
                )
                .padding(12)
                .width(Length::Fill)
                .style(move |_| style::list_item(theme))
                .into()
            })
            .collect();

        Column::with_children(rows).spacing(8).into()
    };

    container(column![heading, body].spacing(14))
        .padding(24)
        .width(Length::Fill)
        .style(move |_| style::card(theme))
        .into()
}
