//! Read-only marketplace browser.

use crate::catalog::{self, Product};
use crate::notify::ToastKind;
use crate::store::AppState;
use crate::ui::style;
use crate::ui::theme::OmniTheme;

use iced::widget::{button, column, container, row, text, text_input, Column, Row, Space};
use iced::{Alignment, Element, Length};

const GRID_COLUMNS: usize = 3;

/// Explore page state: the search term and the product opened in the
/// detail panel, if any.
pub struct ExplorePage {
    search: String,
    selected: Option<String>,
}

#[derive(Debug, Clone)]
pub enum Event {
    SearchChanged(String),
    ProductOpened(String),
    DetailClosed,
    VisitPressed(String),
}

#[derive(Debug)]
pub enum Action {
    None,
    Notify(String, ToastKind),
}

impl ExplorePage {
    pub fn new() -> Self {
        Self {
            search: String::new(),
            selected: None,
        }
    }

    pub fn update(&mut self, event: Event) -> Action {
        match event {
            Event::SearchChanged(term) => {
                self.search = term;
                Action::None
            }

            Event::ProductOpened(id) => {
                self.selected = Some(id);
                Action::None
            }

            Event::DetailClosed => {
                self.selected = None;
                Action::None
            }

            Event::VisitPressed(platform_name) => Action::Notify(
                format!("Redirecting to {}... (placeholder)", platform_name),
                ToastKind::Info,
            ),
        }
    }

    pub fn view<'a>(&'a self, state: &'a AppState, theme: &'a OmniTheme) -> Element<'a, Event> {
        if let Some(product) = self
            .selected
            .as_deref()
            .and_then(|id| state.product_by_id(id))
        {
            return self.build_detail(product, state, theme);
        }

        let title = text("Explore the Marketplace").size(28).color(theme.text);
        let subtitle = text(
            "Discover unique products from thousands of independent sellers unified on our platform.",
        )
        .size(14)
        .color(theme.subtext);

        let search = text_input("Search for products or categories...", &self.search)
            .on_input(Event::SearchChanged)
            .padding(12)
            .size(15)
            .width(Length::Fixed(420.0))
            .style(move |_, status| style::form_input(theme, status));

        let results = catalog::search(&state.products, &self.search);
        let grid = self.build_grid(&results, theme);

        column![
            column![title, subtitle].spacing(6).align_x(Alignment::Center),
            search,
            grid,
        ]
        .spacing(20)
        .align_x(Alignment::Center)
        .width(Length::Fill)
        .into()
    }

    fn build_grid<'a>(
        &'a self,
        products: &[&'a Product],
        theme: &'a OmniTheme,
    ) -> Element<'a, Event> {
        if products.is_empty() {
            return text("No products match your search.")
                .size(14)
                .color(theme.subtext)
                .into();
        }

        let mut grid = Column::new().spacing(16).width(Length::Fill);
        for chunk in products.chunks(GRID_COLUMNS) {
            let mut cards = Row::new().spacing(16).width(Length::Fill);
            for product in chunk {
                cards = cards.push(build_card(*product, theme));
            }
            // Pad the last row so cards keep their width.
            for _ in chunk.len()..GRID_COLUMNS {
                cards = cards.push(Space::with_width(Length::Fill));
            }
            grid = grid.push(cards);
        }

        grid.into()
    }

    fn build_detail<'a>(
        &'a self,
        product: &'a Product,
        state: &'a AppState,
        theme: &'a OmniTheme,
    ) -> Element<'a, Event> {
        let name = text(product.name.as_str()).size(24).color(theme.text);
        let price = text(format!("${:.2}", product.price))
            .size(16)
            .color(theme.subtext);
        let description = text(product.description.as_str())
            .size(14)
            .color(theme.text);

        let mut availability = column![text("View or purchase on:")
            .size(13)
            .color(theme.subtext)]
        .spacing(8);

        if product.platform_ids.is_empty() {
            availability = availability.push(
                text("Not available on any platform yet.")
                    .size(13)
                    .color(theme.subtext),
            );
        } else {
            for id in &product.platform_ids {
                if let Some(platform) = state.platform_by_id(id) {
                    availability = availability.push(
                        button(text(format!("View on {}", platform.name)).size(13))
                            .padding([8, 14])
                            .width(Length::Fill)
                            .style(move |_, status| style::primary_button(theme, status))
                            .on_press(Event::VisitPressed(platform.name.clone())),
                    );
                }
            }
        }

        let close = button(text("Close").size(13))
            .padding([8, 18])
            .style(move |_, status| style::small_button(theme, status))
            .on_press(Event::DetailClosed);

        let panel = container(
            column![
                name,
                price,
                Space::with_height(8),
                description,
                Space::with_height(12),
                availability,
                Space::with_height(12),
                row![Space::with_width(Length::Fill), close],
            ]
            .spacing(4),
        )
        .padding(24)
        .width(Length::Fixed(480.0))
        .style(move |_| style::card(theme));

        column![panel]
            .width(Length::Fill)
            .align_x(Alignment::Center)
            .into()
    }
}

impl Default for ExplorePage {
    fn default() -> Self {
        Self::new()
    }
}

fn build_card<'a>(product: &'a Product, theme: &'a OmniTheme) -> Element<'a, Event> {
    let name = text(product.name.as_str()).size(15).color(theme.text);
    let category = text(product.category.as_str())
        .size(12)
        .color(theme.subtext);
    let price = text(format!("${:.2}", product.price))
        .size(16)
        .color(theme.accent);

    button(column![name, category, price].spacing(4))
        .padding(16)
        .width(Length::Fill)
        .style(move |_, status| style::card_button(theme, status))
        .on_press(Event::ProductOpened(product.id.clone()))
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_and_close_detail() {
        let mut page = ExplorePage::new();

        page.update(Event::ProductOpened("prod-1".to_string()));
        assert_eq!(page.selected.as_deref(), Some("prod-1"));

        page.update(Event::DetailClosed);
        assert!(page.selected.is_none());
    }

    #[test]
    fn test_search_term_updates() {
        let mut page = ExplorePage::new();
        page.update(Event::SearchChanged("mug".to_string()));
        assert_eq!(page.search, "mug");
    }

    #[test]
    fn test_visit_raises_info_toast() {
        let mut page = ExplorePage::new();
        match page.update(Event::VisitPressed("Shopee".to_string())) {
            Action::Notify(message, ToastKind::Info) => {
                assert_eq!(message, "Redirecting to Shopee... (placeholder)");
            }
            other => panic!("expected notify, got {:?}", other),
        }
    }
}
