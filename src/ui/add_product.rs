//! Add-product form with the AI suggestion workflow.
//!
//! The form owns its draft state and reports outcomes to the root app as
//! [`Action`]s: run a suggestion request, publish a validated draft, or
//! raise a toast. Validation failures never leave the form.

use crate::catalog::{Platform, ProductDraft};
use crate::markup;
use crate::notify::ToastKind;
use crate::suggest::{Suggestion, SuggestionRequest};
use crate::ui::style;
use crate::ui::theme::OmniTheme;

use iced::widget::{button, column, container, row, text, text_editor, text_input, Row, Space};
use iced::{Alignment, Element, Length};

/// Draft form state. `generating` is the in-flight latch for the
/// suggestion round-trip: while set, the trigger is disabled and repeat
/// requests are ignored.
pub struct AddProductPage {
    name: String,
    description: text_editor::Content,
    price: String,
    quantity: String,
    category: String,
    keywords: String,
    selected_platforms: Vec<String>,
    generating: bool,
    error: Option<String>,
}

/// Events raised by the form widgets.
#[derive(Debug, Clone)]
pub enum Event {
    NameChanged(String),
    DescriptionEdited(text_editor::Action),
    PriceChanged(String),
    QuantityChanged(String),
    CategoryChanged(String),
    KeywordsChanged(String),
    PlatformToggled(String),
    GeneratePressed,
    Generated(Result<Suggestion, String>),
    SubmitPressed,
}

/// What the root app should do after an update.
#[derive(Debug)]
pub enum Action {
    None,
    /// Start a suggestion request.
    Generate(SuggestionRequest),
    /// Store the validated draft.
    Publish(ProductDraft),
    /// Show a toast.
    Notify(String, ToastKind),
}

impl AddProductPage {
    pub fn new() -> Self {
        Self {
            name: String::new(),
            description: text_editor::Content::new(),
            price: String::new(),
            quantity: String::new(),
            category: String::new(),
            keywords: String::new(),
            selected_platforms: Vec::new(),
            generating: false,
            error: None,
        }
    }

    pub fn update(&mut self, event: Event, platforms: &[Platform]) -> Action {
        match event {
            Event::NameChanged(value) => {
                self.name = value;
                Action::None
            }

            Event::DescriptionEdited(action) => {
                self.description.perform(action);
                Action::None
            }

            Event::PriceChanged(value) => {
                self.price = value;
                Action::None
            }

            Event::QuantityChanged(value) => {
                self.quantity = value;
                Action::None
            }

            Event::CategoryChanged(value) => {
                self.category = value;
                Action::None
            }

            Event::KeywordsChanged(value) => {
                self.keywords = value;
                Action::None
            }

            Event::PlatformToggled(id) => {
                // Unlinked platforms are not selectable; the tile has no
                // press handler, but guard here as well.
                let linked = platforms.iter().any(|p| p.id == id && p.is_linked);
                if linked {
                    if let Some(pos) = self.selected_platforms.iter().position(|p| *p == id) {
                        self.selected_platforms.remove(pos);
                    } else {
                        self.selected_platforms.push(id);
                    }
                }
                Action::None
            }

            Event::GeneratePressed => {
                if self.generating {
                    return Action::None;
                }
                if self.name.trim().is_empty() && self.category.trim().is_empty() {
                    self.error =
                        Some("Please provide a Product Name and Category first.".to_string());
                    return Action::None;
                }

                self.error = None;
                self.generating = true;
                Action::Generate(SuggestionRequest {
                    name: self.name.clone(),
                    category: self.category.clone(),
                    keywords: self.keywords.clone(),
                })
            }

            Event::Generated(Ok(suggestion)) => {
                self.generating = false;
                self.name = suggestion.title;
                self.description =
                    text_editor::Content::with_text(&markup::to_display_text(
                        &suggestion.description,
                    ));
                Action::Notify("AI content generated!".to_string(), ToastKind::Success)
            }

            Event::Generated(Err(reason)) => {
                self.generating = false;
                self.error = Some(reason.clone());
                Action::Notify(reason, ToastKind::Error)
            }

            Event::SubmitPressed => match self.validate() {
                Ok(draft) => Action::Publish(draft),
                Err(message) => {
                    self.error = Some(message);
                    Action::None
                }
            },
        }
    }

    /// The validation gate in front of `AppState::add_product`. Failing
    /// drafts stay in the form with an inline error.
    fn validate(&self) -> Result<ProductDraft, String> {
        if self.name.trim().is_empty()
            || self.price.trim().is_empty()
            || self.category.trim().is_empty()
            || self.quantity.trim().is_empty()
        {
            return Err("Name, Price, Category, and Quantity are required.".to_string());
        }

        let price: f64 = self
            .price
            .trim()
            .parse()
            .map_err(|_| "Price must be a number.".to_string())?;
        if price < 0.0 {
            return Err("Price must not be negative.".to_string());
        }

        let quantity: u32 = self
            .quantity
            .trim()
            .parse()
            .map_err(|_| "Quantity must be a whole number.".to_string())?;

        Ok(ProductDraft {
            name: self.name.trim().to_string(),
            description: self.description.text().trim_end().to_string(),
            price,
            quantity,
            category: self.category.trim().to_string(),
            platform_ids: self.selected_platforms.clone(),
        })
    }

    pub fn is_generating(&self) -> bool {
        self.generating
    }

    pub fn view<'a>(
        &'a self,
        platforms: &'a [Platform],
        theme: &'a OmniTheme,
    ) -> Element<'a, Event> {
        let title = text("Add New Product").size(26).color(theme.text);
        let subtitle =
            text("Fill in the details below to list a new product across your linked platforms.")
                .size(14)
                .color(theme.subtext);

        let mut sections = column![title, subtitle].spacing(6);

        if let Some(ref error) = self.error {
            let banner = container(text(error.clone()).size(14).color(theme.danger))
                .padding(12)
                .width(Length::Fill)
                .style(move |_| style::toast_banner(theme, ToastKind::Error));
            sections = sections.push(Space::with_height(8)).push(banner);
        }

        sections = sections
            .push(Space::with_height(12))
            .push(self.build_details_card(theme))
            .push(Space::with_height(16))
            .push(self.build_platforms_card(platforms, theme))
            .push(Space::with_height(16))
            .push(self.build_submit_row(theme));

        sections.into()
    }

    fn build_details_card<'a>(&'a self, theme: &'a OmniTheme) -> Element<'a, Event> {
        let heading = text("Product Details").size(18).color(theme.text);

        let name_input = labeled_input(
            theme,
            "Product Name",
            "e.g. Wireless Ergonomic Mouse",
            &self.name,
            Event::NameChanged,
        );
        let category_input = labeled_input(
            theme,
            "Category",
            "e.g. Electronics",
            &self.category,
            Event::CategoryChanged,
        );

        let assistant = self.build_assistant_box(theme);

        let description_label = text("Description").size(13).color(theme.subtext);
        let description_editor = text_editor(&self.description)
            .on_action(Event::DescriptionEdited)
            .height(140)
            .padding(12)
            .style(move |_, status| style::form_editor(theme, status));
        let description_hint =
            text("Tip: Use the AI generator for a great starting point, then click to edit.")
                .size(12)
                .color(theme.subtext);

        let price_input = labeled_input(
            theme,
            "Price ($)",
            "e.g. 49.99",
            &self.price,
            Event::PriceChanged,
        );
        let quantity_input = labeled_input(
            theme,
            "Quantity",
            "e.g. 100",
            &self.quantity,
            Event::QuantityChanged,
        );
        let numbers = row![price_input, quantity_input].spacing(16);

        container(
            column![
                heading,
                name_input,
                category_input,
                assistant,
                column![description_label, description_editor, description_hint].spacing(6),
                numbers,
            ]
            .spacing(16),
        )
        .padding(24)
        .width(Length::Fill)
        .style(move |_| style::card(theme))
        .into()
    }

    fn build_assistant_box<'a>(&'a self, theme: &'a OmniTheme) -> Element<'a, Event> {
        let heading = text("Automated SEO Assistant").size(13).color(theme.accent);

        let keywords_input = labeled_input(
            theme,
            "Keywords (optional, comma-separated)",
            "e.g. comfortable, gaming, office",
            &self.keywords,
            Event::KeywordsChanged,
        );

        let label = if self.generating {
            "Generating..."
        } else {
            "Generate Title & Description with AI"
        };
        let trigger = button(text(label).size(14))
            .padding([10, 16])
            .width(Length::Fill)
            .style(move |_, status| style::primary_button(theme, status))
            .on_press_maybe((!self.generating).then_some(Event::GeneratePressed));

        container(column![heading, keywords_input, trigger].spacing(12))
            .padding(16)
            .width(Length::Fill)
            .style(move |_| style::list_item(theme))
            .into()
    }

    fn build_platforms_card<'a>(
        &'a self,
        platforms: &'a [Platform],
        theme: &'a OmniTheme,
    ) -> Element<'a, Event> {
        let heading = text("Publish to Platforms").size(18).color(theme.text);

        let tiles: Vec<Element<'a, Event>> = platforms
            .iter()
            .map(|platform| self.build_platform_tile(platform, theme))
            .collect();
        let tile_row = Row::with_children(tiles).spacing(12);

        container(column![heading, tile_row].spacing(16))
            .padding(24)
            .width(Length::Fill)
            .style(move |_| style::card(theme))
            .into()
    }

    fn build_platform_tile<'a>(
        &'a self,
        platform: &'a Platform,
        theme: &'a OmniTheme,
    ) -> Element<'a, Event> {
        let selected = self.selected_platforms.contains(&platform.id);

        let name = text(platform.name.as_str()).size(14);
        let mut tile_content = column![name].spacing(4).align_x(Alignment::Center);
        if !platform.is_linked {
            tile_content =
                tile_content.push(text("(Not Connected)").size(11).color(theme.subtext));
        }

        button(tile_content)
            .padding(16)
            .width(Length::Fill)
            .style(move |_, _| style::platform_tile(theme, selected, platform.is_linked))
            .on_press_maybe(
                platform
                    .is_linked
                    .then(|| Event::PlatformToggled(platform.id.clone())),
            )
            .into()
    }

    fn build_submit_row<'a>(&'a self, theme: &'a OmniTheme) -> Element<'a, Event> {
        let submit = button(text("Publish Product").size(15))
            .padding([12, 28])
            .style(move |_, status| style::highlight_button(theme, status))
            .on_press(Event::SubmitPressed);

        row![Space::with_width(Length::Fill), submit].into()
    }
}

impl Default for AddProductPage {
    fn default() -> Self {
        Self::new()
    }
}

fn labeled_input<'a>(
    theme: &'a OmniTheme,
    label: &'a str,
    placeholder: &'a str,
    value: &'a str,
    on_input: impl Fn(String) -> Event + 'a,
) -> Element<'a, Event> {
    let label = text(label).size(13).color(theme.subtext);
    let input = text_input(placeholder, value)
        .on_input(on_input)
        .padding(10)
        .size(14)
        .style(move |_, status| style::form_input(theme, status));

    column![label, input].spacing(6).width(Length::Fill).into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::seed_platforms;

    fn linked_platforms() -> Vec<Platform> {
        let mut platforms = seed_platforms();
        platforms[0].is_linked = true; // shopee
        platforms
    }

    fn filled_page() -> AddProductPage {
        let mut page = AddProductPage::new();
        let platforms = linked_platforms();
        for event in [
            Event::NameChanged("Mouse".to_string()),
            Event::PriceChanged("49.99".to_string()),
            Event::CategoryChanged("Electronics".to_string()),
            Event::QuantityChanged("100".to_string()),
        ] {
            page.update(event, &platforms);
        }
        page
    }

    #[test]
    fn test_submit_publishes_parsed_draft() {
        let mut page = filled_page();
        let action = page.update(Event::SubmitPressed, &linked_platforms());

        match action {
            Action::Publish(draft) => {
                assert_eq!(draft.name, "Mouse");
                assert_eq!(draft.price, 49.99);
                assert_eq!(draft.quantity, 100);
                assert_eq!(draft.category, "Electronics");
            }
            other => panic!("expected Publish, got {:?}", other),
        }
    }

    #[test]
    fn test_submit_with_missing_field_does_not_publish() {
        let platforms = linked_platforms();

        for missing in ["name", "price", "category", "quantity"] {
            let mut page = filled_page();
            let clear = match missing {
                "name" => Event::NameChanged(String::new()),
                "price" => Event::PriceChanged(String::new()),
                "category" => Event::CategoryChanged(String::new()),
                _ => Event::QuantityChanged(String::new()),
            };
            page.update(clear, &platforms);

            let action = page.update(Event::SubmitPressed, &platforms);
            assert!(matches!(action, Action::None), "{} accepted empty", missing);
            assert!(page.error.is_some());
        }
    }

    #[test]
    fn test_submit_rejects_unparseable_numbers() {
        let platforms = linked_platforms();

        let mut page = filled_page();
        page.update(Event::PriceChanged("cheap".to_string()), &platforms);
        assert!(matches!(
            page.update(Event::SubmitPressed, &platforms),
            Action::None
        ));

        let mut page = filled_page();
        page.update(Event::QuantityChanged("2.5".to_string()), &platforms);
        assert!(matches!(
            page.update(Event::SubmitPressed, &platforms),
            Action::None
        ));
    }

    #[test]
    fn test_submit_rejects_negative_price() {
        let platforms = linked_platforms();
        let mut page = filled_page();
        page.update(Event::PriceChanged("-1".to_string()), &platforms);

        assert!(matches!(
            page.update(Event::SubmitPressed, &platforms),
            Action::None
        ));
    }

    #[test]
    fn test_generate_requires_name_or_category() {
        let mut page = AddProductPage::new();
        let action = page.update(Event::GeneratePressed, &linked_platforms());

        assert!(matches!(action, Action::None));
        assert!(!page.is_generating());
        assert!(page.error.is_some());
    }

    #[test]
    fn test_generate_enters_generating_state() {
        let mut page = filled_page();
        let action = page.update(Event::GeneratePressed, &linked_platforms());

        match action {
            Action::Generate(request) => {
                assert_eq!(request.name, "Mouse");
                assert_eq!(request.category, "Electronics");
            }
            other => panic!("expected Generate, got {:?}", other),
        }
        assert!(page.is_generating());
    }

    #[test]
    fn test_duplicate_generate_is_ignored_while_in_flight() {
        let mut page = filled_page();
        let platforms = linked_platforms();

        assert!(matches!(
            page.update(Event::GeneratePressed, &platforms),
            Action::Generate(_)
        ));
        assert!(matches!(
            page.update(Event::GeneratePressed, &platforms),
            Action::None
        ));
    }

    #[test]
    fn test_successful_generation_fills_fields() {
        let mut page = filled_page();
        let platforms = linked_platforms();
        page.update(Event::GeneratePressed, &platforms);

        let suggestion = Suggestion {
            title: "Ergonomic Wireless Mouse - All-Day Comfort".to_string(),
            description: "**Comfort** first:\n- silent clicks".to_string(),
        };
        let action = page.update(Event::Generated(Ok(suggestion)), &platforms);

        assert!(matches!(action, Action::Notify(_, ToastKind::Success)));
        assert!(!page.is_generating());
        assert_eq!(page.name, "Ergonomic Wireless Mouse - All-Day Comfort");
        assert_eq!(page.description.text().trim_end(), "Comfort first:\n• silent clicks");
    }

    #[test]
    fn test_failed_generation_reports_and_returns_to_editing() {
        let mut page = filled_page();
        let platforms = linked_platforms();
        page.update(Event::GeneratePressed, &platforms);

        let action = page.update(
            Event::Generated(Err("API key is not configured.".to_string())),
            &platforms,
        );

        match action {
            Action::Notify(reason, ToastKind::Error) => {
                assert!(reason.contains("API key"));
            }
            other => panic!("expected error notify, got {:?}", other),
        }
        assert!(!page.is_generating());
        assert!(page.error.is_some());
    }

    #[test]
    fn test_platform_toggle_only_for_linked() {
        let mut page = AddProductPage::new();
        let platforms = linked_platforms();

        page.update(Event::PlatformToggled("shopee".to_string()), &platforms);
        assert_eq!(page.selected_platforms, vec!["shopee".to_string()]);

        // lazada is not linked in the fixture
        page.update(Event::PlatformToggled("lazada".to_string()), &platforms);
        assert_eq!(page.selected_platforms, vec!["shopee".to_string()]);

        page.update(Event::PlatformToggled("shopee".to_string()), &platforms);
        assert!(page.selected_platforms.is_empty());
    }

    #[test]
    fn test_selected_platforms_flow_into_draft() {
        let mut page = filled_page();
        let platforms = linked_platforms();
        page.update(Event::PlatformToggled("shopee".to_string()), &platforms);

        match page.update(Event::SubmitPressed, &platforms) {
            Action::Publish(draft) => {
                assert_eq!(draft.platform_ids, vec!["shopee".to_string()])
            }
            other => panic!("expected Publish, got {:?}", other),
        }
    }
}
