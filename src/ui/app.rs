//! Main OmniSell application using iced.

use crate::config::Config;
use crate::notify::{self, Notifier, ToastKind};
use crate::store::{AppState, Page};
use crate::suggest::{GeminiClient, SuggestionProvider};
use crate::ui::add_product::{self, AddProductPage};
use crate::ui::explore::{self, ExplorePage};
use crate::ui::theme::OmniTheme;
use crate::ui::{dashboard, pricing, settings, sidebar, style, toast};

use std::sync::Arc;

use iced::widget::{column, container, row, scrollable};
use iced::{Element, Length, Task};

/// The main OmniSell application state.
pub struct OmniApp {
    // Shared state and persistence
    state: AppState,
    config: Config,

    // Toast notifications
    notifier: Notifier,

    // Suggestion boundary
    suggester: Arc<dyn SuggestionProvider>,

    // Pages with local state
    add_product: AddProductPage,
    explore: ExplorePage,

    theme: OmniTheme,
}

/// Messages that the application can handle.
#[derive(Debug, Clone)]
pub enum Message {
    // Navigation
    Navigate(Page),

    // Shared state operations
    ToggleLink(String),
    DismissChecklist,

    // Toast lifecycle
    ToastExpired(u64),
    ToastDismissed,

    // Page events
    AddProduct(add_product::Event),
    Explore(explore::Event),
}

impl OmniApp {
    /// Create a new OmniSell application.
    pub fn new() -> (Self, Task<Message>) {
        let config = Config::load();
        let state = AppState::new(&config);
        let suggester: Arc<dyn SuggestionProvider> = Arc::new(GeminiClient::from_env());

        let app = Self {
            state,
            config,
            notifier: Notifier::new(),
            suggester,
            add_product: AddProductPage::new(),
            explore: ExplorePage::new(),
            theme: OmniTheme::default(),
        };

        (app, Task::none())
    }

    /// Update the application state based on a message.
    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Navigate(page) => {
                // Pages get a fresh mount each time they are entered.
                match page {
                    Page::AddProduct => self.add_product = AddProductPage::new(),
                    Page::Explore => self.explore = ExplorePage::new(),
                    _ => {}
                }
                self.state.navigate(page);
                Task::none()
            }

            Message::ToggleLink(platform_id) => match self.state.toggle_link(&platform_id) {
                Some(change) => self.show_toast(change.toast_message(), ToastKind::Success),
                None => Task::none(),
            },

            Message::DismissChecklist => {
                self.state.dismiss_checklist();
                self.config.onboarding.checklist_dismissed = true;
                if let Err(e) = self.config.save() {
                    eprintln!("[OmniSell] Failed to save config: {}", e);
                }
                Task::none()
            }

            Message::ToastExpired(generation) => {
                self.notifier.expire(generation);
                Task::none()
            }

            Message::ToastDismissed => {
                self.notifier.dismiss();
                Task::none()
            }

            Message::AddProduct(event) => {
                let action = self.add_product.update(event, &self.state.platforms);
                self.handle_add_product_action(action)
            }

            Message::Explore(event) => match self.explore.update(event) {
                explore::Action::None => Task::none(),
                explore::Action::Notify(message, kind) => self.show_toast(message, kind),
            },
        }
    }

    /// Create the view for the application.
    pub fn view(&self) -> Element<'_, Message> {
        let theme = &self.theme;

        let page: Element<'_, Message> = match self.state.page {
            Page::Dashboard => dashboard::view(&self.state, theme),
            Page::AddProduct => self
                .add_product
                .view(&self.state.platforms, theme)
                .map(Message::AddProduct),
            Page::Explore => self.explore.view(&self.state, theme).map(Message::Explore),
            Page::Settings => settings::view(&self.state, theme),
            Page::Pricing => pricing::view(theme),
        };

        let body = scrollable(container(page).padding(28).width(Length::Fill))
            .height(Length::Fill)
            .style(move |_, _| style::page_scrollable(theme));

        let mut main = column![].width(Length::Fill);
        if let Some(banner) = toast::view(&self.notifier, theme) {
            main = main.push(container(banner).padding([12, 28]));
        }
        main = main.push(body);

        let layout = row![sidebar::view(self.state.page, theme), main];

        container(layout)
            .width(Length::Fill)
            .height(Length::Fill)
            .style(move |_| style::app_container(theme))
            .into()
    }

    // --- Private methods ---

    fn handle_add_product_action(&mut self, action: add_product::Action) -> Task<Message> {
        match action {
            add_product::Action::None => Task::none(),

            add_product::Action::Generate(request) => {
                let provider = Arc::clone(&self.suggester);
                Task::perform(
                    async move { provider.suggest(request).await.map_err(|e| e.to_string()) },
                    |result| Message::AddProduct(add_product::Event::Generated(result)),
                )
            }

            add_product::Action::Publish(draft) => {
                self.state.add_product(draft);
                self.add_product = AddProductPage::new();
                self.show_toast("Product added successfully!".to_string(), ToastKind::Success)
            }

            add_product::Action::Notify(message, kind) => self.show_toast(message, kind),
        }
    }

    /// Show a toast and schedule its auto-hide. The generation token keeps
    /// a stale timer from hiding a newer toast.
    fn show_toast(&mut self, message: String, kind: ToastKind) -> Task<Message> {
        let generation = self.notifier.show(message, kind);
        Task::perform(
            async { tokio::time::sleep(notify::AUTO_HIDE).await },
            move |_| Message::ToastExpired(generation),
        )
    }
}

impl Default for OmniApp {
    fn default() -> Self {
        Self::new().0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// An app wired to defaults, without touching the user's config file.
    fn app() -> OmniApp {
        let config = Config::default();
        OmniApp {
            state: AppState::new(&config),
            config,
            notifier: Notifier::new(),
            suggester: Arc::new(GeminiClient::new(None)),
            add_product: AddProductPage::new(),
            explore: ExplorePage::new(),
            theme: OmniTheme::default(),
        }
    }

    #[test]
    fn test_starts_on_dashboard() {
        let app = app();
        assert_eq!(app.state.page, Page::Dashboard);
    }

    #[test]
    fn test_toggle_link_raises_success_toast() {
        let mut app = app();

        let _ = app.update(Message::ToggleLink("shopee".to_string()));

        assert!(app.notifier.is_visible());
        assert_eq!(app.notifier.message(), "Connected to Shopee successfully!");
        assert_eq!(app.notifier.kind(), ToastKind::Success);
    }

    #[test]
    fn test_toggle_unknown_platform_is_silent() {
        let mut app = app();

        let _ = app.update(Message::ToggleLink("etsy".to_string()));

        assert!(!app.notifier.is_visible());
    }

    #[test]
    fn test_publishing_adds_product_and_lands_on_dashboard() {
        let mut app = app();
        let _ = app.update(Message::Navigate(Page::AddProduct));
        let before = app.state.products.len();

        for event in [
            add_product::Event::NameChanged("Mouse".to_string()),
            add_product::Event::PriceChanged("49.99".to_string()),
            add_product::Event::CategoryChanged("Electronics".to_string()),
            add_product::Event::QuantityChanged("100".to_string()),
            add_product::Event::SubmitPressed,
        ] {
            let _ = app.update(Message::AddProduct(event));
        }

        assert_eq!(app.state.products.len(), before + 1);
        assert_eq!(app.state.products[0].name, "Mouse");
        assert_eq!(app.state.products[0].price, 49.99);
        assert_eq!(app.state.products[0].quantity, 100);
        assert_eq!(app.state.page, Page::Dashboard);
        assert_eq!(app.notifier.message(), "Product added successfully!");
    }

    #[test]
    fn test_invalid_submit_adds_nothing() {
        let mut app = app();
        let before = app.state.products.len();

        let _ = app.update(Message::AddProduct(add_product::Event::SubmitPressed));

        assert_eq!(app.state.products.len(), before);
        assert!(!app.notifier.is_visible());
    }

    #[test]
    fn test_navigate_switches_pages() {
        let mut app = app();

        let _ = app.update(Message::Navigate(Page::Pricing));
        assert_eq!(app.state.page, Page::Pricing);

        let _ = app.update(Message::Navigate(Page::Explore));
        assert_eq!(app.state.page, Page::Explore);
    }

    #[test]
    fn test_stale_toast_timer_does_not_hide_newer_toast() {
        let mut app = app();

        let _ = app.update(Message::ToggleLink("shopee".to_string()));
        let _ = app.update(Message::ToggleLink("lazada".to_string()));

        // The first toast's timer fires after the second was shown.
        let _ = app.update(Message::ToastExpired(1));
        assert!(app.notifier.is_visible());
        assert_eq!(app.notifier.message(), "Connected to Lazada successfully!");

        let _ = app.update(Message::ToastExpired(2));
        assert!(!app.notifier.is_visible());
    }
}
