//! Application state for OmniSell.
//!
//! `AppState` owns the authoritative collections (platforms, products),
//! the current page, and the onboarding-dismiss flag. All mutations go
//! through its named operations; the iced event loop serializes them, so
//! every operation is atomic with respect to the UI.

use crate::catalog::{self, Platform, Product, ProductDraft};
use crate::config::Config;

/// The pages of the app. Exactly one is current at any time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Page {
    #[default]
    Dashboard,
    AddProduct,
    Explore,
    Settings,
    Pricing,
}

impl Page {
    /// Sidebar order.
    pub const ALL: [Page; 5] = [
        Page::Dashboard,
        Page::AddProduct,
        Page::Explore,
        Page::Settings,
        Page::Pricing,
    ];
}

impl std::fmt::Display for Page {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Page::Dashboard => write!(f, "Dashboard"),
            Page::AddProduct => write!(f, "Add Product"),
            Page::Explore => write!(f, "Explore"),
            Page::Settings => write!(f, "Settings"),
            Page::Pricing => write!(f, "Pricing"),
        }
    }
}

/// Outcome of a successful link toggle, for the notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkChange {
    pub name: String,
    pub is_linked: bool,
}

impl LinkChange {
    pub fn toast_message(&self) -> String {
        if self.is_linked {
            format!("Connected to {} successfully!", self.name)
        } else {
            format!("Disconnected from {} successfully!", self.name)
        }
    }
}

/// Shared application state, seeded from the mock catalog.
pub struct AppState {
    pub page: Page,
    pub platforms: Vec<Platform>,
    pub products: Vec<Product>,
    checklist_dismissed: bool,
    next_product_id: u64,
}

impl AppState {
    pub fn new(config: &Config) -> Self {
        let products = catalog::seed_products();
        let next_product_id = products.len() as u64 + 1;

        Self {
            page: Page::default(),
            platforms: catalog::seed_platforms(),
            products,
            checklist_dismissed: config.onboarding.checklist_dismissed,
            next_product_id,
        }
    }

    /// Switch the current page. No validation, no other side effects.
    pub fn navigate(&mut self, page: Page) {
        self.page = page;
    }

    /// Flip the link state of a platform. Unknown ids are silently
    /// ignored; ids are owned by this state, so a miss means a stale
    /// caller, not a user error.
    pub fn toggle_link(&mut self, platform_id: &str) -> Option<LinkChange> {
        let platform = self.platforms.iter_mut().find(|p| p.id == platform_id)?;
        platform.is_linked = !platform.is_linked;

        Some(LinkChange {
            name: platform.name.clone(),
            is_linked: platform.is_linked,
        })
    }

    /// Store a validated draft as a new product: assign a fresh id,
    /// derive the image URL, prepend (newest first), and land on the
    /// dashboard.
    pub fn add_product(&mut self, draft: ProductDraft) -> &Product {
        let id = self.allocate_product_id();
        let image_url = catalog::image_url(&draft.name);

        self.products.insert(
            0,
            Product {
                id,
                name: draft.name,
                description: draft.description,
                price: draft.price,
                quantity: draft.quantity,
                category: draft.category,
                platform_ids: draft.platform_ids,
                image_url,
            },
        );

        self.page = Page::Dashboard;
        &self.products[0]
    }

    /// Mark the setup checklist dismissed. Irreversible; calling again is
    /// a no-op.
    pub fn dismiss_checklist(&mut self) {
        self.checklist_dismissed = true;
    }

    pub fn checklist_dismissed(&self) -> bool {
        self.checklist_dismissed
    }

    /// The checklist shows until it is dismissed or both setup steps are
    /// done (a platform linked and a product listed).
    pub fn checklist_visible(&self) -> bool {
        if self.checklist_dismissed {
            return false;
        }
        !(self.has_linked_platform() && !self.products.is_empty())
    }

    pub fn has_linked_platform(&self) -> bool {
        self.platforms.iter().any(|p| p.is_linked)
    }

    pub fn linked_platform_count(&self) -> usize {
        self.platforms.iter().filter(|p| p.is_linked).count()
    }

    pub fn platform_by_id(&self, id: &str) -> Option<&Platform> {
        self.platforms.iter().find(|p| p.id == id)
    }

    pub fn product_by_id(&self, id: &str) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    /// Monotonic id allocation; skips anything already taken so a fresh
    /// id never collides with an existing product.
    fn allocate_product_id(&mut self) -> String {
        loop {
            let id = format!("prod-{}", self.next_product_id);
            self.next_product_id += 1;
            if !self.products.iter().any(|p| p.id == id) {
                return id;
            }
        }
    }
}
