//! iced user interface for OmniSell.

pub mod add_product;
pub mod app;
pub mod dashboard;
pub mod explore;
pub mod pricing;
pub mod settings;
pub mod sidebar;
pub mod style;
pub mod theme;
pub mod toast;

pub use app::{Message, OmniApp};
