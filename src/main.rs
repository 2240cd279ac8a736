//! OmniSell - desktop entry point.

use iced::{window, Size};
use omnisell::ui::OmniApp;

fn main() -> iced::Result {
    // Pick up GEMINI_API_KEY from a local .env, if present.
    if dotenvy::dotenv().is_ok() {
        println!("[OmniSell] Loaded environment from .env");
    }

    let window_settings = window::Settings {
        size: Size::new(1180.0, 760.0),
        min_size: Some(Size::new(900.0, 600.0)),
        position: window::Position::Centered,
        ..Default::default()
    };

    iced::application("OmniSell", OmniApp::update, OmniApp::view)
        .window(window_settings)
        .run_with(OmniApp::new)
}
