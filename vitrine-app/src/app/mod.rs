//! Application builder.

use std::sync::Arc;

use iced::{Size, Theme};

use crate::domains::ui::theme::StorefrontTheme;
use crate::state::State;
use crate::{subscriptions, update, view};

pub mod bootstrap;

pub use bootstrap::AppConfig;

/// Initial window size; the first resize event replaces it.
pub const INITIAL_WINDOW_SIZE: Size = Size::new(1280.0, 720.0);

/// Build and run the Vitrine application with the provided
/// configuration.
pub fn run(config: AppConfig) -> iced::Result {
    let config = Arc::new(config);

    iced::application("Vitrine", update::update, view::view)
        .subscription(subscriptions::subscription)
        .theme(app_theme)
        .antialiasing(true)
        .window(iced::window::Settings {
            size: INITIAL_WINDOW_SIZE,
            resizable: true,
            decorations: true,
            ..Default::default()
        })
        .run_with(move || bootstrap::boot(&config))
}

fn app_theme(_state: &State) -> Theme {
    StorefrontTheme::theme()
}
