//! "My list" tab body: a continuous-wrap slider over the saved shows.

use iced::Element;
use iced::widget::{column, text};

use crate::domains::browse::state::LoadState;
use crate::domains::ui::theme;
use crate::domains::ui::views::slider::{self, SliderKey};
use crate::domains::ui::views::{show_card, skeleton};
use crate::messages::Message;
use crate::state::State;

pub fn view(state: &State) -> Element<'_, Message> {
    match &state.browse.my_list {
        LoadState::NotLoaded | LoadState::Loading => skeleton::section_skeletons(1, state.dimension()),
        LoadState::Failed(error) => text(error.as_str())
            .size(14)
            .color(theme::StorefrontTheme::ACCENT)
            .into(),
        LoadState::Loaded(shows) if shows.is_empty() => column![
            text("My List").size(24),
            text("You haven't added anything to your list yet.")
                .size(14)
                .color(theme::StorefrontTheme::TEXT_DIMMED),
        ]
        .spacing(14)
        .into(),
        LoadState::Loaded(shows) => {
            let key = SliderKey::MyList;
            match state.ui.sliders.get(&key) {
                Some(slider_state) => slider::slider(key, "My List", slider_state, |entry, position| {
                    match shows.get(entry.index) {
                        Some(show) => show_card::show_card(show, key, entry, position),
                        None => show_card::missing_card(),
                    }
                }),
                None => skeleton::section_skeletons(1, state.dimension()),
            }
        }
    }
}
