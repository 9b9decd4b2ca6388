//! Signed-in shell: header with tabs, browse rows, and the preview
//! modal overlay.

use iced::widget::{column, container, row, scrollable, stack, text};
use iced::{Alignment, Element, Length};

use crate::domains::browse::messages::BrowseMessage;
use crate::domains::browse::state::{HomeTab, LoadState};
use crate::domains::session::SessionAction;
use crate::domains::session::messages::SessionMessage;
use crate::domains::ui::theme;
use crate::domains::ui::views::slider::{self, SliderKey};
use crate::domains::ui::views::{my_list, preview_modal, show_card, skeleton};
use crate::infra::constants::layout;
use crate::messages::Message;
use crate::state::State;

pub fn view(state: &State) -> Element<'_, Message> {
    let body = match state.browse.tab {
        HomeTab::MyList => my_list::view(state),
        _ => sections_body(state),
    };

    let page = column![header(state), body]
        .spacing(26)
        .width(Length::Fill);

    let base: Element<'_, Message> = scrollable(
        container(page).padding([24.0, layout::PAGE_PADDING]),
    )
    .width(Length::Fill)
    .height(Length::Fill)
    .into();

    // The preview floats above the page; everything else keeps
    // receiving input.
    if let Some(active) = state.browse.active_preview
        && let Some(show) = state.browse.find_show(active.show)
    {
        stack![base, preview_modal::overlay(state, active, show)].into()
    } else {
        base
    }
}

fn header(state: &State) -> Element<'_, Message> {
    let mut tabs = row![].spacing(18).align_y(Alignment::Center);
    for tab in HomeTab::ALL {
        tabs = tabs.push(
            iced::widget::button(text(tab.label()).size(14))
                .padding([4, 2])
                .style(theme::tab_button(state.browse.tab == tab))
                .on_press(Message::Browse(BrowseMessage::TabSelected(tab))),
        );
    }

    let profile_name = state
        .session
        .selected()
        .map(|profile| profile.name.as_str())
        .unwrap_or("–");

    row![
        text("VITRINE")
            .size(24)
            .color(theme::StorefrontTheme::ACCENT),
        tabs,
        iced::widget::horizontal_space(),
        text(profile_name)
            .size(14)
            .color(theme::StorefrontTheme::TEXT_DIMMED),
        iced::widget::button(text("Switch profile").size(13))
            .padding([4, 10])
            .style(theme::chevron_button)
            .on_press(Message::Session(SessionMessage::Action(
                SessionAction::SelectProfile(None)
            ))),
        iced::widget::button(text("Sign out").size(13))
            .padding([4, 10])
            .style(theme::chevron_button)
            .on_press(Message::Session(SessionMessage::Action(
                SessionAction::Logout
            ))),
    ]
    .spacing(22)
    .align_y(Alignment::Center)
    .width(Length::Fill)
    .into()
}

fn sections_body(state: &State) -> Element<'_, Message> {
    match &state.browse.sections {
        LoadState::NotLoaded | LoadState::Loading => skeleton::section_skeletons(3, state.dimension()),
        LoadState::Failed(error) => text(error.as_str())
            .size(14)
            .color(theme::StorefrontTheme::ACCENT)
            .into(),
        LoadState::Loaded(sections) => {
            let mut rows = column![].spacing(30).width(Length::Fill);
            for (position, section) in sections.iter().enumerate() {
                if section.is_empty() {
                    // An empty row renders nothing rather than erroring.
                    continue;
                }
                let key = SliderKey::Section(position as u32);
                let Some(slider_state) = state.ui.sliders.get(&key) else {
                    continue;
                };
                rows = rows.push(slider::slider(
                    key,
                    &section.name,
                    slider_state,
                    |entry, band_position| match section.shows.get(entry.index) {
                        Some(show) => show_card::show_card(show, key, entry, band_position),
                        None => show_card::missing_card(),
                    },
                ));
            }
            rows.into()
        }
    }
}
