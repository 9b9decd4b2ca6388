//! Profile selection ("who's watching?") and lightweight management.

use iced::widget::{Space, button, center, column, container, row, text};
use iced::{Alignment, Element, Length};

use vitrine_model::Profile;

use crate::domains::session::SessionAction;
use crate::domains::session::messages::SessionMessage;
use crate::domains::ui::theme;
use crate::messages::Message;
use crate::state::State;

const AVATAR_SIZE: f32 = 120.0;

pub fn view(state: &State) -> Element<'_, Message> {
    let managing = state.session.managing_profiles;

    let mut cards = row![].spacing(24).align_y(Alignment::Start);
    for profile in &state.session.account.profiles {
        cards = cards.push(profile_card(profile, managing));
    }
    if managing {
        cards = cards.push(add_profile_card(state.session.account.profiles.len()));
    }

    let manage_label = if managing { "Done" } else { "Manage Profiles" };
    let manage = button(text(manage_label).size(14))
        .padding([8, 20])
        .style(theme::chevron_button)
        .on_press(session_action(SessionAction::ToggleManaging));

    let content = column![
        text("Who's watching?").size(34),
        Space::with_height(28),
        cards,
        Space::with_height(36),
        manage,
    ]
    .align_x(Alignment::Center);

    center(content).into()
}

fn profile_card(profile: &Profile, managing: bool) -> Element<'_, Message> {
    let seed = profile.id.as_uuid().as_u128() as u64;
    let initial = profile
        .name
        .chars()
        .next()
        .map(|c| c.to_uppercase().to_string())
        .unwrap_or_default();

    let avatar = container(text(initial).size(44))
        .width(Length::Fixed(AVATAR_SIZE))
        .height(Length::Fixed(AVATAR_SIZE))
        .align_x(iced::alignment::Horizontal::Center)
        .align_y(iced::alignment::Vertical::Center)
        .style(theme::avatar_container(seed));

    let mut card = column![
        button(avatar)
            .padding(0)
            .style(theme::card_button)
            .on_press(session_action(SessionAction::SelectProfile(Some(
                profile.id
            )))),
        text(profile.name.as_str())
            .size(15)
            .color(theme::StorefrontTheme::TEXT_DIMMED),
    ]
    .spacing(10)
    .align_x(Alignment::Center);

    if managing {
        card = card.push(
            button(text("Remove").size(12))
                .padding([4, 10])
                .style(theme::chevron_button)
                .on_press(session_action(SessionAction::RemoveProfile(profile.id))),
        );
    }
    card.into()
}

fn add_profile_card(existing: usize) -> Element<'static, Message> {
    let fresh = Profile::new(format!("Viewer {}", existing + 1), "avatars/03.png");

    let avatar = container(text("+").size(44))
        .width(Length::Fixed(AVATAR_SIZE))
        .height(Length::Fixed(AVATAR_SIZE))
        .align_x(iced::alignment::Horizontal::Center)
        .align_y(iced::alignment::Vertical::Center)
        .style(theme::skeleton_block);

    column![
        button(avatar)
            .padding(0)
            .style(theme::card_button)
            .on_press(session_action(SessionAction::AddProfile(fresh))),
        text("Add profile")
            .size(15)
            .color(theme::StorefrontTheme::TEXT_DIMMED),
    ]
    .spacing(10)
    .align_x(Alignment::Center)
    .into()
}

fn session_action(action: SessionAction) -> Message {
    Message::Session(SessionMessage::Action(action))
}
