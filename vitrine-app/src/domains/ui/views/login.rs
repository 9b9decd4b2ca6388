//! Sign-in view.

use iced::widget::{Space, button, center, column, text};
use iced::{Alignment, Element};

use crate::domains::session::messages::SessionMessage;
use crate::domains::ui::theme;
use crate::messages::Message;
use crate::state::State;

pub fn view(state: &State) -> Element<'_, Message> {
    let mut sign_in = button(text("Sign in").size(16))
        .padding([10, 48])
        .style(theme::primary_button);
    if !state.session.authenticating {
        sign_in = sign_in.on_press(Message::Session(SessionMessage::LoginRequested));
    }

    let mut content = column![
        text("VITRINE")
            .size(56)
            .color(theme::StorefrontTheme::ACCENT),
        text("Films and series, one slider away.")
            .size(16)
            .color(theme::StorefrontTheme::TEXT_DIMMED),
        Space::with_height(24),
        sign_in,
    ]
    .spacing(12)
    .align_x(Alignment::Center);

    if state.session.authenticating {
        content = content.push(
            text("Signing you in…")
                .size(14)
                .color(theme::StorefrontTheme::TEXT_DIMMED),
        );
    }
    if let Some(error) = &state.session.login_error {
        content = content.push(
            text(error.as_str())
                .size(14)
                .color(theme::StorefrontTheme::ACCENT),
        );
    }

    center(content).into()
}
