//! Session message handling.

use std::sync::Arc;

use iced::Task;

use crate::domains::browse;
use crate::infra::persist;
use crate::messages::Message;
use crate::state::State;

use super::actions::{self, PersistEffect, SessionAction};
use super::auth;
use super::messages::SessionMessage;

pub fn handle_session_message(state: &mut State, message: SessionMessage) -> Task<Message> {
    match message {
        SessionMessage::LoginRequested => {
            if state.session.authenticating {
                return Task::none();
            }
            state.session.authenticating = true;
            state.session.login_error = None;

            let config = Arc::clone(&state.config);
            Task::perform(auth::login(config), |outcome| {
                Message::Session(SessionMessage::LoginCompleted(
                    outcome.map_err(|error| error.to_string()),
                ))
            })
        }
        SessionMessage::LoginCompleted(Ok(outcome)) => {
            apply_action(
                state,
                SessionAction::LoggedIn {
                    token: outcome.token,
                    email: outcome.email,
                },
            );
            Task::none()
        }
        SessionMessage::LoginCompleted(Err(error)) => {
            log::warn!("login failed: {error}");
            state.session.authenticating = false;
            state.session.login_error = Some(error);
            Task::none()
        }
        SessionMessage::Action(action) => {
            let selects_profile =
                matches!(action, SessionAction::SelectProfile(Some(_)));
            let leaves_session = matches!(action, SessionAction::Logout);
            let touches_list = matches!(action, SessionAction::ToggleListed { .. });

            apply_action(state, action);

            if leaves_session {
                state.reset_browse();
                return Task::none();
            }
            if selects_profile && state.session.selected_profile.is_some() {
                state.reset_browse();
                return browse::update::load_current_tab(state);
            }
            if touches_list {
                return browse::update::refresh_list_if_shown(state);
            }
            Task::none()
        }
    }
}

/// Run the reducer and honor the storage effect it reports. Storage
/// failures are logged and the in-memory state stays authoritative.
fn apply_action(state: &mut State, action: SessionAction) {
    match actions::apply(&mut state.session, action) {
        PersistEffect::Save => {
            if let Err(error) = persist::save_account(&state.session.account) {
                log::error!("failed to persist account: {error}");
            }
        }
        PersistEffect::Clear => {
            if let Err(error) = persist::clear_account() {
                log::error!("failed to clear persisted account: {error}");
            }
        }
        PersistEffect::None => {}
    }
}
