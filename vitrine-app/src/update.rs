//! Root update: dispatches to the domain handlers.

use iced::Task;

use crate::domains::{browse, session, ui};
use crate::messages::Message;
use crate::state::State;

pub fn update(state: &mut State, message: Message) -> Task<Message> {
    match message {
        Message::Session(message) => session::update::handle_session_message(state, message),
        Message::Browse(message) => browse::update::handle_browse_message(state, message),
        Message::Ui(message) => ui::update_handlers::handle_ui_message(state, message),
    }
}
