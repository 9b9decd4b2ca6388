//! Top-level message enum composing the domain messages.

use crate::domains::browse::messages::BrowseMessage;
use crate::domains::session::messages::SessionMessage;
use crate::domains::ui::messages::UiMessage;

#[derive(Debug, Clone)]
pub enum Message {
    Session(SessionMessage),
    Browse(BrowseMessage),
    Ui(UiMessage),
}
