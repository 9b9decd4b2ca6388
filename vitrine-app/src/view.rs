//! Root view: dispatches on the derived route.

use iced::Element;

use crate::domains::ui::views::{home, login, profiles};
use crate::messages::Message;
use crate::state::{Route, State};

pub fn view(state: &State) -> Element<'_, Message> {
    match state.route() {
        Route::Login => login::view(state),
        Route::Profiles => profiles::view(state),
        Route::Browse => home::view(state),
    }
}
