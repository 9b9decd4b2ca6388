//! UI-shell update handlers.

pub mod slider_updates;

use iced::Task;

use crate::domains::ui::messages::UiMessage;
use crate::messages::Message;
use crate::state::State;

pub fn handle_ui_message(state: &mut State, message: UiMessage) -> Task<Message> {
    match message {
        UiMessage::WindowResized(size) => {
            state.ui.window_width = size.width;
            let dimension = state.dimension();

            let mut tasks = Vec::new();
            for key in state.ui.sliders.keys() {
                let changed = state
                    .ui
                    .sliders
                    .get_mut(&key)
                    .is_some_and(|slider| slider.set_dimension(dimension));
                if changed {
                    // The layout refresh cancelled any in-flight move;
                    // re-apply the recomputed steady-state position.
                    state.ui.sliders.tween_mut(key).cancel();
                    tasks.push(slider_updates::snap(state, &key));
                }
            }
            Task::batch(tasks)
        }
        UiMessage::Slider(message) => slider_updates::handle_slider_message(state, message),
    }
}
