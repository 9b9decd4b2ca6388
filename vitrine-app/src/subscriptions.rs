//! Root-level subscription composition.

use iced::Subscription;

use crate::domains::ui::messages::UiMessage;
use crate::domains::ui::views::slider::SliderMessage;
use crate::messages::Message;
use crate::state::State;

/// Window resize events feed the layout measurement; animation frames
/// run only while some slider tween is live, so an idle app schedules
/// no redraws.
pub fn subscription(state: &State) -> Subscription<Message> {
    let mut subscriptions = vec![
        iced::window::resize_events()
            .map(|(_id, size)| Message::Ui(UiMessage::WindowResized(size))),
    ];

    if state.ui.sliders.any_tween_active() {
        subscriptions.push(
            iced::window::frames()
                .map(|now| Message::Ui(UiMessage::Slider(SliderMessage::AnimationTick(now)))),
        );
    }

    Subscription::batch(subscriptions)
}
