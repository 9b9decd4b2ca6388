//! Slider message handling.
//!
//! Movement commands go through the state machine (which enforces the
//! re-entrancy guard), the accepted command starts a tween, and the
//! frames subscription drives the tween until the commit. Offsets are
//! applied as `scroll_to` operations: per-frame while animating, one
//! instantaneous application for the post-commit snap.

use std::time::Instant;

use iced::Task;
use iced::widget::scrollable::{self, AbsoluteOffset};

use crate::domains::ui::views::slider::{SliderKey, SliderMessage};
use crate::infra::measurement::Dimension;
use crate::messages::Message;
use crate::state::State;

pub fn handle_slider_message(state: &mut State, message: SliderMessage) -> Task<Message> {
    match message {
        SliderMessage::MoveRight(key) => begin_move(state, key, Direction::Right),
        SliderMessage::MoveLeft(key) => begin_move(state, key, Direction::Left),
        SliderMessage::AnimationTick(now) => advance_tweens(state, now),
        SliderMessage::Scrolled(key, viewport) => {
            // The viewport report is the live container measurement.
            let dimension = Dimension::from_container_width(viewport.bounds().width);
            let Some(slider) = state.ui.sliders.get_mut(&key) else {
                return Task::none();
            };
            if slider.set_dimension(dimension) {
                state.ui.sliders.tween_mut(key).cancel();
                return snap(state, &key);
            }
            Task::none()
        }
    }
}

enum Direction {
    Left,
    Right,
}

fn begin_move(state: &mut State, key: SliderKey, direction: Direction) -> Task<Message> {
    let Some(slider) = state.ui.sliders.get_mut(&key) else {
        return Task::none();
    };
    let command = match direction {
        Direction::Right => slider.move_right(),
        Direction::Left => slider.move_left(),
    };
    let Some(command) = command else {
        // Dropped by the re-entrancy guard or a degenerate layout.
        log::debug!("slider {key:?}: move command dropped");
        return Task::none();
    };

    let from = slider.motion.offset_percent;
    state
        .ui
        .sliders
        .tween_mut(key)
        .start(from, command.target_offset, command.duration, Instant::now());
    // Frames arrive through the subscription while the tween is live.
    Task::none()
}

fn advance_tweens(state: &mut State, now: Instant) -> Task<Message> {
    let mut tasks = Vec::new();
    for key in state.ui.sliders.keys() {
        if let Some(progress) = state.ui.sliders.advance(&key, now) {
            tasks.push(apply_scroll(state, &key, progress.scroll_x));
            if progress.finished {
                log::debug!("slider {key:?}: transition finished, snapped to baseline");
            }
        }
    }
    Task::batch(tasks)
}

/// Apply the slider's current steady-state scroll position instantly.
pub(crate) fn snap(state: &State, key: &SliderKey) -> Task<Message> {
    match state.ui.sliders.get(key) {
        Some(slider) => apply_scroll(state, key, slider.scroll_x()),
        None => Task::none(),
    }
}

fn apply_scroll(state: &State, key: &SliderKey, x: f32) -> Task<Message> {
    let Some(slider) = state.ui.sliders.get(key) else {
        return Task::none();
    };
    scrollable::scroll_to(
        slider.scrollable_id.clone(),
        AbsoluteOffset { x, y: 0.0 },
    )
}
