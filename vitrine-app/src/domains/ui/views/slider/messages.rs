//! Slider interaction messages.

use std::time::Instant;

use iced::widget::scrollable;

use super::registry::SliderKey;

#[derive(Debug, Clone)]
pub enum SliderMessage {
    // Navigation
    MoveLeft(SliderKey),
    MoveRight(SliderKey),

    // Animation frames while any tween is live
    AnimationTick(Instant),

    // Viewport reporting; doubles as the live container measurement
    Scrolled(SliderKey, scrollable::Viewport),
}
