//! UI-shell messages.

use iced::Size;

use crate::domains::ui::views::slider::SliderMessage;

#[derive(Debug, Clone)]
pub enum UiMessage {
    /// Window resized; feeds the layout measurement of every slider.
    WindowResized(Size),
    Slider(SliderMessage),
}
