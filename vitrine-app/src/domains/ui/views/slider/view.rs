//! View composition for a slider row.

use iced::widget::{Space, button, column, container, row, scrollable, text};
use iced::{Alignment, Element, Length};

use crate::domains::ui::messages::UiMessage;
use crate::domains::ui::theme;
use crate::infra::constants::{card, slider as slider_consts};
use crate::messages::Message;

use super::bands::SliderEntry;
use super::messages::SliderMessage;
use super::registry::SliderKey;
use super::state::SliderState;

/// Build a slider row: section header with navigation chevrons, plus
/// the windowed band row inside a hidden-scrollbar horizontal
/// scrollable.
///
/// `create_item` receives each rendered entry together with its
/// position in the band row (used to anchor the hover preview). The
/// same logical item can legitimately appear twice — once as padding,
/// once visible — which is what makes wrap transitions seamless.
pub fn slider<'a, F>(
    key: SliderKey,
    title: &'a str,
    state: &SliderState,
    create_item: F,
) -> Element<'a, Message>
where
    F: Fn(SliderEntry, usize) -> Element<'a, Message>,
{
    let mut controls = row![].align_y(Alignment::Center);
    if state.can_move_left() {
        controls = controls.push(chevron("‹", SliderMessage::MoveLeft(key)));
        controls = controls.push(Space::with_width(5));
    }
    if state.can_move_right() {
        controls = controls.push(chevron("›", SliderMessage::MoveRight(key)));
    }

    let header = row![
        text(title)
            .size(20)
            .color(theme::StorefrontTheme::TEXT_PRIMARY),
        iced::widget::horizontal_space(),
        controls,
    ]
    .align_y(Alignment::Center)
    .width(Length::Fill);

    let mut item_row = row![];
    for (position, entry) in state.bands.entries().enumerate() {
        item_row = item_row.push(
            container(create_item(entry, position))
                .width(Length::Fixed(state.dimension.item_width))
                .height(Length::Fixed(card::HEIGHT)),
        );
    }

    let band_row = scrollable(item_row)
        .id(state.scrollable_id.clone())
        .direction(scrollable::Direction::Horizontal(
            scrollable::Scrollbar::new().width(0).scroller_width(0),
        ))
        .on_scroll(move |viewport| {
            Message::Ui(UiMessage::Slider(SliderMessage::Scrolled(key, viewport)))
        })
        .width(Length::Fill)
        .height(Length::Fixed(slider_consts::ROW_HEIGHT));

    column![
        header,
        Space::with_height(slider_consts::HEADER_SPACING),
        band_row
    ]
    .width(Length::Fill)
    .into()
}

fn chevron<'a>(glyph: &'a str, message: SliderMessage) -> Element<'a, Message> {
    button(
        text(glyph)
            .size(22)
            .color(theme::StorefrontTheme::TEXT_PRIMARY),
    )
    .on_press(Message::Ui(UiMessage::Slider(message)))
    .padding([2, 10])
    .style(theme::chevron_button)
    .into()
}
