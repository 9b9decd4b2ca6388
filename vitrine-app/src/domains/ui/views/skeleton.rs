//! Loading skeletons shown while catalog fetches are pending.

use iced::widget::{Space, column, container, row};
use iced::{Element, Length};

use crate::domains::ui::theme;
use crate::infra::constants::{card, slider};
use crate::infra::measurement::Dimension;
use crate::messages::Message;

/// Rows of gray blocks mimicking section sliders.
pub fn section_skeletons(rows: usize, dimension: Dimension) -> Element<'static, Message> {
    let per_row = dimension.items_per_view().max(1);

    let mut body = column![].spacing(24);
    for _ in 0..rows {
        let title = container(Space::new(Length::Fixed(220.0), Length::Fixed(18.0)))
            .style(theme::skeleton_block);

        let mut cards = row![].spacing(14);
        for _ in 0..per_row {
            cards = cards.push(
                container(Space::new(
                    Length::Fixed((dimension.item_width - 14.0).max(0.0)),
                    Length::Fixed(card::HEIGHT),
                ))
                .style(theme::skeleton_block),
            );
        }

        body = body.push(
            column![title, Space::with_height(slider::HEADER_SPACING), cards].spacing(4),
        );
    }
    body.into()
}
