//! Show card: the single item rendered inside slider rows.

use iced::widget::{container, mouse_area, text};
use iced::{Element, Length};

use vitrine_model::Show;

use crate::domains::browse::messages::BrowseMessage;
use crate::domains::ui::theme;
use crate::domains::ui::views::slider::{EntryKind, SliderEntry, SliderKey};
use crate::messages::Message;

/// A poster-shaped card with the title along its bottom edge.
///
/// Only the visible copy of an item reacts to hover; padding copies
/// are pure visual filler for wrap transitions and get re-keyed the
/// moment the move commits, so a preview anchored to one would point
/// at a child that no longer exists.
pub fn show_card<'a>(
    show: &'a Show,
    slider: SliderKey,
    entry: SliderEntry,
    band_position: usize,
) -> Element<'a, Message> {
    let poster = container(text(show.name.as_str()).size(14))
        .align_y(iced::alignment::Vertical::Bottom)
        .padding(10)
        .width(Length::Fill)
        .height(Length::Fill)
        .style(theme::poster_container(show.id.value()));

    // The horizontal inset is what separates neighboring cards; the
    // slider positions children on a fixed stride.
    let framed = container(poster)
        .padding([0, 7])
        .width(Length::Fill)
        .height(Length::Fill);

    if entry.kind == EntryKind::Padding {
        return framed.into();
    }

    mouse_area(framed)
        .on_enter(Message::Browse(BrowseMessage::CardHovered {
            slider,
            band_position,
            show: show.id,
        }))
        .on_exit(Message::Browse(BrowseMessage::CardUnhovered))
        .into()
}

/// Placeholder keeping the band aligned when an index has no show
/// behind it (transiently possible while data reloads).
pub fn missing_card<'a>() -> Element<'a, Message> {
    container(iced::widget::Space::new(Length::Fill, Length::Fill))
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}
