//! Hover preview modal.
//!
//! Floats over the browse page anchored near the hovered card. The
//! anchor is derived from the card's position inside its slider and
//! clamped into the content area, so the modal never hangs past either
//! edge.

use iced::widget::{button, column, container, mouse_area, row, text};
use iced::{Alignment, Element, Length, Padding};

use vitrine_model::{Evaluation, Show};

use crate::domains::browse::messages::BrowseMessage;
use crate::domains::browse::state::ActivePreview;
use crate::domains::ui::theme;
use crate::domains::ui::views::slider::SliderState;
use crate::infra::constants::layout;
use crate::messages::Message;
use crate::state::State;

/// Horizontal anchor for the preview: the hovered card's left edge in
/// container coordinates, clamped so the modal stays inside.
pub fn anchor_x(slider: &SliderState, band_position: usize, modal_width: f32) -> f32 {
    let container_width = slider.dimension.container_width;
    let card_left = band_position as f32 * slider.dimension.item_width - slider.scroll_x();
    card_left.clamp(0.0, (container_width - modal_width).max(0.0))
}

/// The floating modal layer, positioned by the stored anchor.
pub fn overlay<'a>(
    state: &'a State,
    active: ActivePreview,
    show: &'a Show,
) -> Element<'a, Message> {
    let in_list = state
        .session
        .selected()
        .is_some_and(|profile| profile.has_listed(show.id));
    let evaluation = state.browse.evaluations.get(&show.id).copied();

    let header = container(
        text(show.name.as_str()).size(18),
    )
    .width(Length::Fill)
    .height(Length::Fixed(110.0))
    .padding(12)
    .align_y(iced::alignment::Vertical::Bottom)
    .style(theme::poster_container(show.id.value()));

    let actions = row![
        action_button("▶ Play", BrowseMessage::PlayRequested(show.id)),
        action_button(
            if in_list { "✓ My List" } else { "+ My List" },
            BrowseMessage::ToggleListed(show.id),
        ),
        reaction_button("👎", Evaluation::Bad, evaluation, show),
        reaction_button("👍", Evaluation::Like, evaluation, show),
        reaction_button("❤", Evaluation::Love, evaluation, show),
    ]
    .spacing(6)
    .align_y(Alignment::Center);

    let facts = row![
        text(format!("{}% match", show.recommended))
            .size(13)
            .color(theme::StorefrontTheme::MATCH_GREEN),
        text(format!("{}", show.year))
            .size(13)
            .color(theme::StorefrontTheme::TEXT_DIMMED),
        text(format!("{}+", show.age))
            .size(13)
            .color(theme::StorefrontTheme::TEXT_DIMMED),
        text(show.duration.as_str())
            .size(13)
            .color(theme::StorefrontTheme::TEXT_DIMMED),
    ]
    .spacing(10);

    let body = column![
        header,
        column![
            actions,
            facts,
            text(show.description.as_str()).size(13),
            text(show.tags.join(" · "))
                .size(12)
                .color(theme::StorefrontTheme::TEXT_DIMMED),
        ]
        .spacing(10)
        .padding(12),
    ]
    .width(Length::Fixed(layout::MODAL_WIDTH));

    let card = mouse_area(container(body).style(theme::modal_container))
        .on_exit(Message::Browse(BrowseMessage::PreviewDismissed));

    // Float the card at its anchor; the surrounding space stays
    // transparent to input.
    container(card)
        .padding(Padding {
            top: 140.0,
            left: layout::PAGE_PADDING + active.anchor_x,
            ..Padding::ZERO
        })
        .into()
}

fn action_button(label: &str, message: BrowseMessage) -> Element<'_, Message> {
    button(text(label).size(13))
        .padding([6, 10])
        .style(theme::chevron_button)
        .on_press(Message::Browse(message))
        .into()
}

fn reaction_button<'a>(
    glyph: &'a str,
    value: Evaluation,
    current: Option<Evaluation>,
    show: &Show,
) -> Element<'a, Message> {
    let selected = current == Some(value);
    let label = if selected {
        text(glyph).size(13)
    } else {
        text(glyph)
            .size(13)
            .color(theme::StorefrontTheme::TEXT_DIMMED)
    };
    button(label)
        .padding([6, 8])
        .style(theme::chevron_button)
        .on_press(Message::Browse(BrowseMessage::Evaluated(show.id, value)))
        .into()
}
