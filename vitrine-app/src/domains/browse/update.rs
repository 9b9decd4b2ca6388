//! Browse message handling.

use iced::Task;

use crate::domains::session::messages::SessionMessage;
use crate::domains::session::{self, SessionAction};
use crate::domains::ui::views::preview_modal;
use crate::domains::ui::views::slider::{SliderKey, WrapMode};
use crate::infra::constants::{layout, timing};
use crate::messages::Message;
use crate::state::State;

use super::messages::BrowseMessage;
use super::state::{ActivePreview, LoadState, PendingPreview, PreviewPhase};

pub fn handle_browse_message(state: &mut State, message: BrowseMessage) -> Task<Message> {
    match message {
        BrowseMessage::TabSelected(tab) => {
            if state.browse.tab == tab {
                return Task::none();
            }
            state.browse.tab = tab;
            state.browse.active_preview = None;
            state.browse.pending_preview = None;
            load_current_tab(state)
        }

        BrowseMessage::SectionsLoaded(generation, result) => {
            if generation != state.browse.current_load_generation() {
                log::debug!("stale section response dropped (generation {generation})");
                return Task::none();
            }
            match result {
                Ok(sections) => {
                    // Replace the section sliders wholesale; the old rows
                    // are unmounted along with any in-flight animation.
                    for key in state.ui.sliders.keys() {
                        if matches!(key, SliderKey::Section(_)) {
                            state.ui.sliders.remove(&key);
                        }
                    }
                    let dimension = state.dimension();
                    for (position, section) in sections.iter().enumerate() {
                        state.ui.sliders.ensure(
                            SliderKey::Section(position as u32),
                            section.shows.len(),
                            dimension,
                            WrapMode::Paged,
                        );
                    }
                    state.browse.sections = LoadState::Loaded(sections);
                }
                Err(error) => {
                    log::warn!("section fetch failed: {error}");
                    state.browse.sections = LoadState::Failed(error);
                }
            }
            Task::none()
        }

        BrowseMessage::ListLoaded(generation, result) => {
            if generation != state.browse.current_load_generation() {
                return Task::none();
            }
            match result {
                Ok(shows) => {
                    state.ui.sliders.ensure(
                        SliderKey::MyList,
                        shows.len(),
                        state.dimension(),
                        WrapMode::Continuous,
                    );
                    state.browse.my_list = LoadState::Loaded(shows);
                }
                Err(error) => {
                    log::warn!("list fetch failed: {error}");
                    state.browse.my_list = LoadState::Failed(error);
                }
            }
            Task::none()
        }

        BrowseMessage::CardHovered {
            slider,
            band_position,
            show,
        } => {
            // An open (or hiding) preview blocks new hovers, exactly
            // like re-entrant slider moves are dropped.
            if state.browse.active_preview.is_some() {
                return Task::none();
            }
            let generation = state.browse.next_preview_generation();
            state.browse.pending_preview = Some(PendingPreview {
                show,
                slider,
                band_position,
                generation,
            });
            Task::perform(
                tokio::time::sleep(timing::PREVIEW_SHOW_DELAY),
                move |_| Message::Browse(BrowseMessage::PreviewTimerFired(generation)),
            )
        }

        BrowseMessage::CardUnhovered => {
            // The scheduled timer keeps running; its generation check
            // turns the firing into a no-op.
            state.browse.pending_preview = None;
            Task::none()
        }

        BrowseMessage::PreviewTimerFired(generation) => {
            let Some(pending) = state.browse.pending_preview else {
                return Task::none();
            };
            if pending.generation != generation {
                return Task::none();
            }
            state.browse.pending_preview = None;

            let anchor_x = state
                .ui
                .sliders
                .get(&pending.slider)
                .map(|slider| {
                    preview_modal::anchor_x(slider, pending.band_position, layout::MODAL_WIDTH)
                })
                .unwrap_or(0.0);
            let generation = state.browse.next_preview_generation();
            state.browse.active_preview = Some(ActivePreview {
                show: pending.show,
                anchor_x,
                phase: PreviewPhase::Visible,
                generation,
            });
            Task::none()
        }

        BrowseMessage::PreviewDismissed => {
            match state.browse.active_preview {
                Some(active) if active.phase == PreviewPhase::Visible => {}
                _ => return Task::none(),
            }
            let generation = state.browse.next_preview_generation();
            if let Some(active) = state.browse.active_preview.as_mut() {
                active.phase = PreviewPhase::Hiding;
                active.generation = generation;
            }
            Task::perform(
                tokio::time::sleep(timing::PREVIEW_HIDE_DELAY),
                move |_| Message::Browse(BrowseMessage::PreviewHideFinished(generation)),
            )
        }

        BrowseMessage::PreviewHideFinished(generation) => {
            if let Some(active) = state.browse.active_preview
                && active.generation == generation
                && active.phase == PreviewPhase::Hiding
            {
                state.browse.active_preview = None;
            }
            Task::none()
        }

        BrowseMessage::ToggleListed(show) => {
            let Some(profile) = state.session.selected_profile else {
                return Task::none();
            };
            session::update::handle_session_message(
                state,
                SessionMessage::Action(SessionAction::ToggleListed { profile, show }),
            )
        }

        BrowseMessage::Evaluated(show, evaluation) => {
            let previous = state.browse.evaluations.get(&show).copied();
            if previous == Some(evaluation) {
                state.browse.evaluations.remove(&show);
            } else {
                state.browse.evaluations.insert(show, evaluation);
            }
            Task::none()
        }

        BrowseMessage::PlayRequested(show) => {
            // Playback is outside this storefront; acknowledge and close.
            log::info!("playback requested for show {show}");
            state.browse.active_preview = None;
            Task::none()
        }
    }
}

/// Kick off the fetch for whatever the current tab shows. No-op while
/// no profile is selected.
pub fn load_current_tab(state: &mut State) -> Task<Message> {
    let Some(profile) = state.session.selected().cloned() else {
        return Task::none();
    };
    let generation = state.browse.next_load_generation();

    if state.browse.tab == super::state::HomeTab::MyList {
        state.browse.my_list = LoadState::Loading;
        Task::perform(
            async move {
                vitrine_catalog::fetch_list_shows(&profile)
                    .await
                    .map_err(|error| error.to_string())
            },
            move |result| Message::Browse(BrowseMessage::ListLoaded(generation, result)),
        )
    } else {
        let kind = state.browse.tab.kind();
        state.browse.sections = LoadState::Loading;
        Task::perform(
            async move {
                vitrine_catalog::fetch_sections(&profile, kind)
                    .await
                    .map_err(|error| error.to_string())
            },
            move |result| Message::Browse(BrowseMessage::SectionsLoaded(generation, result)),
        )
    }
}

/// Refetch "my list" in place after a list mutation, keeping whatever
/// is on screen until the new data lands.
pub fn refresh_list_if_shown(state: &mut State) -> Task<Message> {
    if state.browse.tab != super::state::HomeTab::MyList {
        return Task::none();
    }
    let Some(profile) = state.session.selected().cloned() else {
        return Task::none();
    };
    let generation = state.browse.next_load_generation();
    Task::perform(
        async move {
            vitrine_catalog::fetch_list_shows(&profile)
                .await
                .map_err(|error| error.to_string())
        },
        move |result| Message::Browse(BrowseMessage::ListLoaded(generation, result)),
    )
}
