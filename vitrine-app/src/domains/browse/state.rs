//! Browse state: loaded content, the active tab, and preview tracking.

use std::collections::HashMap;

use vitrine_model::{Evaluation, Section, Show, ShowId, ShowKind};

use crate::domains::ui::views::slider::SliderKey;

/// Tabs of the signed-in experience.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HomeTab {
    Home,
    Films,
    Series,
    MyList,
}

impl Default for HomeTab {
    fn default() -> Self {
        HomeTab::Home
    }
}

impl HomeTab {
    pub const ALL: [HomeTab; 4] = [
        HomeTab::Home,
        HomeTab::Films,
        HomeTab::Series,
        HomeTab::MyList,
    ];

    /// Kind filter this tab applies; `None` means the whole catalog.
    pub fn kind(self) -> Option<ShowKind> {
        match self {
            HomeTab::Films => Some(ShowKind::Film),
            HomeTab::Series => Some(ShowKind::Series),
            HomeTab::Home | HomeTab::MyList => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            HomeTab::Home => "Home",
            HomeTab::Films => "Films",
            HomeTab::Series => "Series",
            HomeTab::MyList => "My List",
        }
    }
}

/// Remote data lifecycle for a fetched value.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum LoadState<T> {
    #[default]
    NotLoaded,
    Loading,
    Loaded(T),
    Failed(String),
}

impl<T> LoadState<T> {
    pub fn loaded(&self) -> Option<&T> {
        match self {
            LoadState::Loaded(value) => Some(value),
            _ => None,
        }
    }
}

/// A hover that has not yet reached the preview dwell time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PendingPreview {
    pub show: ShowId,
    pub slider: SliderKey,
    pub band_position: usize,
    pub generation: u64,
}

/// Hide animation state of the open preview.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PreviewPhase {
    Visible,
    Hiding,
}

/// The open preview modal.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ActivePreview {
    pub show: ShowId,
    /// Horizontal anchor (clamped to the content area) derived from
    /// the hovered card's position in its slider.
    pub anchor_x: f32,
    pub phase: PreviewPhase,
    pub generation: u64,
}

#[derive(Debug, Default)]
pub struct BrowseState {
    pub tab: HomeTab,
    pub sections: LoadState<Vec<Section>>,
    pub my_list: LoadState<Vec<Show>>,
    pub pending_preview: Option<PendingPreview>,
    pub active_preview: Option<ActivePreview>,
    /// Session-local reactions given from the preview modal.
    pub evaluations: HashMap<ShowId, Evaluation>,
    load_generation: u64,
    preview_generation: u64,
}

impl BrowseState {
    /// Bump and return the fetch generation; responses carrying an
    /// older generation are stale and dropped.
    pub fn next_load_generation(&mut self) -> u64 {
        self.load_generation += 1;
        self.load_generation
    }

    pub fn current_load_generation(&self) -> u64 {
        self.load_generation
    }

    /// Bump and return the preview timer generation; a fired timer
    /// whose generation no longer matches was cancelled.
    pub fn next_preview_generation(&mut self) -> u64 {
        self.preview_generation += 1;
        self.preview_generation
    }

    /// Look up a show by id across everything currently loaded.
    pub fn find_show(&self, id: ShowId) -> Option<&Show> {
        if let Some(sections) = self.sections.loaded() {
            for section in sections {
                if let Some(show) = section.shows.iter().find(|show| show.id == id) {
                    return Some(show);
                }
            }
        }
        self.my_list
            .loaded()
            .and_then(|shows| shows.iter().find(|show| show.id == id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generations_are_monotonic() {
        let mut state = BrowseState::default();
        let first = state.next_load_generation();
        let second = state.next_load_generation();
        assert!(second > first);
        assert_eq!(state.current_load_generation(), second);
    }

    #[test]
    fn tab_kind_filters_match_labels() {
        assert_eq!(HomeTab::Films.kind(), Some(ShowKind::Film));
        assert_eq!(HomeTab::Series.kind(), Some(ShowKind::Series));
        assert_eq!(HomeTab::Home.kind(), None);
    }
}
