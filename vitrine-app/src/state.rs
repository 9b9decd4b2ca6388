//! Root application state.

use std::sync::Arc;

use crate::app::bootstrap::AppConfig;
use crate::domains::browse::BrowseState;
use crate::domains::session::SessionState;
use crate::domains::ui::views::slider::SliderRegistry;
use crate::infra::measurement::Dimension;

/// Where the shell currently is, derived from session state rather
/// than stored, so it can never disagree with it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Login,
    Profiles,
    Browse,
}

#[derive(Debug)]
pub struct UiState {
    /// Latest window width; the layout measurement derives from it.
    pub window_width: f32,
    pub sliders: SliderRegistry,
}

#[derive(Debug)]
pub struct State {
    pub config: Arc<AppConfig>,
    pub session: SessionState,
    pub browse: BrowseState,
    pub ui: UiState,
}

impl State {
    pub fn new(config: Arc<AppConfig>) -> Self {
        Self {
            config,
            session: SessionState::from_storage(),
            browse: BrowseState::default(),
            ui: UiState {
                window_width: crate::app::INITIAL_WINDOW_SIZE.width,
                sliders: SliderRegistry::new(),
            },
        }
    }

    pub fn route(&self) -> Route {
        if !self.session.account.is_authenticated() {
            Route::Login
        } else if self.session.managing_profiles || self.session.selected_profile.is_none() {
            Route::Profiles
        } else {
            Route::Browse
        }
    }

    /// Current slider measurement derived from the window width.
    pub fn dimension(&self) -> Dimension {
        Dimension::from_window_width(self.ui.window_width)
    }

    /// Drop loaded content and slider state (logout, profile switch).
    pub fn reset_browse(&mut self) {
        self.browse = BrowseState::default();
        self.ui.sliders.clear();
    }
}
