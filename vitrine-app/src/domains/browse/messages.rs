//! Browse messages.

use vitrine_model::{Evaluation, Section, Show, ShowId};

use crate::domains::ui::views::slider::SliderKey;

use super::state::HomeTab;

#[derive(Debug, Clone)]
pub enum BrowseMessage {
    TabSelected(HomeTab),

    // Fetch results, tagged with the load generation that started them
    SectionsLoaded(u64, Result<Vec<Section>, String>),
    ListLoaded(u64, Result<Vec<Show>, String>),

    // Hover preview lifecycle
    CardHovered {
        slider: SliderKey,
        band_position: usize,
        show: ShowId,
    },
    CardUnhovered,
    PreviewTimerFired(u64),
    PreviewDismissed,
    PreviewHideFinished(u64),

    // Modal interactions
    ToggleListed(ShowId),
    Evaluated(ShowId, Evaluation),
    PlayRequested(ShowId),
}
